//! SQL DDL for initializing the user store.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema with:
/// - `users`: `id` INTEGER PRIMARY KEY AUTOINCREMENT, `email` UNIQUE
/// - `app_init`: single-row initialization flag, seeded `(1, 0)`.
///   Once `initialized` is set to 1 nothing ever writes it back to 0.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS app_init (
    id INTEGER PRIMARY KEY,
    initialized INTEGER NOT NULL DEFAULT 0
);

INSERT OR IGNORE INTO app_init (id, initialized) VALUES (1, 0);
"#;
