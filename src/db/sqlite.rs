use crate::db::models::UserRecord;
use crate::db::schema::SQLITE_INIT;
use crate::error::ApiError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

#[derive(Clone)]
pub struct UserStorage {
    pool: SqlitePool,
}

impl UserStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the database at `database_url` and run the
    /// bundled DDL.
    pub async fn connect(database_url: &str) -> Result<Self, ApiError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
        let storage = Self::new(pool);
        storage.init_schema().await?;
        Ok(storage)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), ApiError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<UserRecord>, ApiError> {
        let row = sqlx::query_as::<_, UserRecord>(
            "SELECT id, name, email, password_hash FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, ApiError> {
        let row = sqlx::query_as::<_, UserRecord>(
            "SELECT id, name, email, password_hash FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn list_all(&self) -> Result<Vec<UserRecord>, ApiError> {
        let rows = sqlx::query_as::<_, UserRecord>(
            "SELECT id, name, email, password_hash FROM users ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Insert a new user and return its generated id.
    pub async fn insert(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<i64, ApiError> {
        let result = sqlx::query("INSERT INTO users (name, email, password_hash) VALUES (?, ?, ?)")
            .bind(name)
            .bind(email)
            .bind(password_hash)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn update(
        &self,
        id: i64,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<(), ApiError> {
        sqlx::query("UPDATE users SET name = ?, email = ?, password_hash = ? WHERE id = ?")
            .bind(name)
            .bind(email)
            .bind(password_hash)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn exists(&self, id: i64) -> Result<bool, ApiError> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT id FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }

    pub async fn is_initialized(&self) -> Result<bool, ApiError> {
        let row: Option<(i64,)> =
            sqlx::query_as("SELECT initialized FROM app_init WHERE id = 1")
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(|(flag,)| flag != 0).unwrap_or(false))
    }

    /// Claim the initialization flag and seed the admin account in one
    /// transaction. Returns `false` when another caller already claimed it.
    ///
    /// The claiming `UPDATE ... WHERE initialized = 0` is the first statement
    /// of the transaction, so concurrent invocations serialize on the SQLite
    /// write lock: exactly one observes a changed row, every other sees zero
    /// rows affected once the winner commits.
    pub async fn initialize_with_admin(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<bool, ApiError> {
        let mut tx = self.pool.begin().await?;

        let claimed =
            sqlx::query("UPDATE app_init SET initialized = 1 WHERE id = 1 AND initialized = 0")
                .execute(&mut *tx)
                .await?
                .rows_affected();
        if claimed == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        let existing: Option<(i64,)> = sqlx::query_as("SELECT id FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&mut *tx)
            .await?;
        if existing.is_none() {
            sqlx::query("INSERT INTO users (name, email, password_hash) VALUES (?, ?, ?)")
                .bind(name)
                .bind(email)
                .bind(password_hash)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(true)
    }
}
