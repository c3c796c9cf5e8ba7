// ABOUTME: User record store database operations
// ABOUTME: Handles local registration, credential lookup, and duplicate-mobile checks

use super::Database;
use crate::models::{NewUser, UserRecord};
use anyhow::Result;
use sqlx::Row;

impl Database {
    /// Create the users table and lookup index
    ///
    /// `mobile` deliberately carries no UNIQUE constraint: duplicate
    /// prevention is a caller-side pre-check via
    /// [`Database::is_mobile_registered`], and two concurrent
    /// registrations with the same mobile can both succeed.
    ///
    /// # Errors
    ///
    /// Returns an error if table or index creation fails.
    pub(super) async fn migrate_users(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                mobile TEXT NOT NULL,
                password TEXT NOT NULL,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_users_mobile ON users(mobile)")
            .execute(self.pool())
            .await?;

        Ok(())
    }

    /// Insert a new user record, returning the generated id
    ///
    /// No uniqueness check is enforced at this layer; callers pre-check
    /// with [`Database::is_mobile_registered`].
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub async fn register_user(&self, user: &NewUser) -> Result<i64> {
        let result = sqlx::query(
            r"
            INSERT INTO users (name, email, mobile, password)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.mobile)
        .bind(&user.password)
        .execute(self.pool())
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Find the first user matching the exact (mobile, password) pair
    ///
    /// Drives the local-only login determination, subordinate to the
    /// remote server's authoritative login.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_credentials(
        &self,
        mobile: &str,
        password: &str,
    ) -> Result<Option<UserRecord>> {
        let row = sqlx::query(
            r"
            SELECT id, name, email, mobile, password, created_at
            FROM users WHERE mobile = $1 AND password = $2 LIMIT 1
            ",
        )
        .bind(mobile)
        .bind(password)
        .fetch_optional(self.pool())
        .await?;

        row.map(|row| Self::row_to_user(&row)).transpose()
    }

    /// Existence check by mobile only, ignoring password
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn is_mobile_registered(&self, mobile: &str) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE mobile = $1")
            .bind(mobile)
            .fetch_one(self.pool())
            .await?;

        Ok(count > 0)
    }

    /// Get total user count
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn user_count(&self) -> Result<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool())
            .await?;
        Ok(count)
    }

    /// Convert a database row to a `UserRecord`
    fn row_to_user(row: &sqlx::sqlite::SqliteRow) -> Result<UserRecord> {
        Ok(UserRecord {
            id: row.get("id"),
            name: row.get("name"),
            email: row.get("email"),
            mobile: row.get("mobile"),
            password: row.get("password"),
            created_at: row.get("created_at"),
        })
    }
}
