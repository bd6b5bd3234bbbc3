//! PostgreSQL-backed directory and audit log using sqlx.

use {
    async_trait::async_trait,
    sqlx::{PgPool, postgres::PgPoolOptions, types::Json},
};

use crate::{
    Result,
    store::{AuditLog, EmployeeDirectory},
    types::{AcknowledgmentEvent, EmployeeRecord},
};

/// Connect to PostgreSQL and run migrations.
///
/// Works against any hosted instance; the connection string is the only
/// thing Supabase-specific about a Supabase deployment.
pub async fn connect(database_url: &str) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    crate::run_migrations(&pool).await?;

    Ok(pool)
}

/// PostgreSQL-backed persistence for the directory and the audit log.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Create a store using an existing pool (migrations must already be run).
    ///
    /// Call [`crate::run_migrations`] first, or use [`connect`] which does
    /// both.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeDirectory for PgStore {
    async fn find_by_telegram_id(
        &self,
        telegram_user_id: &str,
    ) -> Result<Option<EmployeeRecord>> {
        let record = sqlx::query_as::<_, EmployeeRecord>(
            "SELECT id, full_name, telegram_user_id, telegram_username
             FROM employees
             WHERE telegram_user_id = $1",
        )
        .bind(telegram_user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record)
    }

    async fn find_by_name(&self, full_name: &str) -> Result<Option<EmployeeRecord>> {
        let record = sqlx::query_as::<_, EmployeeRecord>(
            "SELECT id, full_name, telegram_user_id, telegram_username
             FROM employees
             WHERE LOWER(full_name) = LOWER($1)",
        )
        .bind(full_name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record)
    }

    async fn all_names(&self) -> Result<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>("SELECT full_name FROM employees")
            .fetch_all(&self.pool)
            .await?;
        Ok(names)
    }

    async fn record_telegram_identity(
        &self,
        employee_id: i64,
        telegram_user_id: &str,
        telegram_username: Option<&str>,
    ) -> Result<()> {
        sqlx::query(
            "UPDATE employees
             SET telegram_user_id = $1, telegram_username = $2, updated_at = NOW()
             WHERE id = $3",
        )
        .bind(telegram_user_id)
        .bind(telegram_username)
        .bind(employee_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl AuditLog for PgStore {
    async fn append(&self, event: &AcknowledgmentEvent) -> Result<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO acknowledgments (
                 employee_id, platform_user_id, declared_full_name,
                 handbook_version, message_timestamp, raw_message
             ) VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id",
        )
        .bind(event.employee_id)
        .bind(&event.platform_user_id)
        .bind(&event.declared_full_name)
        .bind(&event.handbook_version)
        .bind(event.message_timestamp)
        .bind(Json(&event.raw_message))
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn has_acknowledged(&self, employee_id: i64, handbook_version: &str) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                 SELECT 1 FROM acknowledgments
                 WHERE employee_id = $1 AND handbook_version = $2
             )",
        )
        .bind(employee_id)
        .bind(handbook_version)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }
}
