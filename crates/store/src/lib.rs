//! PostgreSQL persistence for handbook acknowledgments.
//!
//! Two concerns live here: read access to the employee directory (maintained
//! by HR tooling outside this bot) and the append-only acknowledgment audit
//! log. The audit log deliberately exposes no update or delete operations —
//! rows are immutable once written.

mod error;
mod store;
mod store_memory;
mod store_postgres;
mod suggest;
mod types;

pub use {
    error::{Error, Result},
    store::{AuditLog, EmployeeDirectory},
    store_memory::MemoryStore,
    store_postgres::{PgStore, connect},
    suggest::similar_names,
    types::{AcknowledgmentEvent, EmployeeRecord},
};

/// Run embedded migrations against the given pool.
pub async fn run_migrations(pool: &sqlx::PgPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
