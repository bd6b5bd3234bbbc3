//! Persistence traits for the employee directory and the audit log.

use async_trait::async_trait;

use crate::{
    Result,
    types::{AcknowledgmentEvent, EmployeeRecord},
};

/// Read access to the employee directory, plus the one permitted write:
/// attaching a sender's Telegram identity to a record matched by name.
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    /// Look up an employee by Telegram user id.
    async fn find_by_telegram_id(
        &self,
        telegram_user_id: &str,
    ) -> Result<Option<EmployeeRecord>>;

    /// Look up an employee by exact full name, case-insensitive.
    async fn find_by_name(&self, full_name: &str) -> Result<Option<EmployeeRecord>>;

    /// All directory names, for closest-match suggestions.
    async fn all_names(&self) -> Result<Vec<String>>;

    /// Attach a Telegram identity to an employee record.
    async fn record_telegram_identity(
        &self,
        employee_id: i64,
        telegram_user_id: &str,
        telegram_username: Option<&str>,
    ) -> Result<()>;
}

/// Append-only audit log of acknowledgments.
///
/// No update or delete is exposed: prior rows are immutable once written.
#[async_trait]
pub trait AuditLog: Send + Sync {
    /// Append one acknowledgment row, returning its id.
    async fn append(&self, event: &AcknowledgmentEvent) -> Result<i64>;

    /// Whether the employee already has a row for this handbook version.
    async fn has_acknowledged(&self, employee_id: i64, handbook_version: &str) -> Result<bool>;
}
