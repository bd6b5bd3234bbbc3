use {
    chrono::{DateTime, Utc},
    serde::{Deserialize, Serialize},
};

/// A row in the employee directory.
///
/// The directory is maintained elsewhere; this bot only reads it, apart from
/// the Telegram identity backfill after a name match.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct EmployeeRecord {
    pub id: i64,
    pub full_name: String,
    pub telegram_user_id: Option<String>,
    pub telegram_username: Option<String>,
}

/// One recorded acknowledgment, created once per matched message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcknowledgmentEvent {
    /// Linked employee, or `None` when the sender could not be resolved
    /// against the directory.
    pub employee_id: Option<i64>,
    /// Telegram user id of the sender.
    pub platform_user_id: String,
    /// Full name exactly as declared in the message.
    pub declared_full_name: String,
    pub handbook_version: String,
    /// Telegram timestamp of the triggering message.
    pub message_timestamp: DateTime<Utc>,
    /// Opaque structured copy of the inbound Telegram message.
    pub raw_message: serde_json::Value,
}
