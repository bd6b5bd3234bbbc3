/// Determine if an inbound message should be processed.
///
/// Returns `Ok(())` if the message came from the allow-listed chat, or
/// `Err(reason)` if it should be silently dropped. A `None` allow-list
/// disables gating (local testing only).
pub fn check_access(allowed_chat_id: Option<i64>, chat_id: i64) -> Result<(), AccessDenied> {
    match allowed_chat_id {
        None => Ok(()),
        Some(allowed) if allowed == chat_id => Ok(()),
        Some(_) => Err(AccessDenied::ChatNotAllowed { chat_id }),
    }
}

/// Reason an inbound message was denied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDenied {
    ChatNotAllowed { chat_id: i64 },
}

impl std::fmt::Display for AccessDenied {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ChatNotAllowed { chat_id } => {
                write!(f, "chat {chat_id} is not the allow-listed chat")
            },
        }
    }
}
