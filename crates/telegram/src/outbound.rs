//! Confirmation replies sent back into the chat.

use {
    chrono::{DateTime, Utc},
    teloxide::{
        payloads::SendMessageSetters,
        prelude::*,
        types::{ChatId, MessageId, ReplyParameters},
    },
    tracing::debug,
};

/// Send `text` as a reply to the triggering message.
pub async fn send_reply(
    bot: &Bot,
    chat_id: ChatId,
    reply_to: MessageId,
    text: &str,
) -> crate::Result<()> {
    debug!(chat_id = chat_id.0, "sending reply");
    bot.send_message(chat_id, text)
        .reply_parameters(ReplyParameters::new(reply_to).allow_sending_without_reply())
        .await?;
    Ok(())
}

/// Reply for a successfully linked acknowledgment.
pub fn confirmation_text(full_name: &str, version: &str, timestamp: DateTime<Utc>) -> String {
    format!(
        "✓ Recorded: {full_name} acknowledged HHG Employee Handbook v{version}\nTimestamp: {}",
        timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    )
}

/// Reply when the employee already acknowledged this version. The new row is
/// still appended; the reply just points at the earlier one.
pub fn duplicate_text(full_name: &str, version: &str) -> String {
    format!(
        "✓ {full_name}, you've already acknowledged handbook v{version}. Noted again for the record."
    )
}

/// Reply when no directory record matched the declared name. The event is
/// recorded unlinked; the reply asks the employee to resend with their exact
/// directory name.
pub fn unlinked_text(declared: &str, suggestions: &[String], version: &str) -> String {
    if suggestions.is_empty() {
        return format!(
            "⚠️ Name not found: \"{declared}\"\n\n\
             Your acknowledgment was logged but could not be linked to an employee record. \
             Please resend using your full name exactly as it appears in our system, \
             or contact your manager."
        );
    }

    let listed = suggestions
        .iter()
        .map(|s| format!("• {s}"))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "⚠️ Name not found: \"{declared}\"\n\n\
         Did you mean one of these?\n{listed}\n\n\
         Please resend using your exact name, e.g.:\n\
         I, {first}, acknowledge and agree to the HHG Employee Handbook v{version}",
        first = suggestions[0],
    )
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use {super::*, chrono::TimeZone};

    #[test]
    fn confirmation_mentions_name_version_and_timestamp() {
        let ts = Utc.with_ymd_and_hms(2026, 1, 21, 9, 30, 0).unwrap();
        let text = confirmation_text("Jane Doe", "2026-01-20", ts);
        assert!(text.contains("Jane Doe"));
        assert!(text.contains("v2026-01-20"));
        assert!(text.contains("2026-01-21 09:30:00 UTC"));
    }

    #[test]
    fn unlinked_without_suggestions_asks_for_exact_name() {
        let text = unlinked_text("Jane Do", &[], "2026-01-20");
        assert!(text.contains("Jane Do"));
        assert!(text.contains("could not be linked"));
    }

    #[test]
    fn unlinked_with_suggestions_lists_them_and_shows_an_example() {
        let suggestions = vec!["Jane Doe".to_string(), "Janet Dove".to_string()];
        let text = unlinked_text("Jane Do", &suggestions, "2026-01-20");
        assert!(text.contains("• Jane Doe"));
        assert!(text.contains("• Janet Dove"));
        assert!(text.contains(
            "I, Jane Doe, acknowledge and agree to the HHG Employee Handbook v2026-01-20"
        ));
    }

    #[test]
    fn duplicate_notice_names_the_version() {
        let text = duplicate_text("Jane Doe", "2026-01-20");
        assert!(text.contains("already acknowledged"));
        assert!(text.contains("v2026-01-20"));
    }
}
