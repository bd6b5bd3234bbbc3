use std::sync::Arc;

use {
    teloxide::prelude::*,
    tracing::{debug, info, warn},
};

use {
    ackbot_matcher::AckMatcher,
    ackbot_store::{AcknowledgmentEvent, AuditLog, EmployeeDirectory, similar_names},
};

use crate::{Result, access, outbound};

/// How many directory names to offer when the declared name is unknown.
const SUGGESTION_LIMIT: usize = 3;

/// Shared context for the message handler.
#[derive(Clone)]
pub struct HandlerContext {
    pub matcher: AckMatcher,
    pub directory: Arc<dyn EmployeeDirectory>,
    pub audit: Arc<dyn AuditLog>,
    /// The single chat the bot listens to; `None` disables gating.
    pub allowed_chat_id: Option<i64>,
}

/// A matched message, ready to be recorded and answered.
#[derive(Debug)]
pub struct PendingAck {
    pub event: AcknowledgmentEvent,
    pub reply: String,
    /// Employee whose directory row should get the sender's Telegram
    /// identity (set when the link was made by name only).
    backfill_employee_id: Option<i64>,
    telegram_username: Option<String>,
}

/// Evaluate one inbound message: gate, match, link, and build the audit
/// event plus the reply text. Returns `Ok(None)` for messages that should be
/// silently ignored.
///
/// Nothing is written here — the caller appends the event and only then
/// sends the reply.
pub async fn evaluate(ctx: &HandlerContext, msg: &Message) -> Result<Option<PendingAck>> {
    let Some(text) = msg.text() else {
        return Ok(None);
    };

    if let Err(denied) = access::check_access(ctx.allowed_chat_id, msg.chat.id.0) {
        debug!(chat_id = msg.chat.id.0, %denied, "dropping message");
        return Ok(None);
    }

    let Some(ack) = ctx.matcher.match_text(text) else {
        return Ok(None);
    };

    // Channel posts and service messages carry no sender to link against.
    let Some(from) = msg.from.as_ref() else {
        debug!(chat_id = msg.chat.id.0, "matched message has no sender; ignoring");
        return Ok(None);
    };
    let platform_user_id = from.id.0.to_string();

    // Linker: Telegram id first, then exact (case-insensitive) name.
    let mut matched_by_name = false;
    let mut employee = ctx.directory.find_by_telegram_id(&platform_user_id).await?;
    if employee.is_none() {
        employee = ctx.directory.find_by_name(&ack.declared_full_name).await?;
        matched_by_name = employee.is_some();
    }

    let already_on_file = match &employee {
        Some(e) => ctx.audit.has_acknowledged(e.id, &ack.handbook_version).await?,
        None => false,
    };

    let event = AcknowledgmentEvent {
        employee_id: employee.as_ref().map(|e| e.id),
        platform_user_id: platform_user_id.clone(),
        declared_full_name: ack.declared_full_name.clone(),
        handbook_version: ack.handbook_version.clone(),
        message_timestamp: msg.date,
        raw_message: serde_json::to_value(msg)?,
    };

    let reply = match &employee {
        Some(e) if already_on_file => {
            outbound::duplicate_text(&e.full_name, &ack.handbook_version)
        },
        Some(e) => {
            outbound::confirmation_text(&e.full_name, &ack.handbook_version, msg.date)
        },
        None => {
            let names = ctx.directory.all_names().await?;
            let suggestions = similar_names(&ack.declared_full_name, &names, SUGGESTION_LIMIT);
            warn!(
                declared = %ack.declared_full_name,
                platform_user_id,
                "no employee record matched; recording unlinked"
            );
            outbound::unlinked_text(&ack.declared_full_name, &suggestions, &ack.handbook_version)
        },
    };

    let backfill_employee_id = match &employee {
        Some(e) if matched_by_name
            && e.telegram_user_id.as_deref() != Some(platform_user_id.as_str()) =>
        {
            Some(e.id)
        },
        _ => None,
    };

    Ok(Some(PendingAck {
        event,
        reply,
        backfill_employee_id,
        telegram_username: from.username.clone(),
    }))
}

/// Handle one inbound message end to end.
///
/// The audit row is appended before the confirmation is sent; if the write
/// fails the error propagates and no reply goes out, so the employee has to
/// resend.
pub async fn handle_message(bot: &Bot, ctx: &HandlerContext, msg: &Message) -> Result<()> {
    let Some(pending) = evaluate(ctx, msg).await? else {
        return Ok(());
    };

    let row_id = ctx.audit.append(&pending.event).await?;
    info!(
        row_id,
        employee_id = ?pending.event.employee_id,
        declared = %pending.event.declared_full_name,
        version = %pending.event.handbook_version,
        "acknowledgment recorded"
    );

    if let Some(employee_id) = pending.backfill_employee_id {
        // Directory backfill is best-effort; the audit row already exists.
        if let Err(e) = ctx
            .directory
            .record_telegram_identity(
                employee_id,
                &pending.event.platform_user_id,
                pending.telegram_username.as_deref(),
            )
            .await
        {
            warn!(employee_id, error = %e, "failed to backfill telegram identity");
        }
    }

    outbound::send_reply(bot, msg.chat.id, msg.id, &pending.reply).await?;
    Ok(())
}
