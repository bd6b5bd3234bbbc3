//! Telegram front end for the handbook acknowledgment bot.
//!
//! Receives group messages via the Bot API (manual long polling), gates them
//! to the allow-listed chat, and replies with a confirmation once the
//! acknowledgment row has been written.

pub mod access;
pub mod bot;
pub mod handlers;
pub mod outbound;

pub use {bot::start_polling, handlers::HandlerContext};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Telegram(#[from] teloxide::RequestError),

    #[error(transparent)]
    Store(#[from] ackbot_store::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
