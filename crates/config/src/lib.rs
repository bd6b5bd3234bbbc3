//! Configuration for the acknowledgment bot.
//!
//! All settings come from the environment, read once at startup.

mod schema;

pub use schema::{BotConfig, Error, Result};
