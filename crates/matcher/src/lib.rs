//! Acknowledgment phrase matching.
//!
//! Employees register agreement by sending the fixed template
//! `I, <Full Name>, acknowledge and agree to the HHG Employee Handbook v<version>`
//! into the monitored group chat. [`AckMatcher`] tests message text against
//! that template, with the handbook version pinned to the configured value.

mod phrase;

pub use phrase::{Acknowledgment, AckMatcher};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
