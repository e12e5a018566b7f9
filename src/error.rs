//! Startup errors
//!
//! The simulation itself never fails; only wiring it to a host can.

use thiserror::Error;

/// Fatal problems found while setting up the game. Reported once, then the game
/// does not start.
#[derive(Debug, Error)]
pub enum InitError {
    /// A required element is missing from the page
    #[error("required element #{0} not found")]
    MissingElement(&'static str),

    /// No global window (not running in a browser main thread)
    #[error("no window available")]
    NoWindow,

    /// Window has no document
    #[error("no document available")]
    NoDocument,

    /// Tuning document is not valid JSON for [`crate::Tuning`]
    #[error("invalid tuning: {0}")]
    Tuning(#[from] serde_json::Error),

    /// A DOM call failed
    #[error("dom error: {0}")]
    Dom(String),
}
