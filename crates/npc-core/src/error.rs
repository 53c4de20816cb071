//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` where a core
//! failure can surface through them.

use thiserror::Error;

/// The top-level error type for `npc-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `npc-core`.
pub type CoreResult<T> = Result<T, CoreError>;
