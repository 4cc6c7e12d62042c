//! Crate error type.

use thiserror::Error;

/// Errors surfaced by the stream and report layers.
///
/// Per-card tolerance lives above this type: a `Json` error on one
/// stream element is logged and skipped by the pass driver, while
/// `Io` and `Stream` errors end the pass.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The card stream contained a byte that cannot start an element.
    #[error("unexpected byte {byte:#04x} at offset {offset} in card stream")]
    Stream { byte: u8, offset: u64 },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
