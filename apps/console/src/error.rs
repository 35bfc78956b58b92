//! # App Error Type
//!
//! Unified error type for the console shell.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Kiosk                          │
//! │                                                                 │
//! │  kiosk-core                      console shell                  │
//! │  ──────────                      ─────────────                  │
//! │                                                                 │
//! │  ContainerError ──► AppError ──► printed to the operator,       │
//! │                                  control returns to the menu    │
//! │                                                                 │
//! │  std::io::Error ──► AppError ───► fatal only at startup         │
//! │  (catalog file)                   (missing catalog file)        │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Report failures (`InvalidCount` from the bounded operations) are
//! recoverable by design: the operator corrects the count and retries.
//! Order-entry failures (`CoreError::OrderFull`) never reach this type;
//! the entry loop reports them inline and keeps going.

use kiosk_core::ContainerError;
use thiserror::Error;

/// Anything the console shell can fail with.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog file could not be read at all.
    #[error("cannot read catalog file '{path}': {source}")]
    CatalogIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Catalog file header is not a product count.
    #[error("catalog header '{header}' is not a product count")]
    CatalogHeader { header: String },

    /// Terminal input or output failed.
    #[error("terminal I/O error")]
    Io(#[from] std::io::Error),

    /// A queue/stack operation refused its arguments.
    #[error(transparent)]
    Container(#[from] ContainerError),
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
