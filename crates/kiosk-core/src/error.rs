//! # Error Types
//!
//! Domain-specific error types for kiosk-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         Error Types                             │
//! │                                                                 │
//! │  kiosk-core errors (this file)                                  │
//! │  ├── ContainerError  - Queue/Stack operation failures           │
//! │  └── CoreError       - Order rule violations                    │
//! │                                                                 │
//! │  Console shell errors (in app)                                  │
//! │  └── AppError        - What the operator sees (catalog, I/O)    │
//! │                                                                 │
//! │  Flow: ContainerError/CoreError → AppError → operator message   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (requested/available counts)
//! 3. Errors are enum variants, never String
//! 4. Every failure is recoverable - the shell reports it and returns
//!    to the menu; the core never aborts the process

use thiserror::Error;

// =============================================================================
// Container Error
// =============================================================================

/// Failures reported by the [`Queue`](crate::Queue) and
/// [`Stack`](crate::Stack) containers.
///
/// These cover the two failure kinds the containers know about: reading from
/// an empty container, and handing a bounded operation a count it cannot
/// satisfy. Counts are `usize`, so a negative count is unrepresentable by
/// construction.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ContainerError {
    /// A read or removal was attempted on an empty container.
    #[error("container is empty")]
    Empty,

    /// A bounded operation that divides by the visit count needs at least
    /// one element to visit.
    #[error("count must be at least 1")]
    ZeroCount,

    /// A bounded operation asked for more elements than the container holds.
    ///
    /// ## When This Occurs
    /// - `Queue::average_of` with a count above `len()`
    /// - `Stack::take_prefix` with a count above `len()`
    ///
    /// Note that `Queue::filter_prefix` never raises this: it clamps instead.
    #[error("requested {requested} elements, container holds {available}")]
    InvalidCount { requested: usize, available: usize },
}

// =============================================================================
// Core Error
// =============================================================================

/// Order rule violations.
///
/// These errors represent business rule violations. They should be caught
/// and translated to operator-facing messages by the shell.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// An order has hit its product limit.
    ///
    /// ## When This Occurs
    /// - Adding a product to an order that already holds
    ///   [`MAX_ORDER_PRODUCTS`](crate::MAX_ORDER_PRODUCTS) products
    #[error("order cannot hold more than {max} products")]
    OrderFull { max: usize },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with ContainerError.
pub type ContainerResult<T> = Result<T, ContainerError>;

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_error_messages() {
        assert_eq!(ContainerError::Empty.to_string(), "container is empty");
        assert_eq!(
            ContainerError::InvalidCount {
                requested: 5,
                available: 3,
            }
            .to_string(),
            "requested 5 elements, container holds 3"
        );
    }

    #[test]
    fn test_core_error_messages() {
        let err = CoreError::OrderFull { max: 10 };
        assert_eq!(err.to_string(), "order cannot hold more than 10 products");
    }
}
