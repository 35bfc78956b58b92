//! # kiosk-core: Pure Business Logic for Kiosk
//!
//! This crate is the **heart** of Kiosk, a small-shop order console. It
//! contains the sequence containers everything else is built on, plus the
//! domain types the shell consumes, as pure logic with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       Kiosk Architecture                        │
//! │                                                                 │
//! │  ┌───────────────────────────────────────────────────────────┐  │
//! │  │                 Console Shell (apps/console)              │  │
//! │  │   Menu loop ──► Catalog search ──► Order entry ──► Reports│  │
//! │  └─────────────────────────────┬─────────────────────────────┘  │
//! │                                │ plain function calls           │
//! │  ┌─────────────────────────────▼─────────────────────────────┐  │
//! │  │               ★ kiosk-core (THIS CRATE) ★                 │  │
//! │  │                                                           │  │
//! │  │   ┌─────────┐  ┌─────────┐  ┌─────────┐  ┌────────────┐   │  │
//! │  │   │  queue  │  │  stack  │  │  money  │  │   types    │   │  │
//! │  │   │ Queue   │  │ Stack   │  │  Money  │  │  Product   │   │  │
//! │  │   │ reports │  │ prefix  │  │         │  │  Order     │   │  │
//! │  │   └─────────┘  └─────────┘  └─────────┘  └────────────┘   │  │
//! │  │                                                           │  │
//! │  │   NO I/O • NO TERMINAL • NO FILES • PURE FUNCTIONS        │  │
//! │  └───────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`queue`] - Sentinel-based FIFO queue with bounded reports
//! - [`stack`] - Sentinel-based LIFO stack with order-preserving prefix copy
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Domain types (Product, Order, PaymentMethod)
//! - [`error`] - Container and domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is deterministic - same input = same output
//! 2. **No I/O**: Terminal, file system, network access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use kiosk_core::Queue;
//!
//! let mut waiting = Queue::new();
//! waiting.enqueue(10.0);
//! waiting.enqueue(20.0);
//! waiting.enqueue(30.0);
//!
//! // Average of the first 3 entries
//! let mean = waiting.average_of(|v| Some(*v), 3).unwrap();
//! assert_eq!(mean, 20.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod queue;
pub mod stack;
pub mod types;

mod node;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use kiosk_core::Queue` instead of
// `use kiosk_core::queue::Queue`

pub use error::{ContainerError, ContainerResult, CoreError, CoreResult};
pub use money::Money;
pub use queue::Queue;
pub use stack::Stack;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum products allowed in a single order.
///
/// ## Business Reason
/// Keeps order tickets a readable size at the counter. Can be made
/// configurable per shop in future versions.
pub const MAX_ORDER_PRODUCTS: usize = 10;
