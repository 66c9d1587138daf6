//! # orderdesk-core: Pure Business Logic for Orderdesk
//!
//! This crate is the **heart** of the inventory/order tool. It contains the
//! domain records and their validation rules as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Orderdesk Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation layer (GUI)                        │   │
//! │  │    client forms ──► product forms ──► create-order screen       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain function calls                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ orderdesk-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐            ┌───────────┐                        │   │
//! │  │   │   types   │            │ validation│                        │   │
//! │  │   │  Client   │            │   rules   │                        │   │
//! │  │   │  Product  │            │  checks   │                        │   │
//! │  │   │  Order    │            └───────────┘                        │   │
//! │  │   └───────────┘                                                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 orderdesk-db (Database Layer)                   │   │
//! │  │        SQLite mapper, repositories, order fulfillment           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: validation is deterministic - same input = same output
//! 2. **No I/O**: database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: prices are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: validation outcomes are `Result` values, never panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use types::{Client, Order, Product};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of any free-text field (name, email, address, description).
///
/// ## Business Reason
/// The stored columns are sized for short display strings; the forms in the
/// presentation layer truncate at the same bound.
pub const MAX_FIELD_LEN: usize = 44;

/// Minimum length of a client name.
pub const MIN_NAME_LEN: usize = 3;

/// Minimum length of a client address.
pub const MIN_ADDRESS_LEN: usize = 5;

/// Exact number of digits in a client phone number.
pub const PHONE_LEN: usize = 10;
