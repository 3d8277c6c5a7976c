//! # tabsplit-core: Pure Business Logic for Tabsplit
//!
//! This crate holds the bill-splitting logic as pure functions and values
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tabsplit Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │           Front-end (terminal shell, or browser via ts-rs)      │   │
//! │  │    People list ──► Bill editor ──► Shared costs ──► Results     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ BillCommand                            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tabsplit-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌───────────┐  │   │
//! │  │   │   bill    │  │calculator │  │   money    │  │  format   │  │   │
//! │  │   │ BillStore │  │  split()  │  │ Money/Rate │  │ $1,234.50 │  │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (PersonBill, SharedCosts, Rate, SplitSummary)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`bill`] - The bill store and the commands that update it
//! - [`calculator`] - The split itself
//! - [`format`] - Currency display and input coercion
//! - [`error`] - Domain error types
//! - [`validation`] - Input checks
//!
//! ## Example Usage
//!
//! ```rust
//! use tabsplit_core::{BillCommand, BillStore, Money, SharedCostKind};
//!
//! let store = BillStore::new().apply(BillCommand::AddPerson).unwrap();
//! let id = store.bills()[0].id;
//!
//! let store = store
//!     .apply(BillCommand::AddItemCost { id, amount: Money::from_cents(2000) })
//!     .unwrap()
//!     .apply(BillCommand::SetSharedCost {
//!         kind: SharedCostKind::Tip,
//!         amount: Some(Money::from_cents(400)),
//!     })
//!     .unwrap();
//!
//! let summary = store.split();
//! assert_eq!(summary.individuals[0].total.cents(), 2400);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod bill;
pub mod calculator;
pub mod error;
pub mod format;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use bill::{BillCommand, BillStore};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a person's name, in characters.
pub const MAX_NAME_LENGTH: usize = 80;

/// Largest amount a currency field accepts: $1,000,000,000,000.00.
pub const MAX_AMOUNT_CENTS: i64 = 100_000_000_000_000;
