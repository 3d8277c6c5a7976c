//! # Commands
//!
//! One function per user action. Each takes the state it needs, applies the
//! action and returns a response for the view layer.
//!
//! ```text
//! commands/
//! ├── bill.rs     ◄─── show, calculate, reset
//! ├── person.rs   ◄─── add/rename/delete people, add/delete item costs
//! └── shared.rs   ◄─── tax, tip, other, even-split
//! ```

pub mod bill;
pub mod person;
pub mod shared;

pub use bill::{BillResponse, PersonSummary};
