//! # State Module
//!
//! Application state for the terminal front-end.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────────┐   ┌──────────────────────────────┐   │
//! │  │   BillState                  │   │   ConfigState                │   │
//! │  │                              │   │                              │   │
//! │  │  BillStore (current value)   │   │  prompt                      │   │
//! │  │  last calculated split       │   │  json output                 │   │
//! │  │                              │   │  log filter                  │   │
//! │  └──────────────────────────────┘   └──────────────────────────────┘   │
//! │                                                                         │
//! │  One shell owns both; every input line is handled to completion        │
//! │  before the next is read, so nothing here is shared or locked.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod bill;
mod config;

pub use bill::{BillState, CalculatedSplit};
pub use config::ConfigState;
