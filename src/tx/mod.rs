//! Transaction Display Module
//!
//! Small pure helpers for rendering transaction history entries.

mod icon;

pub use icon::{tx_icon, OperationKind, TxIcon};
