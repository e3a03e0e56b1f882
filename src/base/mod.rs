//! Base types and error handling.
//!
//! Provides foundational types shared across the crate:
//! - [`error::ResolveError`]: the failure taxonomy for resolution requests
//! - [`types::ChainId`] and [`types::Address`]: chain-scoped identifiers

pub mod context;
pub mod error;
pub mod types;
