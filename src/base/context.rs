//! Ergonomic error context helpers.
//!
//! Provides an extension trait for converting foreign resolver errors into
//! context-rich `ResolveError` values at the invocation boundary.

use crate::base::error::ResolveError;
use std::fmt;

/// Extension trait for adding resolution context to foreign Results.
pub trait ResolveResultExt<T> {
    /// Attach the domain being looked up to a foreign error.
    ///
    /// # Example
    /// ```ignore
    /// use namesys::base::context::ResolveResultExt;
    ///
    /// let lookup = backend.txt_lookup(name).await
    ///     .resolution_context("alice.fuel")?;
    /// // Error: "alice.fuel: no connection to name server"
    /// ```
    fn resolution_context(self, domain: &str) -> Result<T, ResolveError>;
}

impl<T, E: fmt::Display> ResolveResultExt<T> for Result<T, E> {
    fn resolution_context(self, domain: &str) -> Result<T, ResolveError> {
        self.map_err(|e| ResolveError::resolution(format!("{domain}: {e}")))
    }
}
