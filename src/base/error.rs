use thiserror::Error;

/// Failures that can surface from a name resolution request.
///
/// Every variant is caught at the resolution-invocation boundary and stored
/// as a human-readable message in the machine context; none of them escape
/// the request driver.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No chain id was available when the resolver call was issued.
    ///
    /// Synthesized locally before any external call and surfaced identically
    /// to a remote failure.
    #[error("chain id not available")]
    ChainIdNotAvailable,

    /// A retry was requested with no retained request to re-run.
    #[error("no request available to retry")]
    RequestNotAvailable,

    /// The name failed the syntactic validity check.
    #[error("invalid domain: {domain}")]
    InvalidDomain { domain: String },

    /// The resolver answered negatively for this name.
    #[error("name not found: {domain}")]
    NotFound { domain: String },

    /// Any other resolver-side failure; the message is kept verbatim.
    #[error("{message}")]
    Resolution { message: String },
}

impl ResolveError {
    /// Wraps an arbitrary resolver-side failure message.
    pub fn resolution(message: impl Into<String>) -> Self {
        ResolveError::Resolution {
            message: message.into(),
        }
    }

    /// True for failures synthesized locally, before any external call.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            ResolveError::ChainIdNotAvailable | ResolveError::RequestNotAvailable
        )
    }
}
