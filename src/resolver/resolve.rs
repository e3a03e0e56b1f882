//! Core resolution types and traits.
//!
//! This module defines the `Resolve` trait and supporting types that form
//! the foundation of the name-resolution abstraction layer.

use crate::base::error::ResolveError;
use crate::base::types::{Address, ChainId};
use crate::domain::Domain;
use std::{borrow::Cow, collections::HashMap, fmt, future::Future, pin::Pin, sync::Arc};

/// Alias for the `Future` type returned by a resolver.
pub type Resolving = Pin<Box<dyn Future<Output = Result<Address, ResolveError>> + Send>>;

/// Trait for domain-to-address resolution.
///
/// This is the core abstraction for name-service resolvers in namesys.
/// Implementations must be thread-safe.
///
/// # Design Notes
///
/// - Resolution is assumed to always be ready (no backpressure).
/// - Uses `&self` so one shared resolver can serve several request machines.
/// - Returns boxed futures for trait object compatibility.
pub trait Resolve: Send + Sync {
    /// Resolves a domain name to its address on the given chain.
    fn resolve(&self, domain: Domain, chain_id: ChainId) -> Resolving;
}

/// Blanket implementation for Arc-wrapped resolvers.
impl<R: Resolve + ?Sized> Resolve for Arc<R> {
    fn resolve(&self, domain: Domain, chain_id: ChainId) -> Resolving {
        (**self).resolve(domain, chain_id)
    }
}

/// Resolver wrapper that supports per-domain overrides.
///
/// This resolver first checks a map of domain-to-address overrides before
/// falling back to the underlying resolver. Useful for:
/// - Testing without a live name service
/// - Pinning specific addresses for certain names
/// - Local development with custom names
///
/// # Example
///
/// ```rust,ignore
/// use namesys::resolver::{ResolverWithOverrides, TableResolver};
/// use std::collections::HashMap;
///
/// let mut overrides = HashMap::new();
/// overrides.insert(
///     "treasury.local".into(),
///     vec![(ChainId::new(0), Address::new("0x3e5f..."))],
/// );
///
/// let resolver = ResolverWithOverrides::new(
///     Arc::new(TableResolver::new()),
///     overrides,
/// );
/// ```
pub struct ResolverWithOverrides {
    inner: Arc<dyn Resolve>,
    overrides: Arc<HashMap<Cow<'static, str>, Vec<(ChainId, Address)>>>,
}

impl ResolverWithOverrides {
    /// Creates a new resolver with the given overrides.
    ///
    /// # Arguments
    ///
    /// * `inner` - The fallback resolver for non-overridden names.
    /// * `overrides` - Map of names to their per-chain addresses.
    pub fn new(
        inner: Arc<dyn Resolve>,
        overrides: HashMap<Cow<'static, str>, Vec<(ChainId, Address)>>,
    ) -> Self {
        Self {
            inner,
            overrides: Arc::new(overrides),
        }
    }

    /// Returns the number of configured overrides.
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }
}

impl Resolve for ResolverWithOverrides {
    fn resolve(&self, domain: Domain, chain_id: ChainId) -> Resolving {
        // Check overrides first
        if let Some(entries) = self.overrides.get(domain.as_str()) {
            let found = entries
                .iter()
                .find(|(chain, _)| *chain == chain_id)
                .map(|(_, address)| address.clone());
            return Box::pin(std::future::ready(match found {
                Some(address) => Ok(address),
                // An overridden name never falls through to the inner
                // resolver, even when the chain entry is missing.
                None => Err(ResolveError::NotFound {
                    domain: domain.to_string(),
                }),
            }));
        }
        // Fall back to inner resolver
        self.inner.resolve(domain, chain_id)
    }
}

impl fmt::Debug for ResolverWithOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolverWithOverrides")
            .field("override_count", &self.overrides.len())
            .finish_non_exhaustive()
    }
}
