//! Request configuration - central wiring for resolution requests.
//!
//! Bundles the resolver stack a request machine runs against: a base
//! resolver plus an optional override layer, assembled in one place so UI
//! code only ever constructs a [`NameRequest`].

use crate::base::types::{Address, ChainId};
use crate::request::session::NameRequest;
use crate::resolver::{Resolve, ResolverWithOverrides};
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

#[cfg(feature = "dns")]
use crate::resolver::DnsTextResolver;
#[cfg(not(feature = "dns"))]
use crate::resolver::TableResolver;

/// Configuration options for building a [`NameRequest`].
#[derive(Default)]
pub struct RequestConfig {
    /// Custom resolver (None = DNS TXT resolver when the `dns` feature is
    /// enabled, otherwise an empty table).
    pub resolver: Option<Arc<dyn Resolve>>,

    /// Name overrides checked before the resolver.
    pub overrides: HashMap<Cow<'static, str>, Vec<(ChainId, Address)>>,
}

impl RequestConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base resolver.
    pub fn with_resolver(mut self, resolver: Arc<dyn Resolve>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Pins `domain` to `address` on `chain_id`, ahead of the base resolver.
    pub fn with_override(
        mut self,
        domain: impl Into<Cow<'static, str>>,
        chain_id: ChainId,
        address: Address,
    ) -> Self {
        self.overrides
            .entry(domain.into())
            .or_default()
            .push((chain_id, address));
        self
    }

    /// Assembles the resolver stack and builds an idle request machine.
    pub fn build(self) -> NameRequest {
        let base: Arc<dyn Resolve> = self.resolver.unwrap_or_else(default_resolver);
        let resolver: Arc<dyn Resolve> = if self.overrides.is_empty() {
            base
        } else {
            Arc::new(ResolverWithOverrides::new(base, self.overrides))
        };
        NameRequest::new(resolver)
    }
}

impl std::fmt::Debug for RequestConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestConfig")
            .field("resolver", &self.resolver.is_some())
            .field("overrides_count", &self.overrides.len())
            .finish()
    }
}

#[cfg(feature = "dns")]
fn default_resolver() -> Arc<dyn Resolve> {
    Arc::new(DnsTextResolver::new())
}

#[cfg(not(feature = "dns"))]
fn default_resolver() -> Arc<dyn Resolve> {
    Arc::new(TableResolver::new())
}
