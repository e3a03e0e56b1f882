//! In-memory resolver backed by a concurrent name table.

use super::{Resolve, Resolving};
use crate::base::error::ResolveError;
use crate::base::types::{Address, ChainId};
use crate::domain::Domain;
use dashmap::DashMap;
use std::fmt;

/// Resolver backed by a concurrent in-memory table.
///
/// Entries are keyed by `(domain, chain)` and may be inserted or removed at
/// runtime while lookups are in flight. Used for tests, local development,
/// and preloaded name registries.
///
/// # Example
///
/// ```rust,ignore
/// use namesys::resolver::{Resolve, TableResolver};
///
/// let table = TableResolver::new();
/// table.insert("alice.fuel".parse()?, ChainId::new(0), Address::new("0x3e5f..."));
/// let address = table.resolve("alice.fuel".parse()?, ChainId::new(0)).await?;
/// ```
#[derive(Default)]
pub struct TableResolver {
    entries: DashMap<(Domain, ChainId), Address>,
}

impl TableResolver {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an address for `(domain, chain_id)`.
    ///
    /// Returns the previously registered address, if any.
    pub fn insert(&self, domain: Domain, chain_id: ChainId, address: Address) -> Option<Address> {
        self.entries.insert((domain, chain_id), address)
    }

    /// Removes the entry for `(domain, chain_id)`, returning it if present.
    pub fn remove(&self, domain: &Domain, chain_id: ChainId) -> Option<Address> {
        self.entries
            .remove(&(domain.clone(), chain_id))
            .map(|(_, address)| address)
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Resolve for TableResolver {
    fn resolve(&self, domain: Domain, chain_id: ChainId) -> Resolving {
        let found = self
            .entries
            .get(&(domain.clone(), chain_id))
            .map(|entry| entry.value().clone());
        Box::pin(async move {
            match found {
                Some(address) => {
                    tracing::debug!(domain = %domain, chain = %chain_id, "table lookup hit");
                    Ok(address)
                }
                None => Err(ResolveError::NotFound {
                    domain: domain.to_string(),
                }),
            }
        })
    }
}

impl fmt::Debug for TableResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableResolver")
            .field("entries", &self.entries.len())
            .finish()
    }
}
