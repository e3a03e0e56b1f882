//! DNS-backed name resolution via TXT records.
//!
//! Resolves wallet names through the public DNS tree, in the style of
//! OpenAlias: the name's TXT records are scanned for an entry of the form
//!
//! ```text
//! ns1:<chain-id> addr=<address>
//! ```
//!
//! and the first record matching the requested chain wins. Records that do
//! not carry the `ns1:` tag, or that target another chain, are skipped.
//!
//! # Performance
//!
//! The underlying resolver is fully async and maintains connection pools to
//! DNS servers, so no blocking tasks are spawned per lookup.

use super::{Resolve, Resolving};
use crate::base::context::ResolveResultExt;
use crate::base::error::ResolveError;
use crate::base::types::{Address, ChainId};
use crate::domain::Domain;
use hickory_resolver::{
    config::ResolverConfig, name_server::TokioConnectionProvider, TokioResolver,
};
use std::sync::LazyLock;

/// Async TXT-record resolver backed by hickory-dns.
///
/// This resolver is lazily initialized on first use and shared across all
/// instances via a static `LazyLock`. It automatically configures itself
/// based on the system's DNS settings.
///
/// # Example
///
/// ```rust,ignore
/// use namesys::resolver::{DnsTextResolver, Resolve};
///
/// let resolver = DnsTextResolver::new();
/// let address = resolver.resolve("alice.fuel".parse()?, ChainId::new(0)).await?;
/// ```
#[derive(Debug, Clone)]
pub struct DnsTextResolver {
    resolver: &'static LazyLock<TokioResolver>,
}

impl DnsTextResolver {
    /// Creates a new `DnsTextResolver`.
    ///
    /// The underlying resolver is lazily initialized on first lookup. It
    /// will attempt to read system DNS configuration; if that fails, it
    /// falls back to sensible defaults.
    pub fn new() -> Self {
        static RESOLVER: LazyLock<TokioResolver> = LazyLock::new(|| {
            let builder = match TokioResolver::builder_tokio() {
                Ok(builder) => {
                    tracing::debug!("Using system DNS configuration");
                    builder
                }
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        "Failed to read system DNS config, using defaults"
                    );
                    TokioResolver::builder_with_config(
                        ResolverConfig::default(),
                        TokioConnectionProvider::default(),
                    )
                }
            };
            builder.build()
        });

        Self {
            resolver: &RESOLVER,
        }
    }
}

impl Default for DnsTextResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolve for DnsTextResolver {
    fn resolve(&self, domain: Domain, chain_id: ChainId) -> Resolving {
        let resolver = self.clone();
        Box::pin(async move {
            tracing::debug!(domain = %domain, chain = %chain_id, "resolving via DNS TXT");

            let lookup = resolver
                .resolver
                .txt_lookup(domain.as_str())
                .await
                .resolution_context(domain.as_str())?;

            for record in lookup.iter() {
                let text = record.to_string();
                if let Some(address) = parse_record(&text, chain_id) {
                    tracing::debug!(domain = %domain, "DNS TXT resolution complete");
                    return Ok(address);
                }
            }

            tracing::debug!(domain = %domain, chain = %chain_id, "no matching TXT record");
            Err(ResolveError::NotFound {
                domain: domain.to_string(),
            })
        })
    }
}

/// Parses one TXT record of the form `ns1:<chain-id> addr=<address>`.
///
/// Returns the address when the record targets `chain_id`, `None` otherwise.
fn parse_record(record: &str, chain_id: ChainId) -> Option<Address> {
    let rest = record.strip_prefix("ns1:")?;
    let (chain, fields) = rest.split_once(' ')?;
    if chain.parse::<u64>().ok()? != chain_id.as_u64() {
        return None;
    }
    fields
        .split_whitespace()
        .find_map(|field| field.strip_prefix("addr="))
        .map(Address::new)
}
