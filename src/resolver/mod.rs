//! Name Resolution Module
//!
//! Provides pluggable domain-to-address resolution with support for:
//! - Concurrent in-memory tables (tests, preloaded registries)
//! - Name-to-address override mechanism
//! - DNS TXT-record resolution (feature `dns`, default-on)
//!
//! # Architecture
//!
//! The `Resolve` trait is the core abstraction that allows different
//! resolver backends to be used interchangeably; the request machine only
//! ever sees an `Arc<dyn Resolve>`. The actual wire protocol of a given
//! name service lives entirely behind an implementation of this trait.
//!
//! # Example
//!
//! ```rust,ignore
//! use namesys::resolver::{Resolve, TableResolver};
//!
//! let table = TableResolver::new();
//! table.insert("alice.fuel".parse()?, ChainId::new(0), Address::new("0x3e5f..."));
//! let address = table.resolve("alice.fuel".parse()?, ChainId::new(0)).await?;
//! ```

#[cfg(feature = "dns")]
mod dnstxt;
mod resolve;
mod table;

#[cfg(feature = "dns")]
pub use dnstxt::DnsTextResolver;
pub use resolve::{Resolve, ResolverWithOverrides, Resolving};
pub use table::TableResolver;
