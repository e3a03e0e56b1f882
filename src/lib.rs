//! # namesys
//!
//! A wallet name-service resolution library for Rust.
//!
//! `namesys` provides the request machinery a wallet front-end needs to turn
//! human-readable names (`alice.fuel`) into chain addresses: a declarative
//! finite-state machine around a pluggable async resolver, plus the asset
//! catalog and transaction display helpers that sit next to it in a wallet
//! codebase.
//!
//! ## Features
//!
//! - **Declarative request machine**: `idle → loadingDomain → idle | errorDomain`,
//!   with a pure transition function and immutable context transformations
//! - **Single-slot in-flight design**: one outstanding resolver call at a
//!   time, enforced by the state topology rather than a scheduler
//! - **Pluggable resolvers**: in-memory tables, override maps, DNS TXT records
//! - **Observable snapshots**: a serializable context after every transition
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use namesys::base::types::ChainId;
//! use namesys::request::RequestConfig;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut request = RequestConfig::new().build();
//!     let snapshot = request.resolve("alice.fuel", ChainId::new(0)).await;
//!     println!("Address: {:?}", snapshot.address);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Core types and error definitions
//! - [`domain`] - Domain names and the validity predicate
//! - [`resolver`] - Pluggable resolution backends
//! - [`machine`] - The pure state machine core
//! - [`request`] - High-level request driver and configuration
//! - [`assets`] - Asset catalog helpers
//! - [`tx`] - Transaction display helpers
//!
//! ## Error Handling
//!
//! Every resolution failure, locally synthesized preconditions included, is
//! caught at the invocation boundary and surfaced as the machine's error
//! state with a human-readable message; driving the machine never returns an
//! error and never panics.

pub mod assets;
pub mod base;
pub mod domain;
pub mod machine;
pub mod request;
pub mod resolver;
pub mod tx;
