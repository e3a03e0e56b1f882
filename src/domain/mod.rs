//! Domain Name Module
//!
//! Wallet domain names (`alice.fuel`, `@alice`) and the pure syntactic
//! validity predicate used as the resolution guard. Validation here is
//! purely lexical; whether a name exists is the resolver's business.

mod name;

pub use name::{is_valid, Domain, MAX_DOMAIN_LEN, MAX_LABEL_LEN};
