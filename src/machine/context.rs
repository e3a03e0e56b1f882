//! The machine's observable data bag and its transformation functions.
//!
//! Each transition of the machine maps to exactly one transformation below.
//! Transformations consume the context and return a new one, so each is
//! unit-testable in isolation and the machine core stays free of mutation.

use crate::base::types::{Address, ChainId};
use crate::domain::Domain;
use serde::Serialize;

/// Observable context of a resolution request machine.
///
/// This is the snapshot handed to the UI layer after every transition.
/// `address` and `error` are mutually exclusive; `is_dropdown_open` is true
/// exactly when the context holds a displayable result (a resolved address
/// or an explicitly supplied name).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Context {
    /// Name being (or last) resolved; cleared on failure and on reset.
    pub name: Option<String>,
    /// Chain the resolution targets.
    pub chain_id: Option<ChainId>,
    /// Resolved address, present only after a successful resolution.
    pub address: Option<Address>,
    /// Failure message, present only after a failed resolution.
    pub error: Option<String>,
    /// Whether the UI result dropdown is open.
    pub is_dropdown_open: bool,
}

impl Context {
    /// Records the requested name and chain ahead of a resolver call.
    pub(crate) fn record_request(self, domain: &Domain, chain_id: Option<ChainId>) -> Self {
        Self {
            name: Some(domain.as_str().to_string()),
            chain_id,
            ..self
        }
    }

    /// Stores a resolved address and opens the dropdown.
    pub(crate) fn with_address(self, address: Address) -> Self {
        Self {
            address: Some(address),
            error: None,
            is_dropdown_open: true,
            ..self
        }
    }

    /// Stores a failure message; the in-flight name is dropped and the
    /// dropdown closes.
    pub(crate) fn with_error(self, message: String) -> Self {
        Self {
            name: None,
            address: None,
            error: Some(message),
            is_dropdown_open: false,
            ..self
        }
    }

    /// Supplies an already-known name/address pair and opens the dropdown.
    pub(crate) fn with_domain(self, name: &str, chain_id: ChainId, address: Address) -> Self {
        Self {
            name: Some(name.to_string()),
            chain_id: Some(chain_id),
            address: Some(address),
            error: None,
            is_dropdown_open: true,
            ..self
        }
    }

    /// Sets the dropdown flag.
    pub(crate) fn with_dropdown(self, open: bool) -> Self {
        Self {
            is_dropdown_open: open,
            ..self
        }
    }

    /// Clears per-request data. `chain_id` is retained.
    pub(crate) fn reset(self) -> Self {
        Self {
            name: None,
            address: None,
            error: None,
            is_dropdown_open: false,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated() -> Context {
        Context::default()
            .with_domain("alice.fuel", ChainId::new(0), Address::new("0xAAA"))
    }

    #[test]
    fn test_with_address_clears_error() {
        let ctx = Context {
            error: Some("name not found: bob.fuel".into()),
            ..Context::default()
        };
        let ctx = ctx.with_address(Address::new("0xAAA"));

        assert_eq!(ctx.address.unwrap().as_str(), "0xAAA");
        assert_eq!(ctx.error, None);
        assert!(ctx.is_dropdown_open);
    }

    #[test]
    fn test_with_error_clears_name_and_address() {
        let ctx = populated().with_error("name not found: alice.fuel".into());

        assert_eq!(ctx.name, None);
        assert_eq!(ctx.address, None);
        assert_eq!(ctx.error.as_deref(), Some("name not found: alice.fuel"));
        assert!(!ctx.is_dropdown_open);
        // The chain survives a failure.
        assert_eq!(ctx.chain_id, Some(ChainId::new(0)));
    }

    #[test]
    fn test_reset_retains_chain_id() {
        let ctx = populated().reset();

        assert_eq!(ctx.name, None);
        assert_eq!(ctx.address, None);
        assert_eq!(ctx.error, None);
        assert!(!ctx.is_dropdown_open);
        assert_eq!(ctx.chain_id, Some(ChainId::new(0)));
    }

    #[test]
    fn test_record_request() {
        let domain = Domain::parse("bob.fuel").unwrap();
        let ctx = Context::default().record_request(&domain, Some(ChainId::new(4)));

        assert_eq!(ctx.name.as_deref(), Some("bob.fuel"));
        assert_eq!(ctx.chain_id, Some(ChainId::new(4)));
        assert!(!ctx.is_dropdown_open);
    }

    #[test]
    fn test_snapshot_serializes() {
        let value = serde_json::to_value(populated()).unwrap();
        assert_eq!(value["name"], "alice.fuel");
        assert_eq!(value["chain_id"], 0);
        assert_eq!(value["address"], "0xAAA");
        assert_eq!(value["error"], serde_json::Value::Null);
        assert_eq!(value["is_dropdown_open"], true);
    }
}
