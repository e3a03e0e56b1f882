//! Chain-scoped identifier types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the target chain for a resolution request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(u64);

impl ChainId {
    /// Creates a chain id from its numeric form.
    #[inline]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The numeric form of the chain id.
    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for ChainId {
    fn from(value: u64) -> Self {
        ChainId::new(value)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A resolved chain address.
///
/// This is a lightweight wrapper around the address string that provides a
/// type-safe way to pass resolution results around. No particular encoding is
/// enforced; [`Address::is_b256`] checks the canonical hex form.
#[derive(Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address {
    addr: Box<str>,
}

impl Address {
    /// Creates a new [`Address`] from any string-like type.
    #[inline]
    pub fn new(addr: impl Into<Box<str>>) -> Self {
        Self { addr: addr.into() }
    }

    /// View the address as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.addr
    }

    /// True when the address is in canonical B256 form (`0x` + 64 hex digits).
    pub fn is_b256(&self) -> bool {
        is_b256(&self.addr)
    }
}

impl From<&str> for Address {
    fn from(value: &str) -> Self {
        Address::new(value)
    }
}

impl From<String> for Address {
    fn from(value: String) -> Self {
        Address::new(value)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.addr, f)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.addr, f)
    }
}

/// Checks the canonical B256 address form (`0x` + 64 hex digits).
pub fn is_b256(s: &str) -> bool {
    match s.strip_prefix("0x") {
        Some(hex) => hex.len() == 64 && hex.bytes().all(|b| b.is_ascii_hexdigit()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const B256: &str = "0x3e5fbd2ba8a1bc6b76fdde06ca70982c5b2c145fd1d7ae9e0a4e23bfa0534c1f";

    #[test]
    fn test_chain_id_roundtrip() {
        let chain = ChainId::new(9889);
        assert_eq!(chain.as_u64(), 9889);
        assert_eq!(chain.to_string(), "9889");
        assert_eq!(ChainId::from(9889), chain);
    }

    #[test]
    fn test_address_api() {
        let addr = Address::new(B256);
        assert_eq!(addr.as_str(), B256);
        assert_eq!(addr.to_string(), B256);
        assert_eq!(Address::from(B256), addr);
    }

    #[test]
    fn test_is_b256() {
        assert!(is_b256(B256));
        assert!(is_b256(&B256.to_uppercase().replace("0X", "0x")));
        assert!(!is_b256("0x1234"));
        assert!(!is_b256(&B256[2..]));
        assert!(!is_b256(&format!("{B256}00")));
        assert!(!is_b256("0xzz5fbd2ba8a1bc6b76fdde06ca70982c5b2c145fd1d7ae9e0a4e23bfa0534c1f"));
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Address::new(B256)).unwrap();
        assert_eq!(json, format!("\"{B256}\""));
        let json = serde_json::to_string(&ChainId::new(0)).unwrap();
        assert_eq!(json, "0");
    }
}
