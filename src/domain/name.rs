//! Domain names and the syntactic validity predicate.

use crate::base::error::ResolveError;
use std::fmt;
use std::str::FromStr;

/// Maximum total length of a domain name, in bytes.
pub const MAX_DOMAIN_LEN: usize = 253;

/// Maximum length of a single label, in bytes.
pub const MAX_LABEL_LEN: usize = 63;

/// A syntactically valid wallet domain name.
///
/// This is a lightweight wrapper around a validated name string that provides
/// a type-safe way to pass names to resolvers. Names are dot-separated labels
/// of lowercase ASCII alphanumerics, `-` and `_`; a single leading `@`
/// (handle form) is accepted on input and stripped.
#[derive(Clone, Hash, Eq, PartialEq)]
pub struct Domain {
    name: Box<str>,
}

impl Domain {
    /// Parses and validates a raw name.
    ///
    /// Returns [`ResolveError::InvalidDomain`] when the name fails the
    /// syntactic validity check.
    pub fn parse(raw: &str) -> Result<Self, ResolveError> {
        let name = raw.strip_prefix('@').unwrap_or(raw);
        if !labels_valid(name) {
            return Err(ResolveError::InvalidDomain {
                domain: raw.to_string(),
            });
        }
        Ok(Self { name: name.into() })
    }

    /// View the name as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl FromStr for Domain {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Domain::parse(s)
    }
}

impl fmt::Debug for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.name, f)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.name, f)
    }
}

/// Syntactic validity check for a wallet domain name.
///
/// Pure predicate consumed as the RESOLVE_DOMAIN guard; accepts exactly the
/// inputs [`Domain::parse`] accepts.
pub fn is_valid(domain: &str) -> bool {
    labels_valid(domain.strip_prefix('@').unwrap_or(domain))
}

fn labels_valid(name: &str) -> bool {
    if name.is_empty() || name.len() > MAX_DOMAIN_LEN {
        return false;
    }
    name.split('.').all(valid_label)
}

fn valid_label(label: &str) -> bool {
    if label.is_empty() || label.len() > MAX_LABEL_LEN {
        return false;
    }
    if label.starts_with('-') || label.ends_with('-') {
        return false;
    }
    label
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_plain_names() {
        for raw in ["alice", "alice.fuel", "a-b_c.fuel", "x0.y1.z2"] {
            let domain = Domain::parse(raw).unwrap();
            assert_eq!(domain.as_str(), raw);
            assert!(is_valid(raw), "{raw} should be valid");
        }
    }

    #[test]
    fn test_parse_strips_handle_prefix() {
        let domain = Domain::parse("@alice").unwrap();
        assert_eq!(domain.as_str(), "alice");
        assert!(is_valid("@alice"));
    }

    #[test]
    fn test_parse_rejects_invalid_names() {
        for raw in [
            "",
            "@",
            "@@alice",
            "Alice",
            "alice fuel",
            "alice..fuel",
            ".alice",
            "alice.",
            "-alice",
            "alice-",
            "al!ce",
        ] {
            assert!(!is_valid(raw), "{raw:?} should be invalid");
            match Domain::parse(raw) {
                Err(ResolveError::InvalidDomain { domain }) => assert_eq!(domain, raw),
                other => panic!("Expected InvalidDomain for {raw:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_length_limits() {
        let long_label = "a".repeat(MAX_LABEL_LEN);
        assert!(is_valid(&long_label));
        assert!(!is_valid(&format!("{long_label}a")));

        let long_name = [long_label.as_str(); 4].join(".");
        assert!(!is_valid(&long_name));
        assert_eq!(long_name.len(), MAX_DOMAIN_LEN + 2);
    }

    #[test]
    fn test_from_str() {
        let domain: Domain = "bob.fuel".parse().unwrap();
        assert_eq!(domain.to_string(), "bob.fuel");
        assert!("not valid".parse::<Domain>().is_err());
    }

    #[test]
    fn test_domain_hash() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(Domain::parse("alice.fuel").unwrap());
        set.insert(Domain::parse("@alice.fuel").unwrap()); // Same name after stripping
        assert_eq!(set.len(), 1);
    }
}
