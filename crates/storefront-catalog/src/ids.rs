//! Newtype IDs for type-safe identifiers.
//!
//! The remote catalog identifies products by integer, so the ID wraps a
//! `u64` rather than a string.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A product identifier as issued by the remote catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Create a new ID.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw integer value.
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = ProductId::new(42);
        assert_eq!(format!("{}", id), "42");
    }

    #[test]
    fn test_id_from_str() {
        let id: ProductId = " 17 ".parse().unwrap();
        assert_eq!(id.get(), 17);
        assert!("abc".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_id_serializes_as_integer() {
        let id = ProductId::new(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
        let back: ProductId = serde_json::from_str("7").unwrap();
        assert_eq!(back, id);
    }
}
