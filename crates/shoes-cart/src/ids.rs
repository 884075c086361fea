//! Typed product identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric identifier for a catalog product.
///
/// The storefront API addresses products by plain integer id, so the
/// newtype serializes as a bare JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(u64);

impl ProductId {
    /// Create an ID from its numeric value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the numeric value.
    pub fn get(self) -> u64 {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new(7);
        assert_eq!(id.get(), 7);
    }

    #[test]
    fn test_id_display() {
        assert_eq!(format!("{}", ProductId::new(42)), "42");
    }

    #[test]
    fn test_id_equality() {
        assert_eq!(ProductId::new(1), ProductId::from(1));
        assert_ne!(ProductId::new(1), ProductId::new(2));
    }

    #[test]
    fn test_id_serializes_as_number() {
        let json = serde_json::to_string(&ProductId::new(3)).unwrap();
        assert_eq!(json, "3");

        let id: ProductId = serde_json::from_str("3").unwrap();
        assert_eq!(id, ProductId::new(3));
    }
}
