//! Newtype IDs for type-safe identifiers.
//!
//! Catalog entries are keyed by small stable integers. Wrapping them keeps a
//! gallery project id from being passed where a product id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate integer newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A stable integer identifier.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Create a new ID from its integer value.
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// Get the integer value.
            pub const fn get(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }
    };
}

define_id!(ProductId);
define_id!(ProjectId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new(7);
        assert_eq!(id.get(), 7);
    }

    #[test]
    fn test_id_from_int() {
        let id: ProductId = 12u64.into();
        assert_eq!(id, ProductId::new(12));
    }

    #[test]
    fn test_id_parse() {
        assert_eq!(" 3 ".parse::<ProductId>().unwrap(), ProductId::new(3));
        assert!("three".parse::<ProductId>().is_err());
        assert!("-1".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_id_display() {
        let id = ProjectId::new(4);
        assert_eq!(format!("{}", id), "4");
    }

    #[test]
    fn test_id_serializes_as_integer() {
        let json = serde_json::to_string(&ProductId::new(9)).unwrap();
        assert_eq!(json, "9");
        let back: ProductId = serde_json::from_str("9").unwrap();
        assert_eq!(back, ProductId::new(9));
    }
}
