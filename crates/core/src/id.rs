//! Strongly-typed identifiers for the catalog entities.
//!
//! Ids are small numbers assigned in the static datasets; they double as
//! the `:id` route segments, so `FromStr` parses the raw path segment.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a catalog product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

/// Identifier of a job opening.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(u32);

/// Identifier of an FAQ entry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FaqId(u32);

macro_rules! impl_numeric_id {
    ($t:ty, $name:literal) => {
        impl $t {
            pub const fn new(id: u32) -> Self {
                Self(id)
            }

            pub const fn value(self) -> u32 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<u32> for $t {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let id = s
                    .parse::<u32>()
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(id))
            }
        }
    };
}

impl_numeric_id!(ProductId, "ProductId");
impl_numeric_id!(JobId, "JobId");
impl_numeric_id!(FaqId, "FaqId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_route_segments() {
        assert_eq!("3".parse::<ProductId>().unwrap(), ProductId::new(3));
        assert_eq!("12".parse::<JobId>().unwrap(), JobId::new(12));
    }

    #[test]
    fn rejects_non_numeric_segments() {
        let err = "saffron".parse::<ProductId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
        assert!("-1".parse::<FaqId>().is_err());
        assert!("".parse::<FaqId>().is_err());
    }
}
