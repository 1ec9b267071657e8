//! Strongly-typed ID wrappers for household entities
//!
//! Spouse links and service lookups go through these identifiers, so a
//! person id can never be confused with a job or family id.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Parse an ID from a string
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                s.parse()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.to_string()[..8])
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(PersonId, "per-");
define_id!(JobId, "job-");
define_id!(FamilyId, "fam-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = PersonId::new();
        let display = format!("{}", id);
        assert!(display.starts_with("per-"));
        assert_eq!(display.len(), 12);
    }

    #[test]
    fn test_id_equality() {
        let id1 = PersonId::new();
        let id2 = id1;
        assert_eq!(id1, id2);
        assert_ne!(id1, PersonId::new());
    }

    #[test]
    fn test_id_parse_with_prefix() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let plain = JobId::parse(uuid_str).unwrap();
        let prefixed = JobId::parse(&format!("job-{}", uuid_str)).unwrap();
        assert_eq!(plain, prefixed);
        assert_eq!(plain.as_uuid().to_string(), uuid_str);
    }

    #[test]
    fn test_id_serialization() {
        let id = FamilyId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: FamilyId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
