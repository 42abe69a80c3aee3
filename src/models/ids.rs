//! Strongly-typed ID wrappers for all entity types
//!
//! Using newtype wrappers prevents accidentally mixing up IDs from different
//! entity types at compile time. IDs are small integers handed out by an
//! [`IdSequence`], never reused within a session even after deletions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Create an ID from a raw integer
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Get the underlying integer
            pub fn value(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }
    };
}

define_id!(UserId);
define_id!(RoleId);

/// Monotonically increasing ID allocator
///
/// Each store owns one of these alongside its collection, so IDs stay unique
/// for the whole session regardless of deletions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    /// Create a sequence that starts handing out IDs at 1
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Hand out the next ID, advancing the sequence
    pub fn next(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Peek at the ID that would be handed out next
    pub fn peek(&self) -> u64 {
        self.next
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = UserId::new(42);
        assert_eq!(format!("{}", id), "42");
    }

    #[test]
    fn test_id_parse() {
        let id: RoleId = "7".parse().unwrap();
        assert_eq!(id, RoleId::new(7));
        assert!("not-a-number".parse::<RoleId>().is_err());
    }

    #[test]
    fn test_id_equality() {
        let id1 = UserId::new(1);
        let id2 = id1;
        assert_eq!(id1, id2);
        assert_ne!(id1, UserId::new(2));
    }

    #[test]
    fn test_id_serialization() {
        let id = UserId::new(3);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "3");
        let deserialized: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_different_id_types_not_mixable() {
        // Different ID types are distinct at compile time; only the raw
        // values can be compared.
        let user_id = UserId::new(1);
        let role_id = RoleId::new(1);
        assert_eq!(user_id.value(), role_id.value());
    }

    #[test]
    fn test_sequence_is_monotonic() {
        let mut seq = IdSequence::new();
        assert_eq!(seq.next(), 1);
        assert_eq!(seq.next(), 2);
        assert_eq!(seq.peek(), 3);
        assert_eq!(seq.next(), 3);
    }
}
