//! Opaque entity identifiers
//!
//! Both ids wrap a random (v4) UUID. They serialize as the canonical hyphenated
//! string so clients never see the internal representation.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Error when parsing an id from its string form
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("invalid id format")]
    InvalidFormat,
}

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a fresh random id
            #[must_use]
            pub fn generate() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wrap an existing UUID
            #[inline]
            pub const fn from_uuid(id: Uuid) -> Self {
                Self(id)
            }

            /// Get the inner UUID
            #[inline]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }

            /// Parse from string representation
            pub fn parse(s: &str) -> Result<Self, IdParseError> {
                Uuid::parse_str(s)
                    .map(Self)
                    .map_err(|_| IdParseError::InvalidFormat)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0.hyphenated())
            }
        }

        impl std::str::FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

uuid_id!(
    /// Identifier of a registered user
    UserId
);

uuid_id!(
    /// Identifier of a stored recipe
    RecipeId
);
