//! Identifiers used across the domain.
//!
//! Profile and user ids come from outside (the host runtime and the profile
//! webhook) and are treated as opaque strings. Line ids are local to a draft.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of the host user (the Mini-App passes a numeric id as text).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

/// Identifier of a saved seller profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(String);

/// Identifier of a line inside an invoice draft.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineItemId(Uuid);

macro_rules! impl_opaque_string_id {
    ($t:ty, $name:literal) => {
        impl $t {
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Blank ids mark records that were never saved.
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(DomainError::invalid_id(concat!($name, ": empty")));
                }
                Ok(Self(trimmed.to_string()))
            }
        }
    };
}

impl_opaque_string_id!(UserId, "UserId");
impl_opaque_string_id!(ProfileId, "ProfileId");

impl UserId {
    /// Id used when the host runtime does not report a user (local preview).
    pub fn test_user() -> Self {
        Self("test-user-id".to_string())
    }
}

impl ProfileId {
    /// Allocate a fresh id for a profile saved for the first time.
    ///
    /// Uses UUIDv7 (time-ordered), so newer profiles sort after older ones.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }
}

impl LineItemId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for LineItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for LineItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
