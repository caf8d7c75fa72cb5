//! Feature gating by tier.

use serde::Serialize;
use thiserror::Error;

use crate::feature::Feature;
use crate::tier::Tier;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("feature '{feature}' requires the {required} plan (current: {current})")]
    Locked {
        feature: Feature,
        required: Tier,
        current: Tier,
    },
}

/// Check that `tier` includes `feature`.
pub fn authorize(tier: Tier, feature: Feature) -> Result<(), AccessError> {
    let required = feature.minimum_tier();
    if tier >= required {
        Ok(())
    } else {
        Err(AccessError::Locked {
            feature,
            required,
            current: tier,
        })
    }
}

/// Why a feature is (not) available, for the upgrade prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessExplanation {
    pub feature: Feature,
    pub current: Tier,
    pub required: Tier,
    pub granted: bool,
    /// Plans that would unlock the feature, cheapest first. Empty when granted.
    pub unlocking_tiers: Vec<Tier>,
}

pub fn explain_access(tier: Tier, feature: Feature) -> AccessExplanation {
    let required = feature.minimum_tier();
    let granted = authorize(tier, feature).is_ok();
    let unlocking_tiers = if granted {
        Vec::new()
    } else {
        Tier::ALL.into_iter().filter(|t| *t >= required).collect()
    };
    AccessExplanation {
        feature,
        current: tier,
        required,
        granted,
        unlocking_tiers,
    }
}
