use core::str::FromStr;

use serde::{Deserialize, Serialize};

use vibo_core::{DomainError, DomainResult};

/// Subscription tier, ordered from free to the most complete plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    #[default]
    Free,
    Secretary,
    Assistant,
    Closer,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::Free, Tier::Secretary, Tier::Assistant, Tier::Closer];

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Free => "free",
            Tier::Secretary => "secretary",
            Tier::Assistant => "assistant",
            Tier::Closer => "closer",
        }
    }

    /// Heading shown on the profile screen.
    pub fn label(self) -> &'static str {
        match self {
            Tier::Free => "Бесплатный",
            other => other.as_str(),
        }
    }

    /// Tier after the init webhook answered.
    ///
    /// Unknown or missing values keep the current tier.
    pub fn from_init_response(current: Tier, response: &InitResponse) -> Tier {
        match response.tier.as_deref().map(str::parse::<Tier>) {
            Some(Ok(tier)) => tier,
            Some(Err(err)) => {
                tracing::warn!(error = %err, "ignoring unknown tier from init response");
                current
            }
            None => current,
        }
    }
}

impl core::fmt::Display for Tier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tier::ALL
            .into_iter()
            .find(|tier| tier.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown tier '{s}'")))
    }
}

/// Payload of the init webhook; only `tier` is read, other fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitResponse {
    #[serde(default)]
    pub tier: Option<String>,
}

/// Switch plans. Choosing the plan already held is rejected.
pub fn upgrade(current: Tier, target: Tier) -> DomainResult<Tier> {
    if current == target {
        return Err(DomainError::validation(format!("already on the {target} plan")));
    }
    tracing::debug!(from = %current, to = %target, "tier changed");
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init(json: &str) -> InitResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn adopts_known_tier_from_init_response() {
        let response = init(r#"{"tier":"assistant","status":"ok"}"#);
        assert_eq!(Tier::from_init_response(Tier::Free, &response), Tier::Assistant);
    }

    #[test]
    fn keeps_current_tier_on_unknown_or_missing_value() {
        assert_eq!(
            Tier::from_init_response(Tier::Secretary, &init(r#"{"tier":"platinum"}"#)),
            Tier::Secretary
        );
        assert_eq!(Tier::from_init_response(Tier::Closer, &init("{}")), Tier::Closer);
    }

    #[test]
    fn labels_and_ordering() {
        assert_eq!(Tier::Free.label(), "Бесплатный");
        assert_eq!(Tier::Closer.label(), "closer");
        assert!(Tier::Free < Tier::Secretary);
        assert!(Tier::Assistant < Tier::Closer);
    }

    #[test]
    fn upgrade_to_same_tier_is_rejected() {
        assert_eq!(upgrade(Tier::Free, Tier::Assistant).unwrap(), Tier::Assistant);
        assert!(matches!(
            upgrade(Tier::Closer, Tier::Closer),
            Err(DomainError::Validation(_))
        ));
    }
}
