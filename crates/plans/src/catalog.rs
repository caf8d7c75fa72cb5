//! Paid plans as shown on the profile screen.

use vibo_core::Money;

use crate::feature::Feature;
use crate::tier::Tier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub tier: Tier,
    pub name: &'static str,
    pub monthly_price: Money,
    /// Features introduced by this plan (lower plans' features are included).
    pub features: &'static [Feature],
}

pub static PLANS: [Plan; 3] = [
    Plan {
        tier: Tier::Secretary,
        name: "Секретарь",
        monthly_price: Money::from_kopecks(79_00),
        features: &[
            Feature::UnlimitedInvoices,
            Feature::CyberDesign,
            Feature::SavedCompanies,
        ],
    },
    Plan {
        tier: Tier::Assistant,
        name: "Ассистент",
        monthly_price: Money::from_kopecks(399_00),
        features: &[Feature::SharkAdvisor, Feature::SalesScripts],
    },
    Plan {
        tier: Tier::Closer,
        name: "Клоузер",
        monthly_price: Money::from_kopecks(990_00),
        features: &[Feature::CallAnalysis, Feature::PersonalStrategy],
    },
];

impl Plan {
    /// `79₽`.
    pub fn price_label(&self) -> String {
        format!("{}₽", self.monthly_price.rubles())
    }

    /// Card lines: "Всё, что в …" for the previous plan, then own features.
    pub fn card_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.features.len() + 1);
        if let Some(previous) = PLANS.iter().rev().find(|p| p.tier < self.tier) {
            lines.push(format!("Всё, что в {}", previous.name_prepositional()));
        }
        lines.extend(self.features.iter().map(|f| f.title().to_string()));
        lines
    }

    fn name_prepositional(&self) -> &'static str {
        match self.tier {
            Tier::Secretary => "Секретаре",
            Tier::Assistant => "Ассистенте",
            Tier::Closer => "Клоузере",
            Tier::Free => "бесплатном",
        }
    }
}

/// Paid plan for a tier; the free tier has none.
pub fn plan_for(tier: Tier) -> Option<&'static Plan> {
    PLANS.iter().find(|plan| plan.tier == tier)
}
