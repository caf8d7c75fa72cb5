use serde::{Deserialize, Serialize};

use crate::tier::Tier;

/// Capability sold by a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    UnlimitedInvoices,
    CyberDesign,
    SavedCompanies,
    /// AI sales-advisor chat.
    SharkAdvisor,
    SalesScripts,
    CallAnalysis,
    PersonalStrategy,
}

impl Feature {
    /// Cheapest tier that includes the feature; higher tiers include it too.
    pub fn minimum_tier(self) -> Tier {
        match self {
            Feature::UnlimitedInvoices | Feature::CyberDesign | Feature::SavedCompanies => {
                Tier::Secretary
            }
            Feature::SharkAdvisor | Feature::SalesScripts => Tier::Assistant,
            Feature::CallAnalysis | Feature::PersonalStrategy => Tier::Closer,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Feature::UnlimitedInvoices => "unlimited_invoices",
            Feature::CyberDesign => "cyber_design",
            Feature::SavedCompanies => "saved_companies",
            Feature::SharkAdvisor => "shark_advisor",
            Feature::SalesScripts => "sales_scripts",
            Feature::CallAnalysis => "call_analysis",
            Feature::PersonalStrategy => "personal_strategy",
        }
    }

    /// Line on the plan card.
    pub fn title(self) -> &'static str {
        match self {
            Feature::UnlimitedInvoices => "Безлимитные счета",
            Feature::CyberDesign => "Кибер-дизайн PDF",
            Feature::SavedCompanies => "Сохранение компаний",
            Feature::SharkAdvisor => "Доступ к SHARK ADVISOR",
            Feature::SalesScripts => "AI-скрипты продаж",
            Feature::CallAnalysis => "Разбор аудио звонков",
            Feature::PersonalStrategy => "Персональная стратегия",
        }
    }
}

impl core::fmt::Display for Feature {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
