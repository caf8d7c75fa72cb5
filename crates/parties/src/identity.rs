use serde::{Deserialize, Serialize};

use vibo_core::{Entity, ProfileId, ValueObject};

/// Legal and bank identity of the invoicing company (a saved "profile").
///
/// Field names follow the profile webhook payload (camelCase). Every string
/// field defaults to empty so partially filled profiles still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerIdentity {
    #[serde(default)]
    pub id: ProfileId,
    #[serde(default)]
    pub name: String,
    /// ИНН.
    #[serde(default)]
    pub inn: String,
    /// КПП.
    #[serde(default)]
    pub kpp: String,
    #[serde(default)]
    pub bank_name: String,
    /// БИК.
    #[serde(default)]
    pub bik: String,
    /// Settlement account (расчетный счет).
    #[serde(default)]
    pub account_number: String,
    /// Correspondent account (корр. счет).
    #[serde(default)]
    pub corr_account: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accountant: Option<String>,
}

impl SellerIdentity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Logo URL, ignoring blanks left behind by an emptied form field.
    pub fn logo_url(&self) -> Option<&str> {
        non_blank(self.logo_url.as_deref())
    }

    pub fn director(&self) -> Option<&str> {
        non_blank(self.director.as_deref())
    }

    pub fn accountant(&self) -> Option<&str> {
        non_blank(self.accountant.as_deref())
    }
}

impl Entity for SellerIdentity {
    type Id = ProfileId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// The invoiced counterpart. Only the name is expected to be filled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyerIdentity {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub inn: String,
    #[serde(default)]
    pub kpp: String,
    #[serde(default)]
    pub address: String,
}

impl ValueObject for BuyerIdentity {}

impl BuyerIdentity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_inn(mut self, inn: impl Into<String>) -> Self {
        self.inn = inn.into();
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seller_reads_webhook_payload() {
        let json = r#"{
            "id": "1712345678901",
            "name": "ООО Ромашка",
            "inn": "7701234567",
            "kpp": "770101001",
            "bankName": "АО Банк",
            "bik": "044525000",
            "accountNumber": "40702810000000000001",
            "corrAccount": "30101810400000000225",
            "address": "Москва",
            "logoUrl": ""
        }"#;

        let seller: SellerIdentity = serde_json::from_str(json).unwrap();
        assert_eq!(seller.id.as_str(), "1712345678901");
        assert_eq!(seller.bank_name, "АО Банк");
        assert_eq!(seller.corr_account, "30101810400000000225");
        assert_eq!(seller.logo_url(), None);
        assert_eq!(seller.director(), None);
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let seller: SellerIdentity = serde_json::from_str(r#"{"name":"ИП Петров"}"#).unwrap();
        assert!(seller.id.is_blank());
        assert_eq!(seller.inn, "");
        assert_eq!(seller.address, "");

        let buyer: BuyerIdentity = serde_json::from_str(r#"{"name":"ИП Иванов"}"#).unwrap();
        assert_eq!(buyer, BuyerIdentity::new("ИП Иванов"));
    }

    #[test]
    fn optional_fields_are_omitted_when_absent() {
        let json = serde_json::to_value(SellerIdentity::new("ООО Ромашка")).unwrap();
        assert!(json.get("logoUrl").is_none());
        assert_eq!(json["bankName"], "");
    }
}
