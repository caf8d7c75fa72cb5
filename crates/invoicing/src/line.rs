use serde::{Deserialize, Serialize};

use vibo_core::{DomainResult, Entity, LineItemId, Money};

/// One position on the invoice ("товары, работы, услуги").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default)]
    pub id: LineItemId,
    pub name: String,
    /// Positive; fractional quantities (hours, kilograms) are allowed.
    pub quantity: f64,
    /// Short unit label, e.g. "шт", "час".
    #[serde(default)]
    pub unit: String,
    /// Unit price.
    pub price: Money,
}

impl LineItem {
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>, price: Money) -> Self {
        Self {
            id: LineItemId::new(),
            name: name.into(),
            quantity,
            unit: unit.into(),
            price,
        }
    }

    /// `quantity × price`, rounded to the kopeck.
    pub fn line_total(&self) -> DomainResult<Money> {
        self.price.times(self.quantity)
    }
}

impl Entity for LineItem {
    type Id = LineItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Grand total of the given lines: the sum of the rounded line totals, so the
/// displayed rows always add up to the displayed total.
pub fn invoice_total(items: &[LineItem]) -> DomainResult<Money> {
    items
        .iter()
        .try_fold(Money::ZERO, |acc, item| acc.checked_add(item.line_total()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_sums_rounded_line_totals() {
        let items = vec![
            LineItem::new("Консультация", 1.5, "час", Money::from_kopecks(333)),
            LineItem::new("Доставка", 3.0, "шт", Money::from_kopecks(3333)),
        ];
        // 4.995 rounds to 5.00, 99.99 stays exact.
        assert_eq!(items[0].line_total().unwrap(), Money::from_kopecks(500));
        assert_eq!(invoice_total(&items).unwrap(), Money::from_kopecks(10_499));
    }

    #[test]
    fn empty_invoice_totals_zero() {
        assert_eq!(invoice_total(&[]).unwrap(), Money::ZERO);
    }

    #[test]
    fn deserializes_item_without_id() {
        let item: LineItem =
            serde_json::from_str(r#"{"name":"Услуги","quantity":3,"unit":"шт","price":1000}"#)
                .unwrap();
        assert_eq!(item.price, Money::from_kopecks(100_000));
        assert_eq!(item.line_total().unwrap(), Money::from_kopecks(300_000));
    }
}
