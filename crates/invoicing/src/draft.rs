//! Invoice being edited: number, date, buyer, lines and chosen theme.

use chrono::NaiveDate;

use vibo_core::{DomainError, DomainResult, LineItemId, Money};
use vibo_parties::{BuyerIdentity, SellerIdentity};

use crate::document::{InvoiceDocument, render_invoice};
use crate::line::{LineItem, invoice_total};
use crate::theme::DocumentTheme;

const FIRST_ITEM_NAME: &str = "Услуги по разработке ПО";
const NEW_ITEM_NAME: &str = "Новая позиция";
const DEFAULT_UNIT: &str = "шт";

/// Single-field change to a line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineEdit {
    Name(String),
    Quantity(f64),
    Unit(String),
    Price(Money),
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceDraft {
    pub invoice_number: String,
    /// Free text; prefilled as `dd.mm.yyyy`.
    pub date: String,
    pub buyer: BuyerIdentity,
    pub theme: DocumentTheme,
    items: Vec<LineItem>,
}

impl InvoiceDraft {
    /// Fresh draft dated `today` with one placeholder service line.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            invoice_number: "1".to_string(),
            date: today.format("%d.%m.%Y").to_string(),
            buyer: BuyerIdentity::default(),
            theme: DocumentTheme::default(),
            items: vec![LineItem::new(FIRST_ITEM_NAME, 1.0, DEFAULT_UNIT, Money::ZERO)],
        }
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Append a placeholder line and return its id.
    pub fn add_item(&mut self) -> LineItemId {
        let item = LineItem::new(NEW_ITEM_NAME, 1.0, DEFAULT_UNIT, Money::ZERO);
        let id = item.id;
        self.items.push(item);
        id
    }

    /// Removing an unknown id is a no-op; returns whether a line was removed.
    pub fn remove_item(&mut self, id: LineItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    pub fn update_item(&mut self, id: LineItemId, edit: LineEdit) -> DomainResult<()> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| DomainError::not_found(format!("line {id}")))?;

        match edit {
            LineEdit::Name(name) => item.name = name,
            LineEdit::Quantity(quantity) => {
                if !quantity.is_finite() || quantity <= 0.0 {
                    return Err(DomainError::validation("quantity must be positive"));
                }
                item.quantity = quantity;
            }
            LineEdit::Unit(unit) => item.unit = unit,
            LineEdit::Price(price) => item.price = price,
        }
        Ok(())
    }

    pub fn total(&self) -> DomainResult<Money> {
        invoice_total(&self.items)
    }

    /// Name for the exported file, without extension.
    pub fn file_name(&self) -> String {
        format!("Invoice-{}", self.invoice_number)
    }

    pub fn render(&self, seller: &SellerIdentity) -> DomainResult<InvoiceDocument> {
        render_invoice(
            seller,
            &self.buyer,
            &self.items,
            &self.invoice_number,
            &self.date,
            self.theme,
        )
    }
}
