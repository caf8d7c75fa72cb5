//! Invoicing: amount-in-words and the printable invoice document.
//!
//! Pure, deterministic functions over typed invoice data (no IO, no HTTP, no
//! storage). Callers fetch seller profiles and decide what to do with the HTML.

pub mod amount_words;
pub mod document;
pub mod draft;
pub mod line;
pub mod theme;

pub use amount_words::{MAX_RUBLES, amount_in_words, number_to_words};
pub use document::{InvoiceDocument, InvoiceRequest, render_invoice};
pub use draft::{InvoiceDraft, LineEdit};
pub use line::{LineItem, invoice_total};
pub use theme::DocumentTheme;
