//! Printable invoice ("Счет на оплату") rendered to a self-contained HTML page.
//!
//! The page carries its stylesheet inline and references nothing external
//! except the seller's logo, so it can be shown in a sandboxed frame or saved
//! as a standalone file. All caller-supplied text is HTML-escaped.

use html_escape::{encode_double_quoted_attribute, encode_text};
use serde::{Deserialize, Serialize};

use vibo_core::{DomainResult, Money};
use vibo_parties::{BuyerIdentity, SellerIdentity};

use crate::amount_words::amount_in_words;
use crate::line::{LineItem, invoice_total};
use crate::theme::DocumentTheme;

const SIGNATURE_PLACEHOLDER: &str = "подпись";

/// Rendered invoice plus the values computed while rendering it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceDocument {
    html: String,
    total: Money,
    total_in_words: String,
    theme: DocumentTheme,
}

impl InvoiceDocument {
    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn into_html(self) -> String {
        self.html
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn total_in_words(&self) -> &str {
        &self.total_in_words
    }

    pub fn theme(&self) -> DocumentTheme {
        self.theme
    }
}

/// Everything needed to render one invoice, in the JSON shape the Mini-App
/// keeps in its form state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRequest {
    pub seller: SellerIdentity,
    #[serde(default)]
    pub buyer: BuyerIdentity,
    #[serde(default)]
    pub items: Vec<LineItem>,
    pub invoice_number: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<DocumentTheme>,
}

impl InvoiceRequest {
    /// Render with the request's own theme, or `fallback` when it has none.
    pub fn render(&self, fallback: DocumentTheme) -> DomainResult<InvoiceDocument> {
        render_invoice(
            &self.seller,
            &self.buyer,
            &self.items,
            &self.invoice_number,
            &self.date,
            self.theme.unwrap_or(fallback),
        )
    }
}

/// Render the invoice page.
///
/// Identities are not validated; blank fields come out as blank cells. Fails
/// only when the total cannot be spelled out (see [`amount_in_words`]).
pub fn render_invoice(
    seller: &SellerIdentity,
    buyer: &BuyerIdentity,
    items: &[LineItem],
    invoice_number: &str,
    issue_date: &str,
    theme: DocumentTheme,
) -> DomainResult<InvoiceDocument> {
    let total = invoice_total(items)?;
    let total_in_words = amount_in_words(total)?;

    let number = encode_text(invoice_number);
    let date = encode_text(issue_date);

    let mut html = String::with_capacity(8 * 1024);
    html.push_str(&format!(
        r#"<!DOCTYPE html>
<html lang="ru">
<head>
    <meta charset="UTF-8">
    <title>Счет №{number}</title>
    <style>{css}    </style>
</head>
<body>
    <div class="container">
"#,
        css = theme.stylesheet(),
    ));

    push_header(&mut html, seller, theme);
    push_bank_details(&mut html, seller);

    html.push_str(&format!(
        r#"        <h1>Счет на оплату № {number} от {date}</h1>
        <hr>
"#
    ));

    push_parties(&mut html, seller, buyer);
    push_items(&mut html, items)?;

    html.push_str(&format!(
        r#"        <div class="total-section">
            <div>Итого: {total}</div>
            <div>В том числе НДС: <span class="vat-note">Без НДС</span></div>
            <div class="total-amount">Всего к оплате: {total}</div>
        </div>

        <div class="summary">
            Всего наименований {count}, на сумму {total} руб.<br>
            <span class="words">{words}</span>
        </div>
"#,
        count = items.len(),
        words = encode_text(&total_in_words),
    ));

    push_signatures(&mut html, seller);

    html.push_str(
        r#"    </div>
</body>
</html>"#,
    );

    tracing::debug!(
        theme = theme.as_str(),
        items = items.len(),
        total = %total,
        "rendered invoice document"
    );

    Ok(InvoiceDocument {
        html,
        total,
        total_in_words,
        theme,
    })
}

fn push_header(html: &mut String, seller: &SellerIdentity, theme: DocumentTheme) {
    let logo = seller
        .logo_url()
        .map(|url| {
            format!(
                r#"<img src="{}" class="logo" alt="Logo" />"#,
                encode_double_quoted_attribute(url)
            )
        })
        .unwrap_or_default();

    html.push_str(&format!(
        r#"        <div class="header-line">
            <div>
                {logo}
            </div>
            <div class="header-marker">
                {marker}
            </div>
        </div>
"#,
        marker = theme.original_marker(),
    ));
}

fn push_bank_details(html: &mut String, seller: &SellerIdentity) {
    html.push_str(&format!(
        r#"        <div class="legal-info">
            <table class="bank-table">
                <tr>
                    <td colspan="2" rowspan="2">
                        {bank}<br>
                        <span class="caption">Банк получателя</span>
                    </td>
                    <td>БИК</td>
                    <td>{bik}</td>
                </tr>
                <tr>
                    <td>Сч. №</td>
                    <td>{account}</td>
                </tr>
                <tr>
                    <td>ИНН {inn}</td>
                    <td>КПП {kpp}</td>
                    <td rowspan="2">Сч. №</td>
                    <td rowspan="2">{corr}</td>
                </tr>
                <tr>
                    <td colspan="2">
                        {name}<br>
                        <span class="caption">Получатель</span>
                    </td>
                </tr>
            </table>
        </div>
"#,
        bank = encode_text(&seller.bank_name),
        bik = encode_text(&seller.bik),
        account = encode_text(&seller.account_number),
        inn = encode_text(&seller.inn),
        kpp = encode_text(&seller.kpp),
        corr = encode_text(&seller.corr_account),
        name = encode_text(&seller.name),
    ));
}

fn push_parties(html: &mut String, seller: &SellerIdentity, buyer: &BuyerIdentity) {
    let supplier = format!(
        "{}, ИНН {}, КПП {}, {}",
        seller.name, seller.inn, seller.kpp, seller.address
    );

    let mut customer = buyer.name.clone();
    for (label, value) in [("ИНН ", &buyer.inn), ("КПП ", &buyer.kpp), ("", &buyer.address)] {
        if !value.trim().is_empty() {
            customer.push_str(&format!(", {label}{value}"));
        }
    }

    html.push_str(&format!(
        r#"        <table class="parties">
            <tr>
                <td class="party-label">Поставщик:</td>
                <td class="party-value">{supplier}</td>
            </tr>
            <tr>
                <td class="party-label">Покупатель:</td>
                <td class="party-value">{customer}</td>
            </tr>
        </table>
"#,
        supplier = encode_text(&supplier),
        customer = encode_text(&customer),
    ));
}

fn push_items(html: &mut String, items: &[LineItem]) -> DomainResult<()> {
    html.push_str(
        r#"        <table class="items">
            <thead>
                <tr>
                    <th style="width: 5%">№</th>
                    <th style="width: 50%">Товары (работы, услуги)</th>
                    <th style="width: 10%">Кол-во</th>
                    <th style="width: 10%">Ед.</th>
                    <th style="width: 10%">Цена</th>
                    <th style="width: 15%">Сумма</th>
                </tr>
            </thead>
            <tbody>
"#,
    );

    for (index, item) in items.iter().enumerate() {
        html.push_str(&format!(
            r#"                <tr>
                    <td class="center">{position}</td>
                    <td>{name}</td>
                    <td class="num">{quantity}</td>
                    <td class="center">{unit}</td>
                    <td class="num">{price}</td>
                    <td class="num">{line_total}</td>
                </tr>
"#,
            position = index + 1,
            name = encode_text(&item.name),
            quantity = item.quantity,
            unit = encode_text(&item.unit),
            price = item.price,
            line_total = item.line_total()?,
        ));
    }

    html.push_str(
        r#"            </tbody>
        </table>
"#,
    );
    Ok(())
}

fn push_signatures(html: &mut String, seller: &SellerIdentity) {
    html.push_str(&format!(
        r#"        <div class="signatures">
            <div>
                <div>Руководитель</div>
                <div class="sign-box"></div>
                <div class="signer">{director}</div>
            </div>
            <div>
                <div>Бухгалтер</div>
                <div class="sign-box"></div>
                <div class="signer">{accountant}</div>
            </div>
        </div>
"#,
        director = encode_text(seller.director().unwrap_or(SIGNATURE_PLACEHOLDER)),
        accountant = encode_text(seller.accountant().unwrap_or(SIGNATURE_PLACEHOLDER)),
    ));
}
