//! Black-box checks of the rendered invoice.

use proptest::prelude::*;

use vibo_core::Money;
use vibo_invoicing::{DocumentTheme, InvoiceRequest, LineItem, number_to_words, render_invoice};
use vibo_parties::{BuyerIdentity, SellerIdentity};

fn kopecks(cell: &str) -> u64 {
    let (rubles, kopecks) = cell.split_once('.').expect("two-decimal cell");
    assert_eq!(kopecks.len(), 2, "cell {cell:?} must have two decimals");
    rubles.parse::<u64>().unwrap() * 100 + kopecks.parse::<u64>().unwrap()
}

/// Every `<td class="num">` cell; each item row has quantity, price, sum.
fn numeric_cells(html: &str) -> Vec<&str> {
    const OPEN: &str = r#"<td class="num">"#;
    html.match_indices(OPEN)
        .map(|(at, _)| {
            let rest = &html[at + OPEN.len()..];
            &rest[..rest.find("</td>").unwrap()]
        })
        .collect()
}

fn displayed_grand_total(html: &str) -> u64 {
    const LABEL: &str = "Всего к оплате: ";
    let start = html.find(LABEL).unwrap() + LABEL.len();
    let rest = &html[start..];
    kopecks(&rest[..rest.find('<').unwrap()])
}

#[test]
fn romashka_invoice_spells_three_thousand() {
    let items = vec![LineItem::new("Разработка сайта", 3.0, "шт", Money::from_rubles(1000.00).unwrap())];
    let doc = render_invoice(
        &SellerIdentity::new("ООО Ромашка"),
        &BuyerIdentity::new("ИП Иванов"),
        &items,
        "1",
        "19.10.2026",
        DocumentTheme::Cyber,
    )
    .unwrap();

    assert_eq!(doc.total().to_string(), "3000.00");
    assert_eq!(doc.total_in_words(), "Три тысячи рублей 00 копеек");
    assert_eq!(number_to_words(3000.00).unwrap(), "Три тысячи рублей 00 копеек");
    assert!(doc.html().contains("ООО Ромашка"));
    assert!(doc.html().contains("ИП Иванов"));
    assert!(doc.html().contains("Три тысячи рублей 00 копеек"));
}

#[test]
fn themes_change_presentation_only() {
    let items = vec![
        LineItem::new("Аудит", 2.0, "шт", Money::from_kopecks(150_050)),
        LineItem::new("Поддержка", 10.0, "час", Money::from_kopecks(99_99)),
    ];
    let seller = SellerIdentity::new("ООО Ромашка");
    let buyer = BuyerIdentity::new("ИП Иванов");

    let cyber = render_invoice(&seller, &buyer, &items, "9", "01.01.2026", DocumentTheme::Cyber).unwrap();
    let classic = render_invoice(&seller, &buyer, &items, "9", "01.01.2026", DocumentTheme::Classic).unwrap();

    assert_eq!(cyber.total(), classic.total());
    assert_eq!(cyber.total_in_words(), classic.total_in_words());
    assert_eq!(numeric_cells(cyber.html()), numeric_cells(classic.html()));
    assert!(classic.html().contains(cyber.total_in_words()));
    assert_ne!(cyber.html(), classic.html());
    assert!(cyber.html().contains("#bc13fe"));
    assert!(!classic.html().contains("#bc13fe"));
}

#[test]
fn document_is_self_contained() {
    let doc = render_invoice(
        &SellerIdentity::new("ООО Ромашка"),
        &BuyerIdentity::new("ИП Иванов"),
        &[],
        "1",
        "01.01.2026",
        DocumentTheme::Classic,
    )
    .unwrap();

    let html = doc.html();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.ends_with("</html>"));
    assert!(!html.contains("<script"));
    assert!(!html.contains("<link"));
    assert!(!html.contains("http"));
}

#[test]
fn request_json_renders() {
    let json = r#"{
        "seller": { "id": "1", "name": "ООО Ромашка", "inn": "7701234567", "director": "Иванов И.И." },
        "buyer": { "name": "ИП Иванов" },
        "items": [
            { "name": "Услуги по разработке ПО", "quantity": 1, "unit": "шт", "price": 1234567.89 }
        ],
        "invoiceNumber": "15",
        "date": "19.10.2026",
        "theme": "classic"
    }"#;

    let request: InvoiceRequest = serde_json::from_str(json).unwrap();
    let doc = request.render(DocumentTheme::Cyber).unwrap();

    assert_eq!(doc.theme(), DocumentTheme::Classic);
    let words = doc.total_in_words();
    assert!(words.starts_with("Один миллион"));
    assert!(words.contains("тысячи"));
    assert!(words.contains("рублей 89 копеек"));
}

#[test]
fn total_beyond_supported_range_is_an_error() {
    let items = vec![LineItem::new("Завод", 1.0, "шт", Money::from_rubles(1_000_000_000.0).unwrap())];
    assert!(
        render_invoice(
            &SellerIdentity::new("ООО Ромашка"),
            &BuyerIdentity::new("ИП Иванов"),
            &items,
            "1",
            "01.01.2026",
            DocumentTheme::Cyber,
        )
        .is_err()
    );
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        ..ProptestConfig::default()
    })]

    /// The displayed line sums always add up to the displayed grand total.
    #[test]
    fn line_totals_add_up_to_grand_total(
        lines in prop::collection::vec((1u32..1_000u32, 0u64..1_000_000u64), 0..12),
        classic in any::<bool>(),
    ) {
        let items: Vec<LineItem> = lines
            .iter()
            .map(|&(qty, price)| LineItem::new("Позиция", f64::from(qty), "шт", Money::from_kopecks(price)))
            .collect();
        let theme = if classic { DocumentTheme::Classic } else { DocumentTheme::Cyber };

        let doc = render_invoice(
            &SellerIdentity::new("ООО Ромашка"),
            &BuyerIdentity::new("ИП Иванов"),
            &items,
            "1",
            "01.01.2026",
            theme,
        )
        .unwrap();

        let cells = numeric_cells(doc.html());
        prop_assert_eq!(cells.len(), items.len() * 3);

        let sum: u64 = cells.iter().skip(2).step_by(3).map(|c| kopecks(c)).sum();
        prop_assert_eq!(sum, displayed_grand_total(doc.html()));
        prop_assert_eq!(sum, doc.total().kopecks());

        let expected: u64 = lines.iter().map(|&(qty, price)| u64::from(qty) * price).sum();
        prop_assert_eq!(sum, expected);
    }
}
