//! Visual themes for the printable invoice.
//!
//! A theme contributes the stylesheet and the header marker. The document body
//! is identical across themes, so no computed value depends on the theme.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use vibo_core::{DomainError, ValueObject};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentTheme {
    /// Dark neon layout.
    #[default]
    Cyber,
    /// Black on white, print-office look.
    Classic,
}

impl ValueObject for DocumentTheme {}

impl DocumentTheme {
    pub fn as_str(self) -> &'static str {
        match self {
            DocumentTheme::Cyber => "cyber",
            DocumentTheme::Classic => "classic",
        }
    }

    pub(crate) fn stylesheet(self) -> &'static str {
        match self {
            DocumentTheme::Cyber => CYBER_CSS,
            DocumentTheme::Classic => CLASSIC_CSS,
        }
    }

    /// Right-hand block of the document header.
    pub(crate) fn original_marker(self) -> &'static str {
        match self {
            DocumentTheme::Cyber => {
                r#"<div class="marker-caption">ДОКУМЕНТ</div>
                <div class="marker">ОРИГИНАЛ</div>"#
            }
            DocumentTheme::Classic => r#"<div class="marker">Оригинал</div>"#,
        }
    }
}

impl core::fmt::Display for DocumentTheme {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentTheme {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cyber" => Ok(DocumentTheme::Cyber),
            "classic" => Ok(DocumentTheme::Classic),
            other => Err(DomainError::validation(format!(
                "unknown document theme '{other}' (expected 'cyber' or 'classic')"
            ))),
        }
    }
}

const CYBER_CSS: &str = r#"
        body {
            font-family: 'Arial', sans-serif;
            background-color: #0a0a0a;
            color: #ffffff;
            padding: 40px;
            margin: 0;
            -webkit-print-color-adjust: exact;
            print-color-adjust: exact;
        }
        .container {
            max-width: 800px;
            margin: 0 auto;
            border: 1px solid #333;
            padding: 20px;
            box-shadow: 0 0 20px rgba(188, 19, 254, 0.1);
        }
        .header-line {
            border-bottom: 2px solid #bc13fe;
            padding-bottom: 10px;
            margin-bottom: 20px;
            display: flex;
            justify-content: space-between;
            align-items: center;
        }
        .header-marker { text-align: right; }
        .logo {
            max-height: 60px;
            filter: drop-shadow(0 0 5px #bc13fe);
        }
        .marker-caption { font-size: 10px; color: #666; }
        .marker {
            color: #39ff14;
            text-shadow: 0 0 5px rgba(57, 255, 20, 0.5);
        }
        h1 {
            color: #bc13fe;
            margin: 0;
            font-size: 24px;
            text-transform: uppercase;
            letter-spacing: 2px;
        }
        hr { border-color: #333; margin: 15px 0; }
        table {
            width: 100%;
            border-collapse: collapse;
            margin-top: 20px;
            margin-bottom: 20px;
        }
        th, td {
            border: 1px solid #333;
            padding: 10px;
            text-align: left;
        }
        th {
            background-color: #1a1a1a;
            color: #bc13fe;
        }
        .caption { font-size: 10px; }
        .legal-info {
            font-size: 12px;
            color: #888;
            margin-bottom: 20px;
        }
        .bank-table td { font-size: 12px; }
        .parties, .parties tr, .parties td { border: none; }
        .party-label { width: 100px; color: #888; }
        .party-value { font-weight: bold; }
        .center { text-align: center; }
        .num { text-align: right; }
        .total-section {
            text-align: right;
            margin-top: 20px;
            border-top: 2px solid #39ff14;
            padding-top: 10px;
        }
        .total-section div { margin-bottom: 5px; }
        .vat-note { color: #666; }
        .total-amount {
            font-size: 18px;
            font-weight: bold;
            color: #39ff14;
        }
        .summary {
            margin-top: 15px;
            font-style: italic;
            border-bottom: 1px solid #333;
            padding-bottom: 5px;
        }
        .words { color: #bc13fe; font-weight: bold; }
        .signatures {
            margin-top: 40px;
            display: flex;
            justify-content: space-between;
        }
        .sign-box {
            border-bottom: 1px solid #bc13fe;
            width: 200px;
            height: 30px;
        }
        .signer { font-size: 10px; text-align: center; color: #666; }
"#;

const CLASSIC_CSS: &str = r#"
        body {
            font-family: 'Times New Roman', serif;
            background-color: #ffffff;
            color: #000000;
            padding: 40px;
            margin: 0;
        }
        .container {
            max-width: 800px;
            margin: 0 auto;
        }
        .header-line {
            border-bottom: 1px solid #000;
            padding-bottom: 10px;
            margin-bottom: 20px;
            display: flex;
            justify-content: space-between;
            align-items: center;
        }
        .header-marker { text-align: right; }
        .logo { max-height: 60px; }
        .marker-caption { font-size: 10px; }
        .marker { font-size: 12px; font-style: italic; }
        h1 {
            margin: 0;
            font-size: 20px;
            font-weight: bold;
        }
        hr { border: none; border-top: 2px solid #000; margin: 15px 0; }
        table {
            width: 100%;
            border-collapse: collapse;
            margin-top: 20px;
            margin-bottom: 20px;
        }
        th, td {
            border: 1px solid #000;
            padding: 6px;
            text-align: left;
        }
        th { background-color: #f0f0f0; }
        .caption { font-size: 10px; }
        .legal-info { font-size: 12px; margin-bottom: 20px; }
        .bank-table td { font-size: 12px; }
        .parties, .parties tr, .parties td { border: none; }
        .party-label { width: 100px; }
        .party-value { font-weight: bold; }
        .center { text-align: center; }
        .num { text-align: right; }
        .total-section { text-align: right; margin-top: 20px; }
        .total-section div { margin-bottom: 5px; }
        .total-amount { font-weight: bold; }
        .summary {
            margin-top: 15px;
            border-bottom: 2px solid #000;
            padding-bottom: 5px;
        }
        .words { font-weight: bold; }
        .signatures {
            margin-top: 40px;
            display: flex;
            justify-content: space-between;
        }
        .sign-box {
            border-bottom: 1px solid #000;
            width: 200px;
            height: 30px;
        }
        .signer { font-size: 10px; text-align: center; }
"#;
