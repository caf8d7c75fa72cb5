//! Subcommand implementations. Each returns the text to print.

use std::fs;
use std::path::Path;

use anyhow::Context;

use vibo_invoicing::{DocumentTheme, InvoiceDocument, InvoiceRequest, number_to_words};
use vibo_plans::{PLANS, Tier, explain_access};

use crate::config::Command;

/// Run a command; the result goes to stdout (or the `--output` file).
pub fn run(command: &Command) -> anyhow::Result<Option<String>> {
    match command {
        Command::Render {
            input,
            output,
            theme,
            force_theme,
        } => {
            let document = render_file(input, *theme, *force_theme)?;
            match output {
                Some(path) => {
                    fs::write(path, document.html())
                        .with_context(|| format!("failed to write invoice to {}", path.display()))?;
                    tracing::info!(
                        path = %path.display(),
                        total = %document.total(),
                        "invoice written"
                    );
                    Ok(None)
                }
                None => Ok(Some(document.into_html())),
            }
        }
        Command::Words { amount } => spell(*amount).map(Some),
        Command::Plans { tier } => Ok(Some(describe_plans(*tier))),
    }
}

/// Load an invoice request file and render it.
pub fn render_file(
    path: &Path,
    theme: DocumentTheme,
    force_theme: bool,
) -> anyhow::Result<InvoiceDocument> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read invoice request {}", path.display()))?;
    let mut request: InvoiceRequest = serde_json::from_str(&raw)
        .with_context(|| format!("invalid invoice request in {}", path.display()))?;

    if force_theme {
        request.theme = Some(theme);
    }
    if request.seller.name.trim().is_empty() {
        tracing::warn!(path = %path.display(), "seller name is empty");
    }

    let document = request
        .render(theme)
        .with_context(|| format!("failed to render invoice {}", request.invoice_number))?;
    tracing::debug!(
        number = %request.invoice_number,
        theme = %document.theme(),
        "rendered invoice request"
    );
    Ok(document)
}

pub fn spell(amount: f64) -> anyhow::Result<String> {
    number_to_words(amount).with_context(|| format!("cannot spell amount {amount}"))
}

/// Plan cards as plain text, optionally annotated for `tier`.
pub fn describe_plans(tier: Option<Tier>) -> String {
    let mut out = String::new();

    if let Some(current) = tier {
        out.push_str(&format!("Ваш текущий план: {}\n\n", current.label()));
    }

    for plan in &PLANS {
        let marker = if tier == Some(plan.tier) { " (текущий)" } else { "" };
        out.push_str(&format!(
            "{} — {}/мес{}\n",
            plan.name,
            plan.price_label(),
            marker
        ));
        for line in plan.card_lines() {
            out.push_str(&format!("  ✓ {line}\n"));
        }

        if let Some(current) = tier {
            let locked: Vec<&str> = plan
                .features
                .iter()
                .filter(|f| !explain_access(current, **f).granted)
                .map(|f| f.title())
                .collect();
            if !locked.is_empty() {
                out.push_str(&format!("  недоступно: {}\n", locked.join(", ")));
            }
        }
    }
    out
}
