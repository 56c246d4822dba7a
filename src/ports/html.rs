// src/ports/html.rs
use crate::domain::CoinRecord;
use html_escape::{encode_double_quoted_attribute, encode_text};

#[derive(Debug)]
pub struct HtmlPresenter;

impl HtmlPresenter {
    pub fn new() -> Self {
        Self
    }

    /// Render a read-only detail page for one record.
    ///
    /// The photo is already a self-contained data-URI, so the page needs no
    /// external resources. All text fields are user- or model-supplied and
    /// get escaped on the way in.
    pub fn render(&self, coin: &CoinRecord) -> String {
        let title = encode_text(&coin.title);
        let image = encode_double_quoted_attribute(&coin.image);

        let description = if coin.description.trim().is_empty() {
            "No description provided.".to_string()
        } else {
            encode_text(&coin.description).into_owned()
        };

        let mut facts = String::new();
        facts.push_str(&fact_row("Country", &coin.country));
        facts.push_str(&fact_row("Year", &coin.year));
        if let Some(composition) = coin.composition.as_deref() {
            facts.push_str(&fact_row("Composition", composition));
        }
        if let Some(value) = coin.estimated_value.as_deref() {
            facts.push_str(&fact_row("Est. Value", value));
        }

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>{title} | Numisma</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            line-height: 1.6;
            max-width: 900px;
            margin: 2rem auto;
            padding: 0 1rem;
            background-color: #0f172a;
            color: #e2e8f0;
        }}
        .specimen {{
            background: #1e293b;
            border: 1px solid #334155;
            border-radius: 12px;
            padding: 2rem;
            display: flex;
            gap: 2rem;
            flex-wrap: wrap;
        }}
        .photo img {{
            max-width: 360px;
            border-radius: 8px;
            display: block;
        }}
        .info {{
            flex: 1;
            min-width: 280px;
        }}
        .eyebrow {{
            color: #eab308;
            text-transform: uppercase;
            letter-spacing: 0.15em;
            font-size: 0.75rem;
            font-weight: bold;
        }}
        h1 {{
            margin: 0.25rem 0 1.5rem;
            border-bottom: 1px solid #334155;
            padding-bottom: 1rem;
        }}
        .facts {{
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 1rem;
            margin-bottom: 2rem;
        }}
        .fact .label {{
            display: block;
            color: #64748b;
            text-transform: uppercase;
            font-size: 0.7rem;
            letter-spacing: 0.1em;
        }}
        .fact .value {{
            font-size: 1.1rem;
        }}
        .about {{
            background: #0f172a;
            border: 1px solid #334155;
            border-radius: 8px;
            padding: 1.25rem;
        }}
        .about h2 {{
            margin-top: 0;
            font-size: 1rem;
            color: #cbd5e1;
        }}
        .record-info {{
            margin-top: 1.5rem;
            padding-top: 1rem;
            border-top: 1px solid #334155;
            font-size: 0.8em;
            color: #64748b;
        }}
    </style>
</head>
<body>
    <div class="specimen">
        <div class="photo">
            <img src="{image}" alt="{title}">
        </div>
        <div class="info">
            <div class="eyebrow">Numismatic Specimen</div>
            <h1>{title}</h1>
            <div class="facts">
{facts}            </div>
            <div class="about">
                <h2>About this Coin</h2>
                <p>{description}</p>
            </div>
            <div class="record-info">
                <div>Record ID: {id}</div>
                <div>Added: {date}</div>
            </div>
        </div>
    </div>
</body>
</html>"#,
            title = title,
            image = image,
            facts = facts,
            description = description,
            id = encode_text(&coin.id),
            date = coin.date_added.format("%-d %B %Y"),
        )
    }
}

fn fact_row(label: &str, value: &str) -> String {
    format!(
        "                <div class=\"fact\"><span class=\"label\">{}</span><span class=\"value\">{}</span></div>\n",
        encode_text(label),
        encode_text(value)
    )
}

impl Default for HtmlPresenter {
    fn default() -> Self {
        Self::new()
    }
}
