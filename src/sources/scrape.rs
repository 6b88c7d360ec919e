//! Parse the provider's HTML data-source catalog.

use scraper::{ElementRef, Html, Selector};

use crate::core::{DataSource, QdError};

/// Id of the heading that precedes the financial data-source table.
pub(crate) const ANCHOR_ID: &str = "Financial-Data";

/// What the catalog page yielded.
#[derive(Debug, PartialEq)]
pub(crate) enum CatalogScrape {
    /// The page has no element with [`ANCHOR_ID`]; its layout changed.
    AnchorMissing,
    /// Data rows of the table, header rows excluded. May be empty.
    Rows(Vec<DataSource>),
}

/// Finds the anchor, steps two sibling nodes forward to the table and reads every
/// `tr` that is not inside a `thead`.
pub(crate) fn parse_catalog(html: &str) -> Result<CatalogScrape, QdError> {
    let doc = Html::parse_document(html);
    let selector = Selector::parse(&format!("#{ANCHOR_ID}"))
        .map_err(|e| QdError::Scrape(format!("anchor selector: {e:?}")))?;

    let Some(anchor) = doc.select(&selector).next() else {
        return Ok(CatalogScrape::AnchorMissing);
    };

    // The anchor is followed by a whitespace text node, then the table.
    let table = anchor
        .next_sibling()
        .and_then(|n| n.next_sibling())
        .and_then(ElementRef::wrap)
        .ok_or_else(|| {
            QdError::Scrape(format!("no element two siblings after #{ANCHOR_ID}"))
        })?;

    let mut sources = Vec::new();
    for section in table.children() {
        let in_thead = section
            .value()
            .as_element()
            .is_some_and(|e| e.name() == "thead");
        if in_thead {
            continue;
        }
        for node in section.children() {
            let Some(row) = ElementRef::wrap(node) else {
                continue;
            };
            if row.value().name() != "tr" {
                continue;
            }
            let text: String = row.text().collect();
            sources.push(parse_row(&text)?);
        }
    }

    Ok(CatalogScrape::Rows(sources))
}

/// Maps a row's newline-separated text positionally to
/// `name, count, description, <unused>, code`.
pub(crate) fn parse_row(text: &str) -> Result<DataSource, QdError> {
    let fields: Vec<&str> = text
        .split('\n')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if fields.len() < 5 {
        return Err(QdError::Scrape(format!(
            "catalog row has {} fields, expected 5: {:?}",
            fields.len(),
            text.trim()
        )));
    }

    let count = fields[1]
        .replace(',', "")
        .parse::<u64>()
        .map_err(|e| QdError::Parsing(format!("dataset count `{}`: {e}", fields[1])))?;

    Ok(DataSource {
        name: fields[0].to_string(),
        count,
        description: fields[2].to_string(),
        code: fields[4].to_string(),
    })
}
