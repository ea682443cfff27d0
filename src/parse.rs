use scraper::{ElementRef, Html, Selector};
use tokio::task::spawn_blocking;

use crate::model::MedicationRecord;
use crate::{Error, Result};

/// Separates the description from the price inside the `small` span.
const PPV_SEPARATOR: &str = " - PPV: ";

/// Parses the page on a blocking thread and extracts the medications from it.
/// Returns `None` when the page has no listing table, which marks the end of a letter.
pub async fn parse_page(html: String) -> Result<Option<Vec<MedicationRecord>>> {
    let meds = spawn_blocking(move || -> Result<Option<Vec<MedicationRecord>>> {
        let doc = Html::parse_document(&html);
        extract_medications(&doc)
    })
    .await??;

    Ok(meds)
}

/// Extracts every medication from the listing table of a parsed page.
///
/// - `None`: the page has no `table.table`.
/// - `Some(vec![])`: the table is there but none of its rows had a details block.
///
/// Only the rows of the table's first `tbody` are read.
/// Rows without a `span.details` are skipped, missing sub-fields become empty strings.
pub fn extract_medications(doc: &Html) -> Result<Option<Vec<MedicationRecord>>> {
    let table_selector = create_selector("table.table")?;
    let body_selector = create_selector("tbody")?;
    let row_selector = create_selector("tr")?;
    let details_selector = create_selector("span.details")?;
    let small_selector = create_selector("span.small")?;

    let Some(table) = doc.select(&table_selector).next() else {
        return Ok(None);
    };
    let Some(body) = table.select(&body_selector).next() else {
        return Ok(Some(Vec::new()));
    };

    let meds = body
        .select(&row_selector)
        .filter_map(|row| row.select(&details_selector).next())
        .map(|details| {
            let name = joined_text(details, "\n")
                .lines()
                .next()
                .unwrap_or_default()
                .to_string();

            let (description, ppv) = match details.select(&small_selector).next() {
                Some(small) => split_ppv(&joined_text(small, "")),
                None => (String::new(), String::new()),
            };

            MedicationRecord::new(name, description, ppv)
        })
        .collect();

    Ok(Some(meds))
}

/// Collects the text nodes under `el`, trimmed, skipping the blank ones.
fn joined_text(el: ElementRef, sep: &str) -> String {
    el.text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

/// Splits `"<description> - PPV: <price>"` on the first separator.
/// Without a separator the whole string is the description.
fn split_ppv(desc_ppv: &str) -> (String, String) {
    match desc_ppv.split_once(PPV_SEPARATOR) {
        Some((description, ppv)) => (description.to_string(), ppv.to_string()),
        None => (desc_ppv.to_string(), String::new()),
    }
}

#[inline]
fn create_selector(sel_str: &str) -> Result<Selector> {
    Selector::parse(sel_str).map_err(|_| Error::ParseMissingSelector(sel_str.into()))
}
