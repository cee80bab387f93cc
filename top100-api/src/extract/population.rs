//! Country population extraction
//!
//! Reads the ranking table of the Wikipedia population page. The page is
//! assumed stable: first `table.wikitable` on the page, row 1 a header,
//! country name in the first cell, population figure in the second.

use crate::error::ApiError;
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

/// Data rows read from the table, header excluded
const MAX_ROWS: usize = 100;

/// One country row as served by `GET /api/population`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryRecord {
    pub country: String,
    /// Raw figure text, thousands separators intact, footnote markers removed
    pub population: String,
}

/// Extract up to 100 country records from the population page
///
/// The data window is fixed to table rows 2 through 101. Rows with fewer
/// than two cells are dropped silently but still consume window slots, so
/// the result may be shorter than 100 even when later rows are valid.
pub fn extract_population(html: &str) -> Result<Vec<CountryRecord>, ApiError> {
    let document = Html::parse_document(html);

    let table_sel = selector("table.wikitable");
    let row_sel = selector("tr");
    let cell_sel = selector("td");

    let table = document
        .select(&table_sel)
        .next()
        .ok_or(ApiError::TableNotFound)?;

    let mut records = Vec::new();

    for row in table.select(&row_sel).skip(1).take(MAX_ROWS) {
        let cells: Vec<ElementRef> = row.select(&cell_sel).collect();
        if cells.len() < 2 {
            continue;
        }

        let country = cell_text(cells[0]);
        let population = cell_text(cells[1]);
        // Footnote markers render as "[n]"; keep only the text before the
        // first bracket.
        let population = match population.split_once('[') {
            Some((before, _)) => before.to_string(),
            None => population,
        };

        records.push(CountryRecord {
            country,
            population,
        });
    }

    Ok(records)
}

fn cell_text(cell: ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}
