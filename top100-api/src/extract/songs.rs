//! Song streaming-rank extraction
//!
//! Reads the first table of the streaming-rankings page. Cell 0 carries a
//! combined "Artist - Title" string, cell 1 the all-time stream count. The
//! artist/title split is on the first " - " only, so titles containing the
//! delimiter stay intact.

use crate::error::ApiError;
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

/// Records emitted per request
const MAX_RECORDS: usize = 100;

/// One song row as served by `GET /api/songs`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SongRecord {
    /// Raw stream-count text, thousands separators intact
    pub streams: String,
    /// Text after the first " - " of the combined cell; empty when the
    /// delimiter is absent
    pub song_title: String,
    /// The combined cell text, untouched apart from trimming
    pub song_and_artist: String,
}

/// Extract up to 100 song records from the rankings page
///
/// Walks body rows in order until 100 records are emitted or rows run out.
/// Rows with fewer than three cells are dropped silently and do not count
/// toward the 100.
pub fn extract_songs(html: &str) -> Result<Vec<SongRecord>, ApiError> {
    let document = Html::parse_document(html);

    let table_sel = selector("table");
    let thead_sel = selector("thead");
    let row_sel = selector("tbody > tr");
    let cell_sel = selector("td");

    let table = document
        .select(&table_sel)
        .next()
        .ok_or(ApiError::TableNotFound)?;

    // The tree builder wraps loose rows in a tbody, so body rows are reached
    // the same way whether or not the source markup declared one. A table
    // without a thead keeps its header as the first body row; skip it.
    let header_rows = if table.select(&thead_sel).next().is_none() {
        1
    } else {
        0
    };

    let mut records = Vec::new();

    for row in table.select(&row_sel).skip(header_rows) {
        if records.len() >= MAX_RECORDS {
            break;
        }

        let cells: Vec<ElementRef> = row.select(&cell_sel).collect();
        if cells.len() < 3 {
            continue;
        }

        let song_and_artist = cell_text(cells[0]);
        // Fields are rebuilt from this row's cells alone; a row without the
        // delimiter gets an empty title, never a stale one.
        let song_title = song_and_artist
            .split_once(" - ")
            .map(|(_artist, title)| title.to_string())
            .unwrap_or_default();
        let streams = cell_text(cells[1]);

        records.push(SongRecord {
            streams,
            song_title,
            song_and_artist,
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

#[cfg(test)]
mod tests {
    use super::*;

    fn rankings_table(body_rows: &str) -> String {
        format!(
            "<html><body><table>\
             <thead><tr><th>Artist and Title</th><th>Streams</th><th>Daily</th></tr></thead>\
             <tbody>{}</tbody></table></body></html>",
            body_rows
        )
    }

    fn song_row(combined: &str, streams: &str) -> String {
        format!(
            "<tr><td>{combined}</td><td>{streams}</td><td>1,000</td></tr>"
        )
    }

    #[test]
    fn test_basic_rows() {
        let html = rankings_table(&format!(
            "{}{}",
            song_row("Artist X - Song Y", "1,234,567,890"),
            song_row("The Weeknd - Blinding Lights", "4,979,201,104"),
        ));

        let records = extract_songs(&html).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].streams, "1,234,567,890");
        assert_eq!(records[0].song_title, "Song Y");
        assert_eq!(records[0].song_and_artist, "Artist X - Song Y");
        assert_eq!(records[1].song_title, "Blinding Lights");
    }

    #[test]
    fn test_split_on_first_delimiter_only() {
        let html = rankings_table(&song_row("Major Lazer - Lean On - Remix", "900"));

        let records = extract_songs(&html).unwrap();
        assert_eq!(records[0].song_title, "Lean On - Remix");
        assert_eq!(records[0].song_and_artist, "Major Lazer - Lean On - Remix");
    }

    #[test]
    fn test_missing_delimiter_yields_empty_title() {
        let html = rankings_table(&format!(
            "{}{}",
            song_row("Artist A - Song A", "500"),
            song_row("Untitled row without delimiter", "400"),
        ));

        let records = extract_songs(&html).unwrap();
        assert_eq!(records[1].song_title, "");
        assert_eq!(records[1].song_and_artist, "Untitled row without delimiter");
        // The previous row's title must not leak into this one.
        assert_eq!(records[0].song_title, "Song A");
    }

    #[test]
    fn test_short_rows_do_not_count_toward_cap() {
        let mut rows = String::new();
        for _ in 0..5 {
            rows.push_str("<tr><td>spacer</td><td>only two cells</td></tr>");
        }
        for i in 0..110 {
            rows.push_str(&song_row(&format!("Artist {i} - Song {i}"), "100"));
        }

        let records = extract_songs(&rankings_table(&rows)).unwrap();
        assert_eq!(records.len(), 100);
        assert_eq!(records[99].song_title, "Song 99");
    }

    #[test]
    fn test_headerless_table_skips_first_row() {
        // No thead: the first body row is the header.
        let html = format!(
            "<html><body><table>\
             <tr><td>Artist and Title</td><td>Streams</td><td>Daily</td></tr>\
             {}</table></body></html>",
            song_row("Artist B - Song B", "800"),
        );

        let records = extract_songs(&html).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].song_title, "Song B");
    }

    #[test]
    fn test_first_table_wins() {
        let html = format!(
            "<html><body>\
             <table><thead><tr><th>a</th></tr></thead><tbody>{}</tbody></table>\
             <table><thead><tr><th>b</th></tr></thead><tbody>{}</tbody></table>\
             </body></html>",
            song_row("First Table - Song", "1"),
            song_row("Second Table - Song", "2"),
        );

        let records = extract_songs(&html).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].song_and_artist, "First Table - Song");
    }

    #[test]
    fn test_no_table() {
        let html = "<html><body><p>nothing tabular here</p></body></html>";

        let err = extract_songs(html).unwrap_err();
        assert!(matches!(err, ApiError::TableNotFound));
    }
}
