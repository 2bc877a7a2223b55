//! HTML listing parser
//!
//! This module turns an autoindex page into file and directory records:
//! - Every `<tr>` becomes a [`Row`] of its `<td>` cells
//! - Each row is classified independently as a file row and as a directory row
//! - Classified rows are passed through the [`FieldExtractor`]
//!
//! Header rows (`<th>` only), separator rows and the parent directory link
//! carry no usable icon marker and produce nothing.

use crate::listing::classify::{is_icon_marker, is_row_of_kind, RowKind};
use crate::listing::fields::FieldExtractor;
use crate::listing::record::{DirectoryRecord, FileRecord, Record};
use crate::listing::row::{Cell, Row};
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// File and directory records of one listing page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub files: Vec<FileRecord>,
    pub subpages: Vec<DirectoryRecord>,
}

/// Parses raw markup into a document
pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}

/// Parses raw markup and extracts both record lists
///
/// # Example
///
/// ```
/// use autoindex_search::listing::parse_listing;
/// use url::Url;
///
/// let html = r#"<table>
///   <tr><td><img alt="[DIR]"></td><td><a href="images/">images/</a></td><td>2021-01-02 10:00</td><td>-</td></tr>
///   <tr><td><img alt="[TXT]"></td><td><a href="a.txt">a.txt</a></td><td>2021-01-02 10:00</td><td>204</td></tr>
/// </table>"#;
/// let base = Url::parse("http://host/dir/").unwrap();
/// let listing = parse_listing(html, &base);
/// assert_eq!(listing.files.len(), 1);
/// assert_eq!(listing.subpages[0].dir.as_deref(), Some("images/"));
/// ```
pub fn parse_listing(html: &str, base_url: &Url) -> Listing {
    let document = parse_document(html);
    Listing {
        files: parse_files(&document, base_url),
        subpages: parse_subpages(&document, base_url),
    }
}

/// Extracts file records, in document order
pub fn parse_files(document: &Html, base_url: &Url) -> Vec<FileRecord> {
    parse_records(document, base_url, RowKind::File)
}

/// Extracts directory records, in document order
pub fn parse_subpages(document: &Html, base_url: &Url) -> Vec<DirectoryRecord> {
    parse_records(document, base_url, RowKind::Directory)
}

/// Extracts the records of every row classified as `kind`
///
/// Rows that classify but yield no field are skipped.
pub fn parse_records(document: &Html, base_url: &Url, kind: RowKind) -> Vec<Record> {
    records_from_rows(&extract_rows(document), base_url, kind)
}

/// Like [`parse_records`], over rows already extracted from a document
///
/// A row is checked against `kind` on its own; the same row can yield a
/// file record and a directory record.
pub fn records_from_rows(rows: &[Row], base_url: &Url, kind: RowKind) -> Vec<Record> {
    let extractor = FieldExtractor::new(base_url);

    rows.iter()
        .filter(|row| is_row_of_kind(row, kind))
        .map(|row| extractor.extract(row.texts()))
        .filter(|record| !record.is_empty())
        .collect()
}

/// Extracts every table row of the document, in document order
pub fn extract_rows(document: &Html) -> Vec<Row> {
    let mut rows = Vec::new();

    let (Ok(row_selector), Ok(cell_selector), Ok(alt_selector)) = (
        Selector::parse("tr"),
        Selector::parse("td"),
        Selector::parse("[alt]"),
    ) else {
        return rows;
    };

    for row in document.select(&row_selector) {
        let cells = row
            .select(&cell_selector)
            .map(|cell| extract_cell(cell, &alt_selector))
            .collect();
        rows.push(Row::new(cells));
    }

    rows
}

/// Builds a cell from a `<td>` element
///
/// The icon marker is the `alt` text of the first descendant whose `alt`
/// looks like `[XYZ]`.
fn extract_cell(element: ElementRef<'_>, alt_selector: &Selector) -> Cell {
    let text = element.text().collect::<String>();
    let icon = element
        .select(alt_selector)
        .filter_map(|child| child.value().attr("alt"))
        .find(|alt| is_icon_marker(alt));

    match icon {
        Some(icon) => Cell::with_icon(text, icon),
        None => Cell::new(text),
    }
}
