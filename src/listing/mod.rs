//! Listing module: from autoindex markup to records
//!
//! This module contains the parsing pipeline for a single listing page:
//! - Row and cell model of the listing table
//! - Row classification by icon marker
//! - Shape-based field extraction
//! - Page-level parsing into file and directory records

mod classify;
mod fields;
mod parser;
mod record;
mod row;

pub use classify::{
    is_icon_marker, is_row_of_kind, marked_cells, RowKind, DIRECTORY_ICON, FILE_ICON_EXCLUSIONS,
};
pub use fields::{parse_datetime, FieldExtractor, FieldKind};
pub use parser::{
    extract_rows, parse_document, parse_files, parse_listing, parse_records, parse_subpages,
    records_from_rows, Listing,
};
pub use record::{DirectoryRecord, FileRecord, Record, RecordKey, DATETIME_FORMAT};
pub use row::{Cell, Row};
