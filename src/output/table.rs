/*!
 * Table rendering for record lists
 *
 * Records only carry the fields their row showed, so columns are chosen per
 * display mode and missing values are rendered as empty cells.
 */

use crate::listing::{Record, RecordKey};
use tabled::{
    builder::Builder,
    settings::{object::Columns, Alignment, Modify, Padding, Style},
};

/// Columns of the files table
pub const FILE_COLUMNS: [RecordKey; 3] = [RecordKey::Name, RecordKey::Datetime, RecordKey::Size];

/// Columns of the directories table
pub const DIR_COLUMNS: [RecordKey; 2] = [RecordKey::Dir, RecordKey::Datetime];

/// Columns used when only URLs are displayed
pub const URL_COLUMNS: [RecordKey; 1] = [RecordKey::Url];

/// Builds the rows of a table: one header row, then one row per record
pub fn table_rows(records: &[Record], columns: &[RecordKey]) -> Vec<Vec<String>> {
    let header = columns.iter().map(|key| key.header().to_string()).collect();

    std::iter::once(header)
        .chain(records.iter().map(|record| {
            columns
                .iter()
                .map(|key| record.get(*key).unwrap_or_default())
                .collect()
        }))
        .collect()
}

/// Renders records as a console table with the given columns
pub fn render_table(records: &[Record], columns: &[RecordKey]) -> String {
    let mut builder = Builder::default();
    for row in table_rows(records, columns) {
        builder.push_record(row);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Padding::new(1, 1, 0, 0))
        .with(Modify::new(Columns::new(..)).with(Alignment::left()));

    table.to_string()
}
