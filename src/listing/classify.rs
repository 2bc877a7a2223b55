//! Row classification by icon marker
//!
//! Autoindex pages put a small image in the first cell of each entry row
//! whose `alt` text names the entry type: `[DIR]` for directories,
//! `[PARENTDIR]` for the link upwards, `[ICO]` in the header, and something
//! like `[TXT]`, `[IMG]` or `[   ]` for files. Classification only looks at
//! those markers, never at column positions.

use crate::listing::row::{Cell, Row};
use once_cell::sync::Lazy;
use regex::Regex;

static ICON_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([A-Z ]+)\]").expect("icon marker pattern is valid"));

/// Markers that never denote a file row
pub const FILE_ICON_EXCLUSIONS: [&str; 3] = ["[ICO]", "[PARENTDIR]", "[DIR]"];

/// Marker of a directory row
pub const DIRECTORY_ICON: &str = "[DIR]";

/// Kind of entry a row can describe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    File,
    Directory,
}

impl RowKind {
    /// Returns true if an icon marker denotes this kind
    pub fn accepts(&self, icon: &str) -> bool {
        match self {
            Self::File => !FILE_ICON_EXCLUSIONS.contains(&icon),
            Self::Directory => icon == DIRECTORY_ICON,
        }
    }
}

/// Returns true if `alt` text looks like an icon marker (`[` uppercase/space `]`)
pub fn is_icon_marker(alt: &str) -> bool {
    ICON_MARKER.is_match(alt)
}

/// Returns the cells of `row` whose icon marker denotes `kind`
pub fn marked_cells(row: &Row, kind: RowKind) -> Vec<&Cell> {
    row.cells
        .iter()
        .filter(|cell| match cell.icon.as_deref() {
            Some(icon) => is_icon_marker(icon) && kind.accepts(icon),
            None => false,
        })
        .collect()
}

/// Returns true if `row` describes an entry of `kind`
pub fn is_row_of_kind(row: &Row, kind: RowKind) -> bool {
    !marked_cells(row, kind).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_with_icons(icons: &[&str]) -> Row {
        Row::new(icons.iter().map(|icon| Cell::with_icon("", *icon)).collect())
    }

    #[test]
    fn test_file_kind_excludes_decoration_parent_and_dir() {
        let row = row_with_icons(&["[ICO]", "[PARENTDIR]", "[DIR]", "[   ]"]);
        let cells = marked_cells(&row, RowKind::File);

        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].icon.as_deref(), Some("[   ]"));
    }

    #[test]
    fn test_directory_kind_keeps_only_dir() {
        let row = row_with_icons(&["[   ]", "[DIR]"]);
        let cells = marked_cells(&row, RowKind::Directory);

        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].icon.as_deref(), Some("[DIR]"));
    }

    #[test]
    fn test_typed_file_icons_are_files() {
        for icon in ["[TXT]", "[IMG]", "[SND]", "[VID]", "[   ]"] {
            let row = row_with_icons(&[icon]);
            assert!(is_row_of_kind(&row, RowKind::File), "{} should be a file", icon);
            assert!(!is_row_of_kind(&row, RowKind::Directory));
        }
    }

    #[test]
    fn test_unmarked_row_is_neither() {
        let row = Row::new(vec![Cell::new("a.txt"), Cell::new("2019-03-16 11:46")]);
        assert!(!is_row_of_kind(&row, RowKind::File));
        assert!(!is_row_of_kind(&row, RowKind::Directory));
    }

    #[test]
    fn test_non_bracket_alt_is_ignored() {
        let row = row_with_icons(&["folder", "[dir]", "icon.png"]);
        assert!(!is_row_of_kind(&row, RowKind::File));
        assert!(!is_row_of_kind(&row, RowKind::Directory));
    }

    #[test]
    fn test_parent_and_header_rows_are_neither() {
        for icon in ["[PARENTDIR]", "[ICO]"] {
            let row = row_with_icons(&[icon]);
            assert!(!is_row_of_kind(&row, RowKind::File));
            assert!(!is_row_of_kind(&row, RowKind::Directory));
        }
    }

    #[test]
    fn test_is_icon_marker() {
        assert!(is_icon_marker("[DIR]"));
        assert!(is_icon_marker("[   ]"));
        assert!(!is_icon_marker("[]"));
        assert!(!is_icon_marker("DIR"));
    }
}
