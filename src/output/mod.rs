//! Output module for presenting listing results
//!
//! This module handles:
//! - Choosing which record keys each display mode shows
//! - Rendering record lists as console tables
//! - Composing the sectioned report printed by the command line tool

mod table;

pub use table::{render_table, table_rows, DIR_COLUMNS, FILE_COLUMNS, URL_COLUMNS};

use crate::listing::{Record, RecordKey};
use url::Url;

/// What the command line tool lists for a URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Files table, then directories table, for one page
    All,
    /// Files of one page
    FilesOnly,
    /// Directories of one page
    DirsOnly,
    /// Files of the page and of every directory below it
    Recursive,
}

impl DisplayMode {
    /// Picks the mode from command line flags
    ///
    /// Conflicting combinations are rejected by the argument parser before
    /// this is called; `recursive` wins if several are set.
    pub fn from_flags(files: bool, dirs: bool, recursive: bool) -> Self {
        match (files, dirs, recursive) {
            (_, _, true) => Self::Recursive,
            (true, _, _) => Self::FilesOnly,
            (_, true, _) => Self::DirsOnly,
            _ => Self::All,
        }
    }

    /// Returns true if this mode prints a files section
    pub fn shows_files(&self) -> bool {
        !matches!(self, Self::DirsOnly)
    }

    /// Returns true if this mode prints a directories section
    pub fn shows_dirs(&self) -> bool {
        matches!(self, Self::All | Self::DirsOnly)
    }
}

/// A titled table of the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Files,
    Directories,
}

impl Section {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Files => "FILES",
            Self::Directories => "DIRECTORIES",
        }
    }

    /// Record keys shown in this section
    pub fn columns(&self, urls_only: bool) -> &'static [RecordKey] {
        match (self, urls_only) {
            (_, true) => &URL_COLUMNS,
            (Self::Files, false) => &FILE_COLUMNS,
            (Self::Directories, false) => &DIR_COLUMNS,
        }
    }
}

/// First line of the report
pub fn render_heading(url: &Url) -> String {
    format!(">>>> Displaying content of: {}\n", url)
}

/// One report section: title line, table, blank line
pub fn render_section(section: Section, records: &[Record], urls_only: bool) -> String {
    format!(
        ">>>> {}\n{}\n\n",
        section.title(),
        render_table(records, section.columns(urls_only))
    )
}
