//! Shape-based field extraction
//!
//! Listing cells carry no column names, so each cell's text is recognised by
//! its shape alone. Rules are tried in a fixed order and every rule can match
//! at most once per row: once a row has produced a `name`, later cells that
//! also look like names are ignored.

use crate::listing::record::{Record, DATETIME_FORMAT};
use crate::url::join_url;
use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

static NAME_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9\-_\.></]+\.[a-zA-Z0-9\-_\.]+").expect("name pattern is valid")
});

static DIR_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9\-_\.><]+/$").expect("dir pattern is valid"));

static DATETIME_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}\s\d{2}:\d{2}").expect("datetime pattern is valid")
});

static SIZE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.?\d*[GM]?$").expect("size pattern is valid"));

/// A field a cell can be recognised as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Dir,
    Datetime,
    Size,
}

impl FieldKind {
    /// Rule order; earlier kinds win when a cell fits several shapes
    pub const ORDER: [FieldKind; 4] = [Self::Name, Self::Dir, Self::Datetime, Self::Size];
}

/// Parses a `YYYY-MM-DD HH:MM` timestamp
pub fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, DATETIME_FORMAT).ok()
}

/// Builds records from row texts for one listing page
#[derive(Debug, Clone, Copy)]
pub struct FieldExtractor<'a> {
    base: &'a Url,
}

impl<'a> FieldExtractor<'a> {
    /// Creates an extractor resolving entry URLs against `base`
    pub fn new(base: &'a Url) -> Self {
        Self { base }
    }

    /// Extracts a record from the texts of one row
    ///
    /// Texts are scanned in order. Each text is assigned to the first rule
    /// that is still available and matches it; that rule is then retired for
    /// the rest of the row. Texts matching no available rule are skipped.
    /// The returned record may be empty.
    pub fn extract<'t, I>(&self, texts: I) -> Record
    where
        I: IntoIterator<Item = &'t str>,
    {
        let mut remaining: Vec<FieldKind> = FieldKind::ORDER.to_vec();
        let mut record = Record::default();

        for text in texts {
            let text = text.trim();
            if text.is_empty() {
                continue;
            }

            let matched = remaining
                .iter()
                .position(|kind| self.apply(*kind, text, &mut record));

            if let Some(index) = matched {
                remaining.remove(index);
            }

            if remaining.is_empty() {
                break;
            }
        }

        record
    }

    /// Stores `text` as a `kind` field if it has the right shape
    fn apply(&self, kind: FieldKind, text: &str, record: &mut Record) -> bool {
        match kind {
            FieldKind::Name => {
                if !NAME_SHAPE.is_match(text) {
                    return false;
                }
                record.url = self.entry_url(text);
                record.name = Some(text.to_string());
                true
            }
            FieldKind::Dir => {
                if !DIR_SHAPE.is_match(text) {
                    return false;
                }
                record.url = self.entry_url(text);
                record.dir = Some(text.to_string());
                true
            }
            FieldKind::Datetime => {
                let datetime = DATETIME_SHAPE
                    .find(text)
                    .and_then(|found| parse_datetime(found.as_str()));
                match datetime {
                    Some(datetime) => {
                        record.datetime = Some(datetime);
                        true
                    }
                    None => false,
                }
            }
            FieldKind::Size => {
                if !SIZE_SHAPE.is_match(text) {
                    return false;
                }
                record.size = Some(text.to_string());
                true
            }
        }
    }

    fn entry_url(&self, text: &str) -> Option<Url> {
        match join_url(self.base, text) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::debug!("Cannot join {} with {:?}: {}", self.base, text, e);
                None
            }
        }
    }
}
