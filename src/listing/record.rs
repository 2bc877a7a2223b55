//! Records extracted from listing rows

use chrono::NaiveDateTime;
use std::fmt;
use url::Url;

/// Timestamp layout used by autoindex pages, e.g. `2019-03-16 11:46`
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One file or directory described by a listing row
///
/// Every field is optional: a field the row did not show is left as `None`,
/// never filled with a default. `size` is kept exactly as shown on the page
/// (`"204"`, `"2.5G"`, `"14M"`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    /// File name, for file rows
    pub name: Option<String>,

    /// Directory name including its trailing `/`, for directory rows
    pub dir: Option<String>,

    /// Absolute URL of the entry
    pub url: Option<Url>,

    /// Last modification time
    pub datetime: Option<NaiveDateTime>,

    /// Size token as displayed
    pub size: Option<String>,
}

/// A record produced from a file row
pub type FileRecord = Record;

/// A record produced from a directory row
pub type DirectoryRecord = Record;

impl Record {
    /// Returns true if no field was extracted
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.dir.is_none()
            && self.url.is_none()
            && self.datetime.is_none()
            && self.size.is_none()
    }

    /// Returns the display value stored under `key`, if present
    pub fn get(&self, key: RecordKey) -> Option<String> {
        match key {
            RecordKey::Name => self.name.clone(),
            RecordKey::Dir => self.dir.clone(),
            RecordKey::Url => self.url.as_ref().map(|url| url.to_string()),
            RecordKey::Datetime => self
                .datetime
                .map(|datetime| datetime.format(DATETIME_FORMAT).to_string()),
            RecordKey::Size => self.size.clone(),
        }
    }
}

/// The fixed key vocabulary of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKey {
    Name,
    Dir,
    Url,
    Datetime,
    Size,
}

impl RecordKey {
    /// Lowercase key name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Dir => "dir",
            Self::Url => "url",
            Self::Datetime => "datetime",
            Self::Size => "size",
        }
    }

    /// Capitalised column heading
    pub fn header(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Dir => "Dir",
            Self::Url => "Url",
            Self::Datetime => "Datetime",
            Self::Size => "Size",
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
