/// One table cell of a listing row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    /// Trimmed text content of the cell
    pub text: String,

    /// Icon marker (`alt` text such as `[DIR]` or `[   ]`), if the cell has one
    pub icon: Option<String>,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into().trim().to_string(),
            icon: None,
        }
    }

    pub fn with_icon(text: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            icon: Some(icon.into()),
            ..Self::new(text)
        }
    }
}

/// The cells of one table row, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Non-empty cell texts, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.cells
            .iter()
            .map(|cell| cell.text.as_str())
            .filter(|text| !text.is_empty())
    }
}
