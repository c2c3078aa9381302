use serde::{Deserialize, Serialize};

/// One labeled rank of the board: a row identifier and its ordered columns.
///
/// Row ids are small positive integers chosen by the board definition; they
/// are not required to be contiguous, only unique within a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub id: u8,
    pub characters: Vec<char>,
}

/// A single cell of the board, addressed by row id and zero-based column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    pub row_id: u8,
    pub column_index: usize,
}

/// The kana board: an ordered sequence of [`Row`]s, immutable once built.
///
/// The same character may appear in any number of cells; nothing here
/// deduplicates. Construction is the only fallible operation: a board whose
/// row ids collide cannot be addressed unambiguously, so [`Grid::new`]
/// rejects it up front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: Vec<Row>,
}

impl Grid {
    pub fn new(rows: Vec<Row>) -> Result<Self, Error> {
        let mut seen = std::collections::HashSet::new();
        for row in &rows {
            if !seen.insert(row.id) {
                return Err(Error::DuplicateRowId { id: row.id });
            }
        }
        Ok(Self { rows })
    }

    /// The production board: eight rows of ten katakana each.
    pub fn standard() -> Self {
        const ROWS: [&str; 8] = [
            "アイウエオヤユヨワン",
            "カキクケコラリルレロ",
            "サシスセソガギグゲゴ",
            "タチツテトザジズゼゾ",
            "ナニヌネノダヂヅデド",
            "ハヒフヘホバビブベボ",
            "マミムメモパピプペポ",
            "ァィゥェォッャュョー",
        ];

        let rows = ROWS
            .iter()
            .enumerate()
            .map(|(index, characters)| Row {
                id: index as u8 + 1,
                characters: characters.chars().collect(),
            })
            .collect();
        // ids 1..=8 are distinct by construction
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, id: u8) -> Option<&Row> {
        self.rows.iter().find(|row| row.id == id)
    }

    /// The character at the given cell, or `None` if the row id is unknown or
    /// the column runs off the end of the row.
    pub fn character_at(&self, row_id: u8, column_index: usize) -> Option<char> {
        self.row(row_id)
            .and_then(|row| row.characters.get(column_index))
            .copied()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("the row id `{id}` appears more than once in the grid definition")]
    DuplicateRowId { id: u8 },
}
