use std::collections::HashMap;

use crate::grid::{Grid, GridPosition};

/// Maps every character on the board to all of the cells where it appears.
///
/// Built by a single row-major scan of the grid, so each character's position
/// list is in first-seen order: by row, then by column within the row. A
/// character occupying several cells gets all of them, in that order. The
/// grid is immutable, so an index never needs rebuilding once constructed.
#[derive(Debug, Clone, Default)]
pub struct PositionIndex {
    positions: HashMap<char, Vec<GridPosition>>,
}

impl PositionIndex {
    pub fn build(grid: &Grid) -> Self {
        let mut positions: HashMap<char, Vec<GridPosition>> = HashMap::new();
        for row in grid.rows() {
            for (column_index, &character) in row.characters.iter().enumerate() {
                positions.entry(character).or_default().push(GridPosition {
                    row_id: row.id,
                    column_index,
                });
            }
        }
        log::debug!(
            "built position index over {} rows, {} distinct characters",
            grid.rows().len(),
            positions.len()
        );
        Self { positions }
    }

    /// All cells holding `character`, in row-major board order; empty when
    /// the character does not appear on the board.
    pub fn positions(&self, character: char) -> &[GridPosition] {
        self.positions
            .get(&character)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
