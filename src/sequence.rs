//! Cast sequences: the compact `"742 34268"` notation pairing a run of row
//! ids with the 1-indexed columns struck in order.

use crate::grid::Grid;

/// Decode a cast sequence against the board.
///
/// The sequence is exactly two whitespace-separated groups: row ids first,
/// then columns. The row group cycles when it is shorter than the column
/// group, so `"742 34268"` reads rows 7,4,2,7,4. Slots that do not resolve to
/// a cell (non-digit, unknown row id, column 0 or off the end of the row)
/// contribute nothing. Anything other than two groups decodes to the empty
/// string.
pub fn parse(grid: &Grid, sequence: &str) -> String {
    let mut parts = sequence.split_whitespace();
    let (Some(row_part), Some(column_part), None) = (parts.next(), parts.next(), parts.next())
    else {
        return String::new();
    };

    let row_ids: Vec<Option<u8>> = row_part
        .chars()
        .map(|c| c.to_digit(10).map(|d| d as u8))
        .collect();

    let mut name = String::new();
    for (slot, column) in column_part.chars().enumerate() {
        let Some(row_id) = row_ids[slot % row_ids.len()] else {
            continue;
        };
        let Some(column) = column.to_digit(10).filter(|&c| c > 0) else {
            continue;
        };
        if let Some(character) = grid.character_at(row_id, column as usize - 1) {
            name.push(character);
        }
    }
    name
}

/// Derive a cast sequence for `spell_name`, the inverse of [`parse`].
///
/// Each character takes its first position scanning rows in board order; any
/// character absent from the board makes the whole name underivable (`None`).
/// The row group keeps only the first three row ids, relying on [`parse`]'s
/// cycling for longer names; the column group lists every 1-indexed column.
pub fn generate(grid: &Grid, spell_name: &str) -> Option<String> {
    let mut positions = Vec::new();
    for character in spell_name.chars() {
        let position = grid.rows().iter().find_map(|row| {
            row.characters
                .iter()
                .position(|&c| c == character)
                .map(|column_index| (row.id, column_index))
        });
        positions.push(position?);
    }

    let row_ids: String = positions
        .iter()
        .take(3)
        .map(|(row_id, _)| row_id.to_string())
        .collect();
    let columns: String = positions
        .iter()
        .map(|(_, column_index)| (column_index + 1).to_string())
        .collect();
    Some(format!("{row_ids} {columns}"))
}
