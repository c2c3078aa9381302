use std::cell::OnceCell;
use std::num::NonZeroUsize;

use lru::LruCache;

use crate::grid::{Grid, GridPosition};
use crate::index::PositionIndex;

/// Bound on memoized spell names; past it the least-recently-used entry goes.
const CACHE_CAPACITY: usize = 200;

/// Turns a spell name into the ordered list of board cells to highlight.
///
/// Owns the [`Grid`], the position index (built on the first lookup and kept
/// for the resolver's lifetime), and an LRU cache over spell names. The cache
/// is purely a cost device: for a given name it returns the same cells
/// whether or not the entry was evicted in between.
pub struct HighlightResolver {
    grid: Grid,
    index: OnceCell<PositionIndex>,
    cache: LruCache<String, Vec<GridPosition>>,
}

impl HighlightResolver {
    pub fn new(grid: Grid) -> Self {
        let capacity = NonZeroUsize::new(CACHE_CAPACITY).expect("capacity is nonzero");
        Self {
            grid,
            index: OnceCell::new(),
            cache: LruCache::new(capacity),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The cells to highlight for `spell_name`, one run of positions per
    /// character, in name order.
    ///
    /// Each character contributes every cell it occupies on the board, so a
    /// character repeated in the name repeats its full run. Characters absent
    /// from the board contribute nothing; a name made entirely of such
    /// characters resolves to an empty list. An empty name short-circuits
    /// without touching the cache.
    pub fn resolve(&mut self, spell_name: &str) -> Vec<GridPosition> {
        if spell_name.is_empty() {
            return Vec::new();
        }

        if let Some(cells) = self.cache.get(spell_name) {
            return cells.clone();
        }

        let index = self.index.get_or_init(|| PositionIndex::build(&self.grid));
        let mut cells = Vec::new();
        for character in spell_name.chars() {
            cells.extend_from_slice(index.positions(character));
        }
        log::trace!("resolved {} cells on cache miss", cells.len());
        self.cache.put(spell_name.to_owned(), cells.clone());
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Row;

    // a small three-row board is enough for the lookup scenarios
    fn test_grid() -> Grid {
        let rows = vec![
            Row {
                id: 1,
                characters: "アイウエオヤユヨワン".chars().collect(),
            },
            Row {
                id: 2,
                characters: "カキクケコラリルレロ".chars().collect(),
            },
            Row {
                id: 3,
                characters: "サシスセソガギグゲゴ".chars().collect(),
            },
        ];
        Grid::new(rows).unwrap()
    }

    fn cell(row_id: u8, column_index: usize) -> GridPosition {
        GridPosition {
            row_id,
            column_index,
        }
    }

    #[test]
    fn single_character_name() {
        let mut resolver = HighlightResolver::new(test_grid());
        assert_eq!(resolver.resolve("ア"), [cell(1, 0)]);
    }

    #[test]
    fn one_run_per_character_in_name_order() {
        let mut resolver = HighlightResolver::new(test_grid());
        assert_eq!(
            resolver.resolve("アカサ"),
            [cell(1, 0), cell(2, 0), cell(3, 0)]
        );
    }

    #[test]
    fn repeated_characters_each_contribute_their_run() {
        let mut resolver = HighlightResolver::new(test_grid());
        assert_eq!(
            resolver.resolve("アアカ"),
            [cell(1, 0), cell(1, 0), cell(2, 0)]
        );
    }

    #[test]
    fn off_board_characters_are_silently_dropped() {
        let mut resolver = HighlightResolver::new(test_grid());
        assert_eq!(resolver.resolve("アカ漢字"), [cell(1, 0), cell(2, 0)]);
        assert!(resolver.resolve("漢字").is_empty());
    }

    #[test]
    fn empty_name_resolves_to_nothing() {
        let mut resolver = HighlightResolver::new(test_grid());
        assert!(resolver.resolve("").is_empty());
    }

    #[test]
    fn repeated_calls_are_structurally_equal() {
        let mut resolver = HighlightResolver::new(Grid::standard());
        let first = resolver.resolve("ムテキパル");
        let second = resolver.resolve("ムテキパル");
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn eviction_never_changes_the_value() {
        let mut resolver = HighlightResolver::new(test_grid());
        let before = resolver.resolve("アカサ");
        // flood the cache well past capacity so "アカサ" is evicted
        for i in 0..2 * CACHE_CAPACITY {
            resolver.resolve(&format!("ア{i}"));
        }
        assert_eq!(resolver.resolve("アカサ"), before);
    }
}
