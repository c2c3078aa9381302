mod cache;
mod grid;
mod highlight;
mod index;
mod matching;
pub mod sequence;
mod spell;

pub use cache::MatchingCache;
pub use grid::{Error as GridError, Grid, GridPosition, Row};
pub use highlight::HighlightResolver;
pub use index::PositionIndex;
pub use matching::{calculate_matching, normalize_possessed, MatchResult};
pub use spell::SpellRecord;
