use std::collections::HashMap;

use crate::matching::{calculate_matching, MatchResult};
use crate::spell::SpellRecord;

/// The current [`MatchResult`] for every known spell against the rows the
/// user possesses.
///
/// One instance serves the whole application, owned by the composition root
/// and handed around by reference. Constructing it is initializing it: a
/// fresh cache already holds results for every record against an empty
/// possession, so there is no readable-but-uninitialized state.
///
/// [`rebuild`][Self::rebuild] walks every record, which is why the host
/// debounces rapid possession toggles instead of calling it per click. Each
/// rebuild fills a fresh map and swaps it in with a single assignment, so a
/// lookup sees either the old state or the new one, never a mix.
pub struct MatchingCache {
    spells: Vec<SpellRecord>,
    results: HashMap<String, MatchResult>,
}

impl MatchingCache {
    pub fn new(spells: Vec<SpellRecord>) -> Self {
        let mut cache = Self {
            spells,
            results: HashMap::new(),
        };
        cache.rebuild("");
        cache
    }

    /// Replace the record set wholesale, recomputing against an empty
    /// possession. Prior state is discarded entirely.
    pub fn initialize(&mut self, spells: Vec<SpellRecord>) {
        self.spells = spells;
        self.rebuild("");
    }

    /// Recompute every spell's result against `possessed_song`.
    ///
    /// Idempotent and safe to call as often as needed; each call fully
    /// supersedes the previous results.
    pub fn rebuild(&mut self, possessed_song: &str) {
        let mut results = HashMap::with_capacity(self.spells.len());
        for spell in &self.spells {
            results.insert(
                spell.id.clone(),
                calculate_matching(&spell.required_song, possessed_song),
            );
        }
        log::debug!(
            "rebuilt matching cache: {} spells against possessed rows {possessed_song:?}",
            results.len()
        );
        self.results = results;
    }

    /// The result for one spell, or `None` for an unknown id.
    pub fn result(&self, spell_id: &str) -> Option<&MatchResult> {
        self.results.get(spell_id)
    }

    /// The full snapshot, for bulk consumers rendering every card at once.
    pub fn results(&self) -> &HashMap<String, MatchResult> {
        &self.results
    }
}
