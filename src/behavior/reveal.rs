use std::collections::BTreeSet;

use crate::config::REVEAL_EXCLUDED_SECTION;

/// Whether a section takes part in reveal-on-scroll at all.
pub fn is_revealable(section_id: &str) -> bool {
    section_id != REVEAL_EXCLUDED_SECTION
}

/// Sections already revealed. Only ever grows.
#[derive(Debug, Default)]
pub struct RevealSet {
    revealed: BTreeSet<usize>,
}

impl RevealSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an intersection for section `index`. Returns true only the
    /// first time, which is when the caller applies the marker.
    pub fn observe(&mut self, index: usize, intersecting: bool) -> bool {
        intersecting && self.revealed.insert(index)
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}
