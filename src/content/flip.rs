use std::collections::BTreeSet;

/// Transient per-card "flipped" flags for the achievements grid.
///
/// Keyed by achievement index. Lives in view state only; the records never carry it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlipState {
    flipped: BTreeSet<usize>,
}

impl FlipState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip card `index` and return its new state.
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.flipped.remove(&index) {
            false
        } else {
            self.flipped.insert(index);
            true
        }
    }

    pub fn set(&mut self, index: usize, flipped: bool) {
        if flipped {
            self.flipped.insert(index);
        } else {
            self.flipped.remove(&index);
        }
    }

    pub fn is_flipped(&self, index: usize) -> bool {
        self.flipped.contains(&index)
    }

    /// Flipped card indices, ascending.
    pub fn flipped(&self) -> impl Iterator<Item = usize> + '_ {
        self.flipped.iter().copied()
    }

    pub fn reset(&mut self) {
        self.flipped.clear();
    }
}
