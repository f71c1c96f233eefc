// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search statistics.
//!
//! Counters are stored in a flat array indexed by [`Counters`] and
//! incremented by the engine as it searches.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(Debug, EnumCountMacro, Copy, Clone)]
#[repr(u8)]
pub enum Counters {
    /// Color assignments committed (including ones later retracted).
    Assignments,
    /// Assignments undone on a dead end.
    Retractions,
    /// Branches cut by forward checking before recursing.
    ForwardCheckPrunes,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchStats {
    stats: [u64; Counters::COUNT],
}

impl SearchStats {
    pub fn new() -> Self {
        SearchStats::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let stats = SearchStats::new();
        assert_eq!(stats.get(Counters::Assignments), 0);
        assert_eq!(stats.get(Counters::Retractions), 0);
        assert_eq!(stats.get(Counters::ForwardCheckPrunes), 0);
    }

    #[test]
    fn test_increment() {
        let mut stats = SearchStats::new();
        stats.increment(Counters::Assignments);
        stats.increment(Counters::Assignments);
        stats.increment(Counters::Retractions);
        assert_eq!(stats.get(Counters::Assignments), 2);
        assert_eq!(stats.get(Counters::Retractions), 1);
        assert_eq!(stats.get(Counters::ForwardCheckPrunes), 0);
    }
}
