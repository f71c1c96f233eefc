// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Heuristic configuration.
//!
//! Each heuristic flag is independently togglable, but the supported entry
//! points form a strict hierarchy of [`HeuristicLevel`]s `a`..`e`, each
//! level enabling everything below it. The configuration is an immutable
//! value threaded through the solver, so multiple independent solves can
//! run with different settings.

/// Which heuristics the search uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeuristicConfig {
    /// Prune a branch as soon as an assignment leaves any neighbor with
    /// zero legal colors.
    pub forward_checking: bool,

    /// Pick the uncolored vertex with the fewest remaining legal colors
    /// next, instead of insertion order.
    pub mrv: bool,

    /// Break MRV ties by descending static degree.
    pub degree: bool,

    /// Try candidate colors in least-constraining order, instead of
    /// canonical palette order.
    pub lcv: bool,
}

/// One point in the heuristic hierarchy, selectable by a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeuristicLevel {
    /// `a`: fixed vertex order, fixed color order, no pruning.
    None,
    /// `b`: forward checking only.
    ForwardChecking,
    /// `c`: forward checking + MRV vertex selection.
    Mrv,
    /// `d`: forward checking + MRV with degree tie-break.
    MrvDegree,
    /// `e`: everything, plus LCV color ordering.
    MrvDegreeLcv,
}

impl HeuristicLevel {
    /// Parse the single-character selector used by description files and
    /// the command line.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'a' => Some(Self::None),
            'b' => Some(Self::ForwardChecking),
            'c' => Some(Self::Mrv),
            'd' => Some(Self::MrvDegree),
            'e' => Some(Self::MrvDegreeLcv),
            _ => None,
        }
    }

    /// The flags this level enables.
    pub fn config(self) -> HeuristicConfig {
        let mut config = HeuristicConfig::default();
        // Levels are cumulative, strongest first.
        match self {
            Self::MrvDegreeLcv => {
                config.lcv = true;
                config.degree = true;
                config.mrv = true;
                config.forward_checking = true;
            }
            Self::MrvDegree => {
                config.degree = true;
                config.mrv = true;
                config.forward_checking = true;
            }
            Self::Mrv => {
                config.mrv = true;
                config.forward_checking = true;
            }
            Self::ForwardChecking => {
                config.forward_checking = true;
            }
            Self::None => {}
        }
        config
    }

    /// All levels, weakest first.
    pub fn all() -> [Self; 5] {
        [
            Self::None,
            Self::ForwardChecking,
            Self::Mrv,
            Self::MrvDegree,
            Self::MrvDegreeLcv,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char() {
        assert_eq!(HeuristicLevel::from_char('a'), Some(HeuristicLevel::None));
        assert_eq!(
            HeuristicLevel::from_char('e'),
            Some(HeuristicLevel::MrvDegreeLcv)
        );
        assert_eq!(HeuristicLevel::from_char('f'), None);
        assert_eq!(HeuristicLevel::from_char('A'), None);
    }

    #[test]
    fn test_levels_are_cumulative() {
        let mut enabled_count = 0;
        for level in HeuristicLevel::all() {
            let config = level.config();
            let count = [
                config.forward_checking,
                config.mrv,
                config.degree,
                config.lcv,
            ]
            .iter()
            .filter(|&&flag| flag)
            .count();
            assert_eq!(count, enabled_count);
            enabled_count += 1;
        }
    }

    #[test]
    fn test_degree_implies_mrv() {
        let config = HeuristicLevel::MrvDegree.config();
        assert!(config.mrv && config.degree && config.forward_checking);
        assert!(!config.lcv);
    }
}
