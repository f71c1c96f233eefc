// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Backtracking engine with forward checking.
//!
//! The search recurses once per vertex. At each level it selects an
//! uncolored vertex (MRV heap or insertion order), tries each available
//! color in heuristic order, propagates the assignment into the constraint
//! cache, and recurses. Dead ends undo exactly the state they created
//! before trying the next candidate, so the cache is always consistent
//! with the partial assignment above the current level.
//!
//! Heuristics affect only search order and pruning, never the yes/no
//! answer: every configuration reports the same satisfiability verdict
//! for the same graph and palette.
//!
//! Unsatisfiability is a normal result (`None` from [`solve`]), not an
//! error; the engine never panics on a well-formed graph.

pub mod config;
pub mod stats;

pub use config::{HeuristicConfig, HeuristicLevel};
pub use stats::{Counters, SearchStats};

use crate::graph::{Color, Graph, Palette, VertexId};
use crate::select::{order_colors, VertexSelector};
use crate::state::SearchState;
use log::debug;

/// A completed coloring: one palette color per vertex, indexed by
/// [`VertexId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    colors: Vec<Color>,
}

impl Solution {
    /// The final color of a vertex.
    pub fn color(&self, v: VertexId) -> Color {
        self.colors[v.index()]
    }

    /// Colors in vertex insertion order.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

/// Color `graph` with `palette` under `config`.
///
/// Returns `Some(solution)` with a proper coloring, or `None` when the
/// search space is exhausted (unsatisfiable with this palette).
pub fn solve(graph: &Graph, palette: &Palette, config: HeuristicConfig) -> Option<Solution> {
    solve_with_stats(graph, palette, config).0
}

/// Like [`solve`], also returning the search counters.
pub fn solve_with_stats(
    graph: &Graph,
    palette: &Palette,
    config: HeuristicConfig,
) -> (Option<Solution>, SearchStats) {
    let mut search = Search::new(graph, palette, config);
    let satisfiable = search.backtrack(0);

    debug!(
        "search {}: {} assignments, {} retractions, {} forward-check prunes",
        if satisfiable { "succeeded" } else { "exhausted" },
        search.stats.get(Counters::Assignments),
        search.stats.get(Counters::Retractions),
        search.stats.get(Counters::ForwardCheckPrunes),
    );

    let solution = if satisfiable {
        Some(Solution {
            colors: graph
                .ids()
                .map(|v| {
                    search
                        .state
                        .color(v)
                        .expect("search succeeded with an uncolored vertex")
                })
                .collect(),
        })
    } else {
        None
    };
    (solution, search.stats)
}

/// One in-flight search: the graph and palette it runs over, the mutable
/// constraint cache, the MRV selector (when enabled) and the counters.
///
/// Exclusively owned by a single call stack; the ordered apply/undo in
/// `backtrack` is what keeps the cache correct.
struct Search<'g> {
    graph: &'g Graph,
    palette: &'g Palette,
    config: HeuristicConfig,
    state: SearchState,
    selector: Option<VertexSelector>,
    stats: SearchStats,
}

impl<'g> Search<'g> {
    fn new(graph: &'g Graph, palette: &'g Palette, config: HeuristicConfig) -> Self {
        let state = SearchState::new(graph, palette);
        let selector = if config.mrv {
            let mut selector = VertexSelector::new(graph, config.degree);
            selector.reinit(graph, &state);
            Some(selector)
        } else {
            None
        };
        Self {
            graph,
            palette,
            config,
            state,
            selector,
            stats: SearchStats::new(),
        }
    }

    /// Try to extend the partial coloring at this recursion level.
    ///
    /// On success the assignments are left intact all the way up; on
    /// failure every side effect of this level has been undone before
    /// returning.
    fn backtrack(&mut self, depth: usize) -> bool {
        if depth == self.graph.len() {
            return true;
        }

        // The popped vertex stays out of the selector for the whole branch
        // and is reinserted only if every candidate color fails.
        let v = match &mut self.selector {
            Some(selector) => selector
                .pop(self.graph, &self.state)
                .expect("selector exhausted before all vertices were colored"),
            None => VertexId::new(depth),
        };

        for color in self.color_order(v) {
            if !self.state.is_available(v, color) {
                continue;
            }

            let zeroed = self.state.assign(self.graph, v, color);
            self.stats.increment(Counters::Assignments);
            // An assignment can change the blocked count of every neighbor,
            // invalidating the heap ordering globally.
            if let Some(selector) = &mut self.selector {
                selector.reinit(self.graph, &self.state);
            }

            if self.config.forward_checking && zeroed {
                self.state.retract(self.graph, v);
                self.stats.increment(Counters::ForwardCheckPrunes);
                continue;
            }

            if self.backtrack(depth + 1) {
                return true;
            }

            self.state.retract(self.graph, v);
            self.stats.increment(Counters::Retractions);
        }

        if let Some(selector) = &mut self.selector {
            selector.push(self.graph, &self.state, v);
        }
        false
    }

    /// Candidate colors for `v`, LCV-ordered or canonical.
    fn color_order(&self, v: VertexId) -> Vec<Color> {
        let canonical: Vec<Color> = self.palette.colors().collect();
        if self.config.lcv {
            order_colors(self.graph, &self.state, v, &canonical)
        } else {
            canonical
        }
    }
}
