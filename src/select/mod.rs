// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Heuristic selectors for the backtracking engine.
//!
//! Two independent orderings, both backed by [`heap::Heap`]:
//!
//! - [`VertexSelector`] picks the next vertex to color by Minimum Remaining
//!   Values: the vertex with the most distinct blocked colors (fewest legal
//!   colors left) comes first, tie-broken by descending static degree when
//!   the degree heuristic is enabled.
//! - [`order_colors`] orders candidate colors for a chosen vertex by Least
//!   Constraining Value: colors that the vertex's uncolored neighbors see
//!   least often come first.
//!
//! An assignment can change `distinct_blocked` for every neighbor of the
//! assigned vertex, which invalidates the vertex heap's ordering globally.
//! The engine therefore calls [`VertexSelector::reinit`] after every
//! assignment, before the next extraction, rather than doing local repairs.

pub mod heap;

pub use heap::Heap;

use crate::graph::{Color, Graph, VertexId};
use crate::state::SearchState;

/// Mutable priority queue over the uncolored vertices (MRV ordering).
#[derive(Debug)]
pub struct VertexSelector {
    heap: Heap<VertexId>,
    use_degree: bool,
}

impl VertexSelector {
    /// A selector holding every vertex of the graph. Callers must `reinit`
    /// before the first extraction.
    pub fn new(graph: &Graph, use_degree: bool) -> Self {
        let mut heap = Heap::with_capacity(graph.len());
        for id in graph.ids() {
            // Order does not matter yet; reinit establishes it.
            heap.push(id, |_, _| false);
        }
        Self { heap, use_degree }
    }

    fn comparator<'a>(
        graph: &'a Graph,
        state: &'a SearchState,
        use_degree: bool,
    ) -> impl Fn(&VertexId, &VertexId) -> bool + 'a {
        move |a, b| {
            let blocked_a = state.blocked_count(*a);
            let blocked_b = state.blocked_count(*b);
            if blocked_a != blocked_b {
                return blocked_a > blocked_b;
            }
            use_degree && graph.vertex(*a).degree() > graph.vertex(*b).degree()
        }
    }

    /// Rebuild the full heap against the current search state.
    pub fn reinit(&mut self, graph: &Graph, state: &SearchState) {
        self.heap
            .rebuild(Self::comparator(graph, state, self.use_degree));
    }

    /// Extract the most constrained vertex.
    pub fn pop(&mut self, graph: &Graph, state: &SearchState) -> Option<VertexId> {
        self.heap
            .pop(Self::comparator(graph, state, self.use_degree))
    }

    /// Reinsert a vertex whose branch failed.
    pub fn push(&mut self, graph: &Graph, state: &SearchState, v: VertexId) {
        self.heap
            .push(v, Self::comparator(graph, state, self.use_degree));
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

/// Order candidate colors for `v` by Least Constraining Value.
///
/// A color's priority is the sum over v's still-uncolored neighbors of how
/// many times each neighbor already sees that color; lower sums constrain
/// the neighborhood less and are yielded first. Ties break arbitrarily.
pub fn order_colors(
    graph: &Graph,
    state: &SearchState,
    v: VertexId,
    candidates: &[Color],
) -> Vec<Color> {
    let mut heap: Heap<(u32, Color)> = Heap::with_capacity(candidates.len());
    let ascending = |a: &(u32, Color), b: &(u32, Color)| a.0 < b.0;

    for &color in candidates {
        let weight: u32 = graph
            .vertex(v)
            .neighbors()
            .iter()
            .filter(|&&nb| state.color(nb).is_none())
            .map(|&nb| state.taken_count(nb, color))
            .sum();
        heap.push((weight, color), ascending);
    }

    let mut ordered = Vec::with_capacity(candidates.len());
    while let Some((_, color)) = heap.pop(ascending) {
        ordered.push(color);
    }
    ordered
}
