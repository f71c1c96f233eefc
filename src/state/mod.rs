// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Dynamic per-vertex search state.
//!
//! The graph structure is frozen before the search starts; everything that
//! mutates during the search lives here. For each vertex we keep:
//!
//! - the current color assignment (`None` until the engine commits one),
//! - `taken[c]`: how many neighbors currently hold color `c`,
//! - `distinct_blocked`: how many entries of `taken` are nonzero, maintained
//!   incrementally on every transition.
//!
//! The two mutations, [`SearchState::assign`] and [`SearchState::retract`],
//! form an exact inverse pair: applying one and then the other restores the
//! counters bit-for-bit. Chronological backtracking relies on this — undoing
//! a decision is O(degree), never a rescan.

use crate::graph::{Color, Graph, Palette, VertexId};

/// Mutable state for one vertex.
#[derive(Debug)]
struct VertexState {
    /// Current assignment; `None` means uncolored.
    color: Option<Color>,

    /// Per-color count of neighbors currently holding that color.
    taken: Vec<u32>,

    /// Number of nonzero entries in `taken`.
    distinct_blocked: u32,
}

impl VertexState {
    fn new(palette_len: usize) -> Self {
        Self {
            color: None,
            taken: vec![0; palette_len],
            distinct_blocked: 0,
        }
    }

    /// A neighbor just took `color`.
    fn neighbor_gained(&mut self, color: Color) {
        let count = &mut self.taken[color.as_usize()];
        *count += 1;
        if *count == 1 {
            self.distinct_blocked += 1;
        }
    }

    /// A neighbor just gave up `color`.
    fn neighbor_lost(&mut self, color: Color) {
        let count = &mut self.taken[color.as_usize()];
        *count -= 1;
        if *count == 0 {
            self.distinct_blocked -= 1;
        }
    }
}

/// All mutable search state: one [`VertexState`] per graph vertex.
///
/// Exclusively owned by a single search for its whole duration; the solver
/// applies and reverts transitions in strict stack order.
#[derive(Debug)]
pub struct SearchState {
    vertices: Vec<VertexState>,
    palette_len: usize,
}

impl SearchState {
    /// Fresh, fully-uncolored state for `graph` under `palette`.
    pub fn new(graph: &Graph, palette: &Palette) -> Self {
        Self {
            vertices: (0..graph.len())
                .map(|_| VertexState::new(palette.len()))
                .collect(),
            palette_len: palette.len(),
        }
    }

    /// The current color of a vertex, if committed.
    pub fn color(&self, v: VertexId) -> Option<Color> {
        self.vertices[v.index()].color
    }

    /// True iff no neighbor of `v` currently holds `color`.
    pub fn is_available(&self, v: VertexId, color: Color) -> bool {
        self.taken_count(v, color) == 0
    }

    /// How many neighbors of `v` currently hold `color`.
    pub fn taken_count(&self, v: VertexId, color: Color) -> u32 {
        self.vertices[v.index()].taken[color.as_usize()]
    }

    /// How many distinct colors are blocked for `v`.
    pub fn blocked_count(&self, v: VertexId) -> u32 {
        self.vertices[v.index()].distinct_blocked
    }

    /// Commit `color` to `v` and bump every neighbor's counters.
    ///
    /// Returns true if some neighbor now has every palette color blocked,
    /// which is what forward checking prunes on. The vertex must currently
    /// be uncolored.
    pub fn assign(&mut self, graph: &Graph, v: VertexId, color: Color) -> bool {
        debug_assert!(self.vertices[v.index()].color.is_none());
        let mut any_zeroed = false;
        for &nb in graph.vertex(v).neighbors() {
            let state = &mut self.vertices[nb.index()];
            state.neighbor_gained(color);
            any_zeroed = any_zeroed || state.distinct_blocked as usize == self.palette_len;
        }
        self.vertices[v.index()].color = Some(color);
        any_zeroed
    }

    /// Revert the most recent [`assign`](Self::assign) of `v`: clear its
    /// color and drop every neighbor's counters. Exact inverse of `assign`.
    pub fn retract(&mut self, graph: &Graph, v: VertexId) {
        let color = self.vertices[v.index()]
            .color
            .take()
            .expect("retract of an uncolored vertex");
        for &nb in graph.vertex(v).neighbors() {
            self.vertices[nb.index()].neighbor_lost(color);
        }
    }
}
