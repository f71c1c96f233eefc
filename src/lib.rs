// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Constraint-satisfaction graph coloring.
//!
//! Assigns one color from a fixed palette to every vertex of an undirected
//! graph so that no two adjacent vertices share a color, or reports that no
//! such assignment exists with that palette.
//!
//! # Architecture
//!
//! The crate separates frozen structure from mutable search state:
//!
//! - [`graph`] — the vertex arena and adjacency lists, built once by the
//!   input layer and never mutated by the search.
//! - [`state`] — the per-vertex constraint cache: which colors each
//!   vertex's neighbors currently hold, maintained incrementally through
//!   an exact-inverse assign/retract pair.
//! - [`select`] — heap-backed heuristic orderings: Minimum Remaining
//!   Values (with optional degree tie-break) over vertices, Least
//!   Constraining Value over candidate colors.
//! - [`solver`] — the recursive backtracking engine with forward checking,
//!   configured by an explicit [`HeuristicConfig`] value so independent
//!   solves can run with different settings.
//! - [`input`] — the description-file parser and graph population, kept
//!   out of the core: the solver's contract is a populated graph in, a
//!   coloring (or unsatisfiable) out.
//!
//! # Heuristic hierarchy
//!
//! Five configurations, selected by a character `a`..`e`, each a strict
//! superset of the previous: plain chronological backtracking, forward
//! checking, +MRV, +degree tie-break, +LCV. Heuristics change search order
//! and pruning, never the satisfiability verdict.

pub mod graph;
pub mod input;
pub mod select;
pub mod solver;
pub mod state;

// Re-export commonly used types
pub use graph::{Color, Graph, GraphError, Palette, Vertex, VertexId};
pub use input::{parse_description, populate_graph, Description, ParseError};
pub use solver::{solve, solve_with_stats, HeuristicConfig, HeuristicLevel, Solution};
