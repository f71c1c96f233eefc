// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for graph construction.
//!
//! These errors can only arise while the graph is being populated. Once the
//! structure is frozen and handed to the solver, the only remaining negative
//! outcome is an unsatisfiable search, which is a normal return value of
//! [`crate::solver::solve`], not an error.

use thiserror::Error;

/// Errors that can occur while building a graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A vertex with this name already exists. The insertion is rejected
    /// and the original vertex is left untouched.
    #[error("duplicate vertex name: {name}")]
    DuplicateName { name: String },

    /// An edge endpoint does not name any vertex in the graph.
    /// The edge is not created.
    #[error("edge endpoint {name} does not exist")]
    NullTarget { name: String },
}
