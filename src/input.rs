// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Description-file parsing and graph population.
//!
//! A description starts with a header line `<vertexCount> [heuristicChar]`,
//! followed by `vertexCount` lines of the form
//!
//! ```text
//! subject: neighbor1, neighbor2.
//! ```
//!
//! Fields are split on `,`, `:` and `.`, and whitespace-trimmed. Each
//! vertex is the subject of exactly one line; neighbor names may refer to
//! subjects declared later in the file, so population runs in two passes:
//! first every subject is added, then every adjacency line is connected.
//! A neighbor that never appears as a subject is a [`GraphError::NullTarget`].

use crate::graph::{Graph, GraphError};
use std::io::BufRead;
use thiserror::Error;

/// Errors from malformed description input. These are fatal to parsing and
/// never reach the solver.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("missing header line")]
    MissingHeader,

    #[error("vertex count is not a number: {value}")]
    BadVertexCount { value: String },

    #[error("expected {expected} vertex lines, found {found}")]
    TruncatedInput { expected: usize, found: usize },

    #[error("vertex line {line} has no subject")]
    EmptySubject { line: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A parsed description: one field list per vertex line (subject first),
/// plus the optional heuristic character from the header.
#[derive(Debug, PartialEq, Eq)]
pub struct Description {
    pub lines: Vec<Vec<String>>,
    pub heuristic: Option<char>,
}

/// Parse a description from a reader.
pub fn parse_description(reader: impl BufRead) -> Result<Description, ParseError> {
    let mut lines = reader.lines();

    let header = lines.next().ok_or(ParseError::MissingHeader)??;
    let mut fields = header.split_whitespace();
    let count_field = fields.next().ok_or(ParseError::MissingHeader)?;
    let count: usize = count_field
        .parse()
        .map_err(|_| ParseError::BadVertexCount {
            value: count_field.to_string(),
        })?;
    let heuristic = fields.next().and_then(|s| s.chars().next());

    let mut parsed = Vec::with_capacity(count);
    for (index, line) in lines.take(count).enumerate() {
        let line = line?;
        let fields: Vec<String> = line
            .split(|c| c == ',' || c == ':' || c == '.')
            .map(str::trim)
            .filter(|field| !field.is_empty())
            .map(str::to_string)
            .collect();
        if fields.is_empty() {
            return Err(ParseError::EmptySubject { line: index + 2 });
        }
        parsed.push(fields);
    }

    if parsed.len() < count {
        return Err(ParseError::TruncatedInput {
            expected: count,
            found: parsed.len(),
        });
    }

    Ok(Description {
        lines: parsed,
        heuristic,
    })
}

/// Build a graph from a parsed description.
///
/// Two passes: add every subject, then connect every adjacency. Each
/// description line is directional; files encode bidirectional maps by
/// listing each border on both lines.
pub fn populate_graph(description: &Description) -> Result<Graph, GraphError> {
    let mut graph = Graph::with_capacity(description.lines.len());
    for line in &description.lines {
        graph.add_vertex(&line[0])?;
    }
    for line in &description.lines {
        for neighbor in &line[1..] {
            graph.connect(&line[0], neighbor, false)?;
        }
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const PATH: &str = "3 b\nA: B.\nB: A, C.\nC: B.\n";

    #[test]
    fn test_parse_header_and_lines() {
        let description = parse_description(Cursor::new(PATH)).unwrap();
        assert_eq!(description.heuristic, Some('b'));
        assert_eq!(description.lines.len(), 3);
        assert_eq!(description.lines[1], vec!["B", "A", "C"]);
    }

    #[test]
    fn test_parse_header_without_heuristic() {
        let description = parse_description(Cursor::new("1\nA.\n")).unwrap();
        assert_eq!(description.heuristic, None);
        assert_eq!(description.lines, vec![vec!["A".to_string()]]);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let description = parse_description(Cursor::new("1\n  A :  B ,  C .\n")).unwrap();
        assert_eq!(description.lines[0], vec!["A", "B", "C"]);
    }

    #[test]
    fn test_parse_bad_count() {
        let err = parse_description(Cursor::new("many\nA.\n")).unwrap_err();
        assert!(matches!(err, ParseError::BadVertexCount { .. }));
    }

    #[test]
    fn test_parse_truncated() {
        let err = parse_description(Cursor::new("3\nA: B.\n")).unwrap_err();
        assert!(matches!(
            err,
            ParseError::TruncatedInput {
                expected: 3,
                found: 1
            }
        ));
    }

    #[test]
    fn test_parse_empty_input() {
        let err = parse_description(Cursor::new("")).unwrap_err();
        assert!(matches!(err, ParseError::MissingHeader));
    }

    #[test]
    fn test_populate_with_forward_reference() {
        // A's line names C before C's own line appears.
        let description = parse_description(Cursor::new("3\nA: C.\nB.\nC: A.\n")).unwrap();
        let graph = populate_graph(&description).unwrap();
        let (a, c) = (
            graph.vertex_id("A").unwrap(),
            graph.vertex_id("C").unwrap(),
        );
        assert_eq!(graph.vertex(a).neighbors(), &[c]);
        assert_eq!(graph.vertex(c).neighbors(), &[a]);
    }

    #[test]
    fn test_populate_unknown_neighbor() {
        let description = parse_description(Cursor::new("1\nA: Z.\n")).unwrap();
        let err = populate_graph(&description).unwrap_err();
        assert_eq!(
            err,
            GraphError::NullTarget {
                name: "Z".to_string()
            }
        );
    }

    #[test]
    fn test_populate_duplicate_subject() {
        let description = parse_description(Cursor::new("2\nA.\nA.\n")).unwrap();
        let err = populate_graph(&description).unwrap_err();
        assert_eq!(
            err,
            GraphError::DuplicateName {
                name: "A".to_string()
            }
        );
    }
}
