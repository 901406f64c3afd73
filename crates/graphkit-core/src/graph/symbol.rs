//! Graphs over string labels.
//!
//! Input lines are delimited token lists: the first token names a vertex and
//! the remaining tokens name its neighbours. Labels get indices in the order
//! they are first seen.

use std::io::BufRead;

use indexmap::IndexSet;

use crate::error::Result;

use super::adjacency::Graph;
use super::direction::Direction;
use super::edge::Edge;

/// A [`Graph`] whose vertices carry string labels.
///
/// # Example
///
/// ```rust
/// use graphkit_core::graph::{Direction, SymbolGraph};
///
/// let input = "JFK MCO\nORD DEN\nORD HOU\n";
/// let routes = SymbolGraph::from_reader(input.as_bytes(), " ", Direction::Undirected).unwrap();
///
/// assert_eq!(routes.index_of("ORD"), Some(2));
/// assert_eq!(routes.name_of(3), Some("DEN"));
/// assert_eq!(routes.graph().degree(2), 2);
/// ```
#[derive(Debug, Clone)]
pub struct SymbolGraph {
    symbols: IndexSet<String>,
    graph: Graph<Edge>,
}

impl SymbolGraph {
    /// Reads a symbol graph.
    ///
    /// A blank or whitespace-only `delimiter` splits on runs of whitespace.
    /// Empty tokens are ignored, blank lines are skipped and a line holding
    /// a single label declares an isolated vertex.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if reading fails.
    pub fn from_reader<R: BufRead>(reader: R, delimiter: &str, direction: Direction) -> Result<Self> {
        let mut rows = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let tokens = split(&line, delimiter);
            if !tokens.is_empty() {
                rows.push(tokens);
            }
        }

        let mut symbols = IndexSet::new();
        for token in rows.iter().flatten() {
            if !symbols.contains(token.as_str()) {
                symbols.insert(token.clone());
            }
        }

        let mut graph = Graph::new(symbols.len(), direction);
        for row in &rows {
            let Some(v) = symbols.get_index_of(row[0].as_str()) else {
                continue;
            };
            for neighbour in &row[1..] {
                if let Some(w) = symbols.get_index_of(neighbour.as_str()) {
                    graph.add_edge((v, w))?;
                }
            }
        }

        tracing::debug!(
            symbols = symbols.len(),
            edges = graph.edge_count(),
            "Loaded symbol graph"
        );
        Ok(Self { symbols, graph })
    }

    /// Returns true if `name` labels a vertex.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains(name)
    }

    /// Vertex index of `name`.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.symbols.get_index_of(name)
    }

    /// Label of vertex `v`.
    #[must_use]
    pub fn name_of(&self, v: usize) -> Option<&str> {
        self.symbols.get_index(v).map(String::as_str)
    }

    /// All labels in index order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }

    /// Labels along a vertex path; indices without a label are skipped.
    #[must_use]
    pub fn path_names(&self, path: &[usize]) -> Vec<&str> {
        path.iter().filter_map(|&v| self.name_of(v)).collect()
    }

    /// The underlying index graph.
    #[must_use]
    pub fn graph(&self) -> &Graph<Edge> {
        &self.graph
    }

    /// Consumes the symbol graph, returning the index graph.
    #[must_use]
    pub fn into_graph(self) -> Graph<Edge> {
        self.graph
    }
}

fn split(line: &str, delimiter: &str) -> Vec<String> {
    if delimiter.trim().is_empty() {
        line.split_whitespace().map(str::to_string).collect()
    } else {
        line.split(delimiter)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect()
    }
}
