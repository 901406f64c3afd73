//! Edge-list text format.
//!
//! One edge per line, whitespace separated: `v w` for unweighted graphs and
//! `v w weight` for weighted ones. Blank lines and lines starting with the
//! configured comment prefix are skipped. The vertex count is inferred as
//! `max(v, w) + 1` over all edges (0 for an input without edges). Vertex
//! ids at or above [`EdgeListOptions::max_vertices`] are rejected before
//! anything is allocated.

use std::io::{BufRead, Write};

use crate::error::{Error, Result};

use super::adjacency::Graph;
use super::direction::Direction;
use super::edge::{Edge, GraphEdge, WeightedEdge};

/// Default cap on the vertex count inferred from an edge list.
pub const DEFAULT_MAX_VERTICES: usize = 1 << 24;

/// Options for reading edge lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeListOptions {
    /// Direction policy of the resulting graph.
    pub direction: Direction,
    /// Lines starting with this prefix (after trimming) are ignored.
    pub comment_prefix: String,
    /// Largest vertex count a file may imply; ids must be below it.
    pub max_vertices: usize,
}

impl Default for EdgeListOptions {
    fn default() -> Self {
        Self {
            direction: Direction::Undirected,
            comment_prefix: "#".to_string(),
            max_vertices: DEFAULT_MAX_VERTICES,
        }
    }
}

impl EdgeListOptions {
    /// Options for the given direction with the default comment prefix.
    #[must_use]
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            ..Self::default()
        }
    }

    /// Sets the comment prefix (builder pattern).
    #[must_use]
    pub fn with_comment_prefix(mut self, prefix: &str) -> Self {
        self.comment_prefix = prefix.to_string();
        self
    }

    /// Sets the vertex count cap (builder pattern).
    #[must_use]
    pub fn with_max_vertices(mut self, max_vertices: usize) -> Self {
        self.max_vertices = max_vertices;
        self
    }

    fn is_skipped(&self, line: &str) -> bool {
        line.is_empty() || (!self.comment_prefix.is_empty() && line.starts_with(&self.comment_prefix))
    }
}

/// Reads an unweighted edge list (`v w` per line).
///
/// # Errors
///
/// Returns `Error::Parse` on a line that is not exactly two vertex indices
/// or names a vertex at or above `options.max_vertices`, or `Error::Io` if
/// reading fails.
pub fn read_edge_list<R: BufRead>(reader: R, options: &EdgeListOptions) -> Result<Graph<Edge>> {
    let edges = read_records(reader, options, |line, tokens| {
        if tokens.len() != 2 {
            return Err(Error::parse(
                line,
                format!("expected `v w`, found {} tokens", tokens.len()),
            ));
        }
        Ok(Edge::new(
            parse_vertex(line, tokens[0], options.max_vertices)?,
            parse_vertex(line, tokens[1], options.max_vertices)?,
        ))
    })?;
    build(edges, options.direction)
}

/// Reads a weighted edge list (`v w weight` per line).
///
/// # Errors
///
/// Returns `Error::Parse` on a malformed line, a non-finite weight or a
/// vertex at or above `options.max_vertices`, or `Error::Io` if reading fails.
pub fn read_weighted_edge_list<R: BufRead>(
    reader: R,
    options: &EdgeListOptions,
) -> Result<Graph<WeightedEdge>> {
    let edges = read_records(reader, options, |line, tokens| {
        if tokens.len() != 3 {
            return Err(Error::parse(
                line,
                format!("expected `v w weight`, found {} tokens", tokens.len()),
            ));
        }
        let weight: f64 = tokens[2]
            .parse()
            .map_err(|_| Error::parse(line, format!("invalid weight `{}`", tokens[2])))?;
        if !weight.is_finite() {
            return Err(Error::parse(line, format!("non-finite weight `{}`", tokens[2])));
        }
        Ok(WeightedEdge::new(
            parse_vertex(line, tokens[0], options.max_vertices)?,
            parse_vertex(line, tokens[1], options.max_vertices)?,
            weight,
        ))
    })?;
    build(edges, options.direction)
}

/// Writes `graph` as an unweighted edge list.
///
/// Edges come out in [`Graph::edges`] order, so reading the output back
/// reproduces a directed graph's adjacency order exactly.
pub fn write_edge_list<W: Write>(graph: &Graph<Edge>, mut writer: W) -> Result<()> {
    for edge in graph.edges() {
        writeln!(writer, "{} {}", edge.source(), edge.target())?;
    }
    Ok(())
}

/// Writes `graph` as a weighted edge list.
pub fn write_weighted_edge_list<W: Write>(
    graph: &Graph<WeightedEdge>,
    mut writer: W,
) -> Result<()> {
    for edge in graph.edges() {
        writeln!(writer, "{} {} {}", edge.source(), edge.target(), edge.weight())?;
    }
    Ok(())
}

fn read_records<R, T, F>(reader: R, options: &EdgeListOptions, mut parse: F) -> Result<Vec<T>>
where
    R: BufRead,
    F: FnMut(usize, &[&str]) -> Result<T>,
{
    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if options.is_skipped(trimmed) {
            continue;
        }
        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        records.push(parse(index + 1, &tokens)?);
    }
    Ok(records)
}

fn parse_vertex(line: usize, token: &str, max_vertices: usize) -> Result<usize> {
    let vertex = token
        .parse::<usize>()
        .map_err(|_| Error::parse(line, format!("invalid vertex `{token}`")))?;
    if vertex >= max_vertices {
        return Err(Error::parse(
            line,
            format!("vertex {vertex} exceeds the limit of {max_vertices} vertices"),
        ));
    }
    Ok(vertex)
}

fn build<E: GraphEdge>(edges: Vec<E>, direction: Direction) -> Result<Graph<E>> {
    let vertex_count = edges
        .iter()
        .map(|edge| edge.source().max(edge.target()) + 1)
        .max()
        .unwrap_or(0);
    let graph = Graph::from_edges(vertex_count, direction, edges)?;
    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        %direction,
        "Loaded edge list"
    );
    Ok(graph)
}
