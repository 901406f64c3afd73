//! Result rendering: plain text lines or pretty JSON on stdout.

use anyhow::Result;
use graphkit_core::config::OutputFormat;
use graphkit_core::graph::{GraphEdge, WeightedEdge};
use serde::Serialize;

/// Writes command results in the configured format.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    format: OutputFormat,
    precision: usize,
}

impl Printer {
    #[must_use]
    pub fn new(format: OutputFormat, precision: usize) -> Self {
        Self { format, precision }
    }

    /// Prints `value` as JSON, or the lines built by `text` otherwise.
    pub fn emit<T, F>(&self, value: &T, text: F) -> Result<()>
    where
        T: Serialize,
        F: FnOnce(&Self) -> Vec<String>,
    {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
            OutputFormat::Text => {
                for line in text(self) {
                    println!("{line}");
                }
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn weight(&self, weight: f64) -> String {
        format!("{weight:.prec$}", prec = self.precision)
    }

    #[must_use]
    pub fn edge(&self, edge: &WeightedEdge, arrow: &str) -> String {
        format!(
            "{}{arrow}{} {}",
            edge.source(),
            edge.target(),
            self.weight(edge.weight())
        )
    }
}

/// Vertex list joined by `separator`.
#[must_use]
pub fn join(vertices: &[usize], separator: &str) -> String {
    vertices
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_uses_precision() {
        let printer = Printer::new(OutputFormat::Text, 3);
        assert_eq!(printer.weight(0.5), "0.500");
        assert_eq!(Printer::new(OutputFormat::Text, 0).weight(2.4), "2");
    }

    #[test]
    fn test_edge_rendering() {
        let printer = Printer::new(OutputFormat::Text, 2);
        let edge = WeightedEdge::new(0, 7, 0.16);
        assert_eq!(printer.edge(&edge, "-"), "0-7 0.16");
        assert_eq!(printer.edge(&edge, "->"), "0->7 0.16");
    }

    #[test]
    fn test_join() {
        assert_eq!(join(&[0, 5, 4], " "), "0 5 4");
        assert_eq!(join(&[], "-"), "");
    }
}
