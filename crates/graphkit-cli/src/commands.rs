//! Subcommand handlers: load the input, run one query, hand the result to the
//! [`Printer`].

use std::fmt::Display;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use graphkit_core::cpm::{read_jobs, CriticalPath, ScheduleEntry};
use graphkit_core::graph::{
    read_edge_list, read_weighted_edge_list, BreadthFirstPaths, DepthFirstPaths, Direction, Edge,
    EdgeListOptions, Graph, GraphEdge, Paths, SymbolGraph, WeightedEdge,
};
use graphkit_core::mst::MstAlgorithm;
use graphkit_core::paths::{AcyclicPaths, DijkstraPaths, PathMode, PathSummary, WeightedPaths};
use graphkit_core::structure::{ConnectedComponents, KosarajuScc, Topological};
use graphkit_core::GraphkitConfig;
use serde::Serialize;

use crate::output::{join, Printer};

/// Effective configuration plus the printer built from it.
pub struct Session {
    config: GraphkitConfig,
    out: Printer,
}

impl Session {
    #[must_use]
    pub fn new(config: GraphkitConfig, out: Printer) -> Self {
        Self { config, out }
    }

    pub fn stats(&self, file: &Path, direction: Option<Direction>, weighted: bool) -> Result<()> {
        let options = self.options(self.direction(direction));
        let stats = if weighted {
            load_weighted(file, &options)?.stats()
        } else {
            load_graph(file, &options)?.stats()
        };
        self.out.emit(&stats, |out| {
            vec![
                format!("vertices: {}", stats.vertex_count),
                format!("edges: {}", stats.edge_count),
                format!("direction: {}", stats.direction),
                format!("max degree: {}", stats.max_degree),
                format!("average degree: {}", out.weight(stats.avg_degree)),
                format!("self-loops: {}", stats.self_loops),
            ]
        })
    }

    pub fn paths(
        &self,
        file: &Path,
        direction: Option<Direction>,
        source: &str,
        bfs: bool,
        symbols: bool,
    ) -> Result<()> {
        let direction = self.direction(direction);
        if symbols {
            let delimiter = &self.config.input.symbol_delimiter;
            let symbol_graph = SymbolGraph::from_reader(open(file)?, delimiter, direction)
                .with_context(|| format!("failed to read symbol graph {}", file.display()))?;
            let s = symbol_graph
                .index_of(source)
                .with_context(|| format!("unknown vertex label `{source}`"))?;
            let engine = path_engine(symbol_graph.graph(), s, bfs)?;
            let report = PathReport::collect(
                engine.as_ref(),
                s,
                symbol_graph.graph().vertex_count(),
                |v| symbol_graph.name_of(v).unwrap_or_default().to_string(),
            );
            self.out.emit(&report, |_| report.lines())
        } else {
            let s: usize = source
                .parse()
                .with_context(|| format!("invalid source vertex `{source}`"))?;
            let graph = load_graph(file, &self.options(direction))?;
            let engine = path_engine(&graph, s, bfs)?;
            let report = PathReport::collect(engine.as_ref(), s, graph.vertex_count(), |v| v);
            self.out.emit(&report, |_| report.lines())
        }
    }

    pub fn components(&self, file: &Path, direction: Option<Direction>) -> Result<()> {
        let graph = load_graph(file, &self.options(self.direction(direction)))?;
        let report = if graph.is_directed() {
            let scc = KosarajuScc::new(&graph)?;
            ComponentReport {
                strong: true,
                count: scc.count(),
                components: scc.components(),
            }
        } else {
            let cc = ConnectedComponents::new(&graph);
            ComponentReport {
                strong: false,
                count: cc.count(),
                components: cc.components(),
            }
        };
        self.out.emit(&report, |_| report.lines())
    }

    pub fn topo(&self, file: &Path) -> Result<()> {
        let graph = load_graph(file, &self.options(Direction::Directed))?;
        let topological = Topological::new(&graph)?;
        let report = TopoReport {
            is_dag: topological.is_dag(),
            order: topological.order().map(<[usize]>::to_vec),
            cycle: topological.cycle().map(<[usize]>::to_vec),
        };
        self.out.emit(&report, |_| report.lines())
    }

    pub fn mst(&self, file: &Path, algorithm: MstAlgorithm) -> Result<()> {
        let graph = load_weighted(file, &self.options(Direction::Undirected))?;
        let summary = algorithm.compute(&graph)?.summary();
        self.out.emit(&summary, |out| {
            let mut lines: Vec<String> = summary.edges.iter().map(|e| out.edge(e, "-")).collect();
            lines.push(format!("weight: {}", out.weight(summary.weight)));
            if summary.tree_count > 1 {
                lines.push(format!("trees: {}", summary.tree_count));
            }
            lines
        })
    }

    pub fn shortest(
        &self,
        file: &Path,
        direction: Option<Direction>,
        source: usize,
        acyclic: bool,
        longest: bool,
    ) -> Result<()> {
        let direction = if acyclic {
            Direction::Directed
        } else {
            self.direction(direction)
        };
        let graph = load_weighted(file, &self.options(direction))?;
        let engine: Box<dyn WeightedPaths> = if acyclic {
            let mode = if longest {
                PathMode::Longest
            } else {
                PathMode::Shortest
            };
            Box::new(AcyclicPaths::new(&graph, source, mode)?)
        } else {
            Box::new(DijkstraPaths::new(&graph, source)?)
        };

        let summaries: Vec<PathSummary> = (0..graph.vertex_count())
            .map(|v| engine.summary(v))
            .collect();
        let arrow = if direction.is_directed() { "->" } else { "-" };
        self.out.emit(&summaries, |out| {
            summaries
                .iter()
                .map(|summary| match summary.distance {
                    Some(distance) => {
                        let edges: Vec<String> =
                            summary.edges.iter().map(|e| out.edge(e, arrow)).collect();
                        format!(
                            "{} to {} ({})  {}",
                            summary.source,
                            summary.target,
                            out.weight(distance),
                            edges.join("  ")
                        )
                        .trim_end()
                        .to_string()
                    }
                    None => format!("{} to {}: no path", summary.source, summary.target),
                })
                .collect()
        })
    }

    pub fn cpm(&self, file: &Path) -> Result<()> {
        let jobs = read_jobs(open(file)?)
            .with_context(|| format!("failed to read jobs {}", file.display()))?;
        let cpm = CriticalPath::new(&jobs)?;
        let report = CpmReport {
            completion_time: cpm.completion_time(),
            critical_jobs: cpm.critical_jobs(),
            schedule: cpm.schedule(),
        };
        self.out.emit(&report, |out| {
            let mut lines = vec![format!("{:>4} {:>10} {:>10}", "job", "start", "finish")];
            for entry in &report.schedule {
                lines.push(format!(
                    "{:>4} {:>10} {:>10}{}",
                    entry.job,
                    out.weight(entry.start),
                    out.weight(entry.finish),
                    if entry.critical { " *" } else { "" }
                ));
            }
            lines.push(format!("Finish time: {}", out.weight(report.completion_time)));
            lines.push(format!("Critical path: {}", join(&report.critical_jobs, " ")));
            lines
        })
    }

    pub fn config(&self) -> Result<()> {
        let rendered = self.config.to_toml()?;
        self.out
            .emit(&self.config, |_| vec![rendered.trim_end().to_string()])
    }

    /// Command-line override, else `input.direction`.
    fn direction(&self, forced: Option<Direction>) -> Direction {
        forced.unwrap_or(self.config.input.direction)
    }

    fn options(&self, direction: Direction) -> EdgeListOptions {
        EdgeListOptions {
            direction,
            ..self.config.input.edge_list_options()
        }
    }
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    Ok(BufReader::new(file))
}

fn load_graph(path: &Path, options: &EdgeListOptions) -> Result<Graph<Edge>> {
    read_edge_list(open(path)?, options)
        .with_context(|| format!("failed to read edge list {}", path.display()))
}

fn load_weighted(path: &Path, options: &EdgeListOptions) -> Result<Graph<WeightedEdge>> {
    read_weighted_edge_list(open(path)?, options)
        .with_context(|| format!("failed to read weighted edge list {}", path.display()))
}

fn path_engine<E: GraphEdge>(
    graph: &Graph<E>,
    source: usize,
    bfs: bool,
) -> Result<Box<dyn Paths>> {
    let engine: Box<dyn Paths> = if bfs {
        Box::new(BreadthFirstPaths::new(graph, source)?)
    } else {
        Box::new(DepthFirstPaths::new(graph, source)?)
    };
    Ok(engine)
}

#[derive(Debug, Serialize)]
struct VertexPath<T> {
    target: T,
    path: Option<Vec<T>>,
}

#[derive(Debug, Serialize)]
struct PathReport<T> {
    source: T,
    paths: Vec<VertexPath<T>>,
}

impl<T: Display> PathReport<T> {
    fn collect(
        engine: &dyn Paths,
        source: usize,
        vertex_count: usize,
        name: impl Fn(usize) -> T,
    ) -> Self {
        let paths = (0..vertex_count)
            .map(|v| VertexPath {
                target: name(v),
                path: engine
                    .has_path_to(v)
                    .then(|| engine.path_to(v).into_iter().map(&name).collect()),
            })
            .collect();
        Self {
            source: name(source),
            paths,
        }
    }

    fn lines(&self) -> Vec<String> {
        self.paths
            .iter()
            .map(|entry| match &entry.path {
                Some(path) => {
                    let hops: Vec<String> = path.iter().map(ToString::to_string).collect();
                    format!("{} to {}: {}", self.source, entry.target, hops.join("-"))
                }
                None => format!("{} to {}: not connected", self.source, entry.target),
            })
            .collect()
    }
}

#[derive(Debug, Serialize)]
struct ComponentReport {
    strong: bool,
    count: usize,
    components: Vec<Vec<usize>>,
}

impl ComponentReport {
    fn lines(&self) -> Vec<String> {
        let kind = if self.strong { "strong components" } else { "components" };
        let mut lines = vec![format!("{} {kind}", self.count)];
        lines.extend(self.components.iter().map(|members| join(members, " ")));
        lines
    }
}

#[derive(Debug, Serialize)]
struct TopoReport {
    is_dag: bool,
    order: Option<Vec<usize>>,
    cycle: Option<Vec<usize>>,
}

impl TopoReport {
    fn lines(&self) -> Vec<String> {
        match (&self.order, &self.cycle) {
            (Some(order), _) => vec![format!("order: {}", join(order, " "))],
            (None, Some(cycle)) => vec![format!("not a DAG, cycle: {}", join(cycle, " "))],
            (None, None) => vec!["not a DAG".to_string()],
        }
    }
}

#[derive(Debug, Serialize)]
struct CpmReport {
    completion_time: f64,
    critical_jobs: Vec<usize>,
    schedule: Vec<ScheduleEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_report_lines() {
        let report = PathReport {
            source: 0,
            paths: vec![
                VertexPath {
                    target: 0,
                    path: Some(vec![0]),
                },
                VertexPath {
                    target: 3,
                    path: Some(vec![0, 5, 4, 3]),
                },
                VertexPath {
                    target: 7,
                    path: None,
                },
            ],
        };
        assert_eq!(
            report.lines(),
            vec!["0 to 0: 0", "0 to 3: 0-5-4-3", "0 to 7: not connected"]
        );
    }

    #[test]
    fn test_component_report_lines() {
        let report = ComponentReport {
            strong: true,
            count: 2,
            components: vec![vec![0, 1], vec![2]],
        };
        assert_eq!(report.lines(), vec!["2 strong components", "0 1", "2"]);
    }

    #[test]
    fn test_topo_report_lines() {
        let dag = TopoReport {
            is_dag: true,
            order: Some(vec![2, 0, 1]),
            cycle: None,
        };
        assert_eq!(dag.lines(), vec!["order: 2 0 1"]);

        let cyclic = TopoReport {
            is_dag: false,
            order: None,
            cycle: Some(vec![1, 2, 1]),
        };
        assert_eq!(cyclic.lines(), vec!["not a DAG, cycle: 1 2 1"]);
    }
}
