//! graphkit - run graph algorithms over edge-list files from the shell.

mod commands;
mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use graphkit_core::config::{LogFormat, LoggingConfig, OutputFormat};
use graphkit_core::graph::Direction;
use graphkit_core::mst::MstAlgorithm;
use graphkit_core::GraphkitConfig;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::commands::Session;
use crate::output::Printer;

/// graphkit - in-memory graph analysis
#[derive(Parser, Debug)]
#[command(name = "graphkit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (default: ./graphkit.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format, overrides `output.format`
    #[arg(short, long, global = true, value_enum)]
    format: Option<FormatArg>,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Vertex, edge and degree statistics
    Stats {
        #[command(flatten)]
        input: InputArgs,

        /// Read `v w weight` lines
        #[arg(long)]
        weighted: bool,
    },

    /// DFS or BFS paths from a source to every vertex
    Paths {
        #[command(flatten)]
        input: InputArgs,

        /// Source vertex (a label with --symbols)
        #[arg(short, long)]
        source: String,

        /// Breadth-first search (fewest edges) instead of depth-first
        #[arg(long)]
        bfs: bool,

        /// Read the file as a symbol graph
        #[arg(long)]
        symbols: bool,
    },

    /// Connected components, or strong components of a directed graph
    Components {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Topological order of a directed graph, or a cycle if there is none
    Topo {
        /// Edge-list file
        file: PathBuf,
    },

    /// Minimum spanning tree (forest) of a weighted undirected graph
    Mst {
        /// Weighted edge-list file
        file: PathBuf,

        /// Algorithm
        #[arg(short, long, value_enum, default_value_t = AlgorithmArg::LazyPrim)]
        algorithm: AlgorithmArg,
    },

    /// Single-source shortest (or longest) paths of a weighted graph
    Shortest {
        #[command(flatten)]
        input: InputArgs,

        /// Source vertex
        #[arg(short, long)]
        source: usize,

        /// Relax in topological order; the graph must be a DAG
        #[arg(long)]
        acyclic: bool,

        /// Longest instead of shortest paths
        #[arg(long, requires = "acyclic")]
        longest: bool,
    },

    /// Critical path schedule of a job list
    Cpm {
        /// Jobs file
        file: PathBuf,
    },

    /// Print the effective configuration
    Config,
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Edge-list file
    file: PathBuf,

    /// Directed edges, overrides `input.direction`
    #[arg(long, conflicts_with = "undirected")]
    directed: bool,

    /// Undirected edges, overrides `input.direction`
    #[arg(long)]
    undirected: bool,
}

impl InputArgs {
    /// Direction forced on the command line, if any.
    fn direction(&self) -> Option<Direction> {
        if self.directed {
            Some(Direction::Directed)
        } else if self.undirected {
            Some(Direction::Undirected)
        } else {
            None
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum AlgorithmArg {
    LazyPrim,
    Prim,
    Kruskal,
}

impl From<AlgorithmArg> for MstAlgorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::LazyPrim => Self::LazyPrim,
            AlgorithmArg::Prim => Self::Prim,
            AlgorithmArg::Kruskal => Self::Kruskal,
        }
    }
}

/// `RUST_LOG` wins; otherwise `-v` flags, then `logging.level`.
fn init_tracing(logging: &LoggingConfig, verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => logging.level_filter()?,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let registry = tracing_subscriber::registry().with(filter);
    let installed = match logging.format {
        LogFormat::Pretty => registry.with(layer.pretty()).try_init(),
        LogFormat::Compact => registry.with(layer.compact()).try_init(),
    };
    installed.context("failed to install the tracing subscriber")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config =
        GraphkitConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(format) = cli.format {
        config.output.format = format.into();
    }
    init_tracing(&config.logging, cli.verbose)?;

    let printer = Printer::new(config.output.format, config.output.precision);
    let session = Session::new(config, printer);
    tracing::debug!(command = ?cli.command, "Running command");

    match cli.command {
        Command::Stats { input, weighted } => session.stats(&input.file, input.direction(), weighted),
        Command::Paths {
            input,
            source,
            bfs,
            symbols,
        } => session.paths(&input.file, input.direction(), &source, bfs, symbols),
        Command::Components { input } => session.components(&input.file, input.direction()),
        Command::Topo { file } => session.topo(&file),
        Command::Mst { file, algorithm } => session.mst(&file, algorithm.into()),
        Command::Shortest {
            input,
            source,
            acyclic,
            longest,
        } => session.shortest(&input.file, input.direction(), source, acyclic, longest),
        Command::Cpm { file } => session.cpm(&file),
        Command::Config => session.config(),
    }
}
