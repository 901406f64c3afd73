//! Critical path method for parallel job scheduling with precedence
//! constraints.
//!
//! A job list becomes a DAG with two vertices per job: job `i` starts at
//! vertex `i` and finishes at vertex `i + N`, joined by an edge weighted with
//! its duration. A global source precedes every start and a global sink
//! follows every finish; "`i` before `j`" is a zero-weight edge from the
//! finish of `i` to the start of `j`. Longest paths from the source give the
//! earliest feasible times.
//!
//! # Example
//!
//! ```rust
//! use graphkit_core::cpm::{CriticalPath, Job};
//!
//! let jobs = vec![Job::new(3.0, vec![1]), Job::new(2.0, vec![])];
//! let cpm = CriticalPath::new(&jobs).unwrap();
//!
//! assert_eq!(cpm.earliest_start(1), 3.0);
//! assert_eq!(cpm.completion_time(), 5.0);
//! assert_eq!(cpm.critical_jobs(), vec![0, 1]);
//! ```

use std::io::BufRead;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Direction, Graph, GraphEdge, WeightedEdge};
use crate::paths::{AcyclicPaths, WeightedPaths};

/// A job with a duration and the jobs that may only start after it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Time the job takes.
    pub duration: f64,
    /// Indices of jobs that must wait for this one.
    pub successors: Vec<usize>,
}

impl Job {
    /// Creates a job.
    #[must_use]
    pub fn new(duration: f64, successors: Vec<usize>) -> Self {
        Self {
            duration,
            successors,
        }
    }
}

/// Scheduled times of one job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Job index.
    pub job: usize,
    /// Job duration.
    pub duration: f64,
    /// Earliest time the job can start.
    pub start: f64,
    /// Earliest time the job can finish.
    pub finish: f64,
    /// Whether the job lies on the critical path.
    pub critical: bool,
}

/// Earliest schedule of a job list.
#[derive(Debug, Clone)]
pub struct CriticalPath {
    durations: Vec<f64>,
    paths: AcyclicPaths,
}

impl CriticalPath {
    /// Builds the precedence DAG and solves it.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownJob` if a successor index is out of range and
    /// `Error::NotADag` (with the cycle given as job indices) if the
    /// precedence constraints are circular.
    pub fn new(jobs: &[Job]) -> Result<Self> {
        let n = jobs.len();
        let (source, sink) = (2 * n, 2 * n + 1);
        let mut graph: Graph<WeightedEdge> = Graph::directed(2 * n + 2);
        for (i, job) in jobs.iter().enumerate() {
            graph.add_edge((source, i, 0.0))?;
            graph.add_edge((i, i + n, job.duration))?;
            graph.add_edge((i + n, sink, 0.0))?;
            for &successor in &job.successors {
                if successor >= n {
                    return Err(Error::UnknownJob {
                        job: successor,
                        job_count: n,
                    });
                }
                graph.add_edge((i + n, successor, 0.0))?;
            }
        }
        graph.add_edge((source, sink, 0.0))?;

        let paths = AcyclicPaths::longest(&graph, source).map_err(|err| match err {
            Error::NotADag { cycle } => Error::NotADag {
                cycle: job_cycle(&cycle, n),
            },
            other => other,
        })?;

        let schedule = Self {
            durations: jobs.iter().map(|job| job.duration).collect(),
            paths,
        };
        debug!(
            jobs = n,
            completion_time = schedule.completion_time(),
            "Critical path computed"
        );
        Ok(schedule)
    }

    /// Number of jobs.
    #[must_use]
    pub fn job_count(&self) -> usize {
        self.durations.len()
    }

    /// Earliest time at which every predecessor of `job` has finished.
    #[must_use]
    pub fn earliest_start(&self, job: usize) -> f64 {
        assert!(job < self.job_count(), "job {job} out of range");
        self.paths.dist_to(job)
    }

    /// Earliest time at which `job` can be done.
    #[must_use]
    pub fn earliest_finish(&self, job: usize) -> f64 {
        assert!(job < self.job_count(), "job {job} out of range");
        self.paths.dist_to(job + self.job_count())
    }

    /// Earliest time at which every job is done; `0` without jobs.
    #[must_use]
    pub fn completion_time(&self) -> f64 {
        self.paths.dist_to(self.sink())
    }

    /// Jobs on the longest source-to-sink path, in execution order.
    #[must_use]
    pub fn critical_jobs(&self) -> Vec<usize> {
        let n = self.job_count();
        self.paths
            .path_to(self.sink())
            .iter()
            .filter(|edge| edge.source() < n && edge.target() == edge.source() + n)
            .map(GraphEdge::source)
            .collect()
    }

    /// Start and finish of every job, in job order.
    #[must_use]
    pub fn schedule(&self) -> Vec<ScheduleEntry> {
        let critical = self.critical_jobs();
        self.durations
            .iter()
            .enumerate()
            .map(|(job, &duration)| ScheduleEntry {
                job,
                duration,
                start: self.earliest_start(job),
                finish: self.earliest_finish(job),
                critical: critical.contains(&job),
            })
            .collect()
    }

    fn sink(&self) -> usize {
        2 * self.job_count() + 1
    }
}

/// Maps a cycle over start/finish vertices to job indices.
fn job_cycle(cycle: &[usize], job_count: usize) -> Vec<usize> {
    let mut jobs: Vec<usize> = cycle.iter().map(|&v| v % job_count).collect();
    jobs.dedup();
    jobs
}

/// Reads a job list.
///
/// The first line holds the job count `N`; each of the next `N` lines holds
/// a duration followed by zero or more successor indices. Blank lines and
/// lines starting with `#` are skipped.
///
/// Lines carry no successor count: every token after the duration is a
/// successor. A file in the counted layout (`41.0 3 1 7 9`) must have the
/// count column removed first (`41.0 1 7 9`), or its counts are read as
/// successors.
///
/// ```rust
/// use graphkit_core::cpm::read_jobs;
///
/// let jobs = read_jobs("3\n41.0 1 2\n51.0 2\n50.0\n".as_bytes()).unwrap();
/// assert_eq!(jobs[0].successors, vec![1, 2]);
/// assert!(jobs[2].successors.is_empty());
/// ```
///
/// # Errors
///
/// Returns `Error::Parse` on malformed numbers or a missing job line, and
/// `Error::Io` if reading fails. Successor ranges are checked by
/// [`CriticalPath::new`].
pub fn read_jobs<R: BufRead>(reader: R) -> Result<Vec<Job>> {
    let mut expected: Option<usize> = None;
    let mut jobs = Vec::new();
    let mut last_line = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;
        last_line = number;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let Some(count) = expected else {
            let count = trimmed.parse::<usize>().map_err(|_| {
                Error::parse(number, format!("expected job count, found `{trimmed}`"))
            })?;
            expected = Some(count);
            continue;
        };
        if jobs.len() == count {
            return Err(Error::parse(
                number,
                format!("unexpected line after {count} jobs"),
            ));
        }

        let mut tokens = trimmed.split_whitespace();
        let duration = tokens
            .next()
            .and_then(|token| token.parse::<f64>().ok())
            .filter(|duration| duration.is_finite())
            .ok_or_else(|| Error::parse(number, "expected a finite duration"))?;
        let successors = tokens
            .map(|token| {
                token
                    .parse::<usize>()
                    .map_err(|_| Error::parse(number, format!("invalid successor `{token}`")))
            })
            .collect::<Result<Vec<_>>>()?;
        jobs.push(Job::new(duration, successors));
    }

    let count = expected.unwrap_or(0);
    if jobs.len() < count {
        return Err(Error::parse(
            last_line,
            format!("expected {count} jobs, found {}", jobs.len()),
        ));
    }
    Ok(jobs)
}
