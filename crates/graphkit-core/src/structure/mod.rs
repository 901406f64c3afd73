//! Structural queries built on depth-first search.
//!
//! Every query here is computed once, in its constructor, and answered in
//! constant time afterwards:
//!
//! - [`ConnectedComponents`]: component labelling, ignoring direction
//! - [`Cycle`] / [`DirectedCycle`]: cycle detection with a witness
//! - [`Bipartite`]: two-colouring with an odd-cycle witness
//! - [`KosarajuScc`]: strongly connected components
//! - [`TransitiveClosure`]: all-pairs reachability
//! - [`Topological`]: topological order of a DAG
//!
//! Queries that only make sense for one direction policy reject the other
//! with `Error::DirectionMismatch`.

mod bipartite;
mod closure;
mod components;
mod cycle;
mod scc;
mod topological;


pub use bipartite::Bipartite;
pub use closure::TransitiveClosure;
pub use components::ConnectedComponents;
pub use cycle::{Cycle, DirectedCycle};
pub use scc::KosarajuScc;
pub use topological::Topological;
