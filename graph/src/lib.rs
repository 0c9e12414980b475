//! MI-based path salience scoring and seed-bounded degree-prioritised
//! expansion over attributed graphs.
//!
//! Three cores, each consuming the graph only through [`GraphView`]:
//!
//! - [`mi`] builds a [`mi::MICache`]: one informativeness scalar per edge.
//! - [`ranker`] enumerates and scores paths against that cache.
//! - [`expander`] grows seed-bounded frontiers independently of MI.
pub mod expander;
pub mod graph_view;
pub mod mi;
pub mod model;
pub mod ranker;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use graph_view::{GraphView, SimpleGraph};
pub use model::{CommunityLabel, Edge, Node, Path, RankedPath};
