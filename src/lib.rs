//! Local search for large cliques.
//!
//! Each restart seeds a maximal clique by randomized greedy construction,
//! then improves it with free insertions and 1-for-1 swaps over a flat
//! array partition of the vertex set (clique | candidates | excluded). The
//! largest clique over all restarts is kept.
//!
//! ```
//! use clique_search::prelude::*;
//!
//! let graph = Graph::from_edges(4, vec![(0, 1), (1, 2), (2, 0), (2, 3)]).unwrap();
//! let config = SearchConfig { seed: Some(7), ..SearchConfig::default() };
//! let mut search = CliqueSearch::new(&graph, config);
//! search.run_search(10, 2).unwrap();
//! assert_eq!(search.best_clique(), &[0, 1, 2]);
//! assert!(graph.verify(search.best_clique()));
//! ```

#[macro_use]
extern crate lazy_static;

pub mod construction;
pub mod error;
pub mod graph;
pub mod logging;
pub mod moves;
pub mod partition;
pub mod report;
pub mod search;
pub mod tightness;

pub mod prelude {
    pub use crate::error::{GraphError, SearchError};
    pub use crate::graph::{Graph, GraphBuilder};
    pub use crate::search::{CliqueSearch, SearchConfig, SearchSummary};
}
