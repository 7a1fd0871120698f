use std::io;

use thiserror::Error;

/// Errors raised while ingesting a graph. A graph that fails here never
/// reaches the search.
#[derive(Debug, Error)]
pub enum GraphError {
    /// An edge arrived, or the graph was finalised, before the vertex count
    /// was declared.
    #[error("vertex count must be declared before edges")]
    MissingDeclaration,
    /// The vertex count was declared more than once.
    #[error("vertex count declared twice (first {first}, then {second})")]
    DuplicateDeclaration {
        /// Count from the first declaration.
        first: usize,
        /// Count from the rejected declaration.
        second: usize,
    },
    /// An edge endpoint lies outside `[0, vertices)`.
    #[error("vertex {vertex} is out of range for a graph with {vertices} vertices")]
    VertexOutOfRange {
        /// Offending (0-based) vertex index.
        vertex: usize,
        /// Declared vertex count.
        vertices: usize,
    },
    /// A DIMACS line that could not be understood.
    #[error("malformed line {line}: `{content}`")]
    Malformed {
        /// 1-based line number.
        line: usize,
        /// Raw line text.
        content: String,
    },
    /// A record on a given DIMACS line was rejected by the builder.
    #[error("line {line}: {source}")]
    AtLine {
        /// 1-based line number.
        line: usize,
        /// Underlying ingestion failure.
        #[source]
        source: Box<GraphError>,
    },
    /// Reading the input failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Errors raised by invalid search parameters.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// `run_search` was asked for zero restarts.
    #[error("restart count must be positive")]
    ZeroRestarts,
    /// `run_search` was asked for a randomization width of zero.
    #[error("randomization width must be positive")]
    ZeroRandomization,
}
