use crate::graph::Graph;
use crate::partition::PartitionIndex;

/// Number of current clique members that are not adjacent to `vertex`.
///
/// Zero means `vertex` could join the clique as is; one means exactly one
/// member blocks it. Recomputed on every call since the clique changes after
/// each move. Cost is `O(|non_neighbours(vertex)|)`.
pub fn tightness(graph: &Graph, index: &PartitionIndex, vertex: usize) -> usize {
    graph
        .non_neighbours(vertex)
        .iter()
        .filter(|&&other| index.in_clique(other))
        .count()
}
