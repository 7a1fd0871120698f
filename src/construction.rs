//! Randomized greedy construction of the initial clique.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::graph::Graph;
use crate::partition::PartitionIndex;

/// Grows a maximal clique from scratch into the clique region of `index`.
///
/// Keeps an explicit pool of vertices adjacent to everything committed so far.
/// Each step shuffles the pool, then commits a uniform pick among its first
/// `min(randomization, pool.len())` entries and drops the pool members not
/// adjacent to it. Stops once the pool is empty.
///
/// Only the clique cursor is maintained. The caller decides what the rest of
/// the array means afterwards.
pub fn randomized_greedy<R: Rng>(
    graph: &Graph,
    index: &mut PartitionIndex,
    rng: &mut R,
    randomization: usize,
) {
    debug_assert_eq!(index.q_border(), 0, "construction needs an empty clique");
    let width = randomization.max(1);
    let mut pool: Vec<usize> = (0..graph.vertex_count()).collect();
    pool.shuffle(rng);
    while !pool.is_empty() {
        let pick = rng.gen_range(0..width.min(pool.len()));
        let vertex = pool[pick];
        let border = index.q_border();
        index.swap_to_border(vertex, border);
        index.grow_clique();
        pool.retain(|&candidate| graph.is_adjacent(vertex, candidate));
        pool.shuffle(rng);
    }
}
