//! Local-search moves over the clique/candidate/excluded partition.
//!
//! Between moves the candidate region holds exactly the non-clique vertices
//! of tightness zero. Every move below restores that before returning, so
//! [`MoveEngine::try_move`] can pop candidates without re-checking them.

use rand::Rng;

use crate::construction::randomized_greedy;
use crate::graph::Graph;
use crate::partition::PartitionIndex;
use crate::tightness::tightness;

#[derive(Clone, Debug)]
pub struct MoveEngine<'g> {
    graph: &'g Graph,
    index: PartitionIndex,
}

impl<'g> MoveEngine<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            index: PartitionIndex::new(graph.vertex_count()),
        }
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn index(&self) -> &PartitionIndex {
        &self.index
    }

    #[cfg(test)]
    pub(crate) fn index_mut(&mut self) -> &mut PartitionIndex {
        &mut self.index
    }

    /// Empties the clique and restores the identity order.
    pub fn reset(&mut self) {
        self.index.reset(self.graph.vertex_count());
    }

    pub fn tightness(&self, vertex: usize) -> usize {
        tightness(self.graph, &self.index, vertex)
    }

    /// Seeds the clique with a randomized greedy construction and marks
    /// everything else excluded. Expects an empty clique.
    pub fn construct<R: Rng>(&mut self, rng: &mut R, randomization: usize) {
        randomized_greedy(self.graph, &mut self.index, rng, randomization);
        self.index.close_candidates();
    }

    /// Moves candidate `vertex` into the clique, evicting every candidate
    /// not adjacent to it.
    pub fn insert_to_clique(&mut self, vertex: usize) {
        debug_assert_eq!(self.tightness(vertex), 0, "vertex {} is not a candidate", vertex);
        let graph = self.graph;
        for &other in graph.non_neighbours(vertex) {
            if tightness(graph, &self.index, other) == 0 {
                let border = self.index.shrink_candidates();
                self.index.swap_to_border(other, border);
            }
        }
        let border = self.index.q_border();
        self.index.swap_to_border(vertex, border);
        self.index.grow_clique();
        debug_assert!(self.index.check_invariants());
    }

    /// Takes `vertex` out of the clique and promotes every vertex it was the
    /// sole blocker of.
    ///
    /// `vertex` itself lands on the first candidate slot; it is not
    /// reclassified here.
    pub fn remove_from_clique(&mut self, vertex: usize) {
        debug_assert!(self.index.in_clique(vertex), "vertex {} is not in the clique", vertex);
        let graph = self.graph;
        for &other in graph.non_neighbours(vertex) {
            if tightness(graph, &self.index, other) == 1 {
                let border = self.index.c_border();
                self.index.swap_to_border(other, border);
                self.index.grow_candidates();
            }
        }
        self.index.shrink_clique();
        let border = self.index.q_border();
        self.index.swap_to_border(vertex, border);
        debug_assert!(self.index.check_invariants());
    }

    /// Inserts the first candidate, if any. Grows the clique by one.
    pub fn try_move(&mut self) -> bool {
        if !self.index.has_candidates() {
            return false;
        }
        let vertex = self.index.at(self.index.q_border());
        self.insert_to_clique(vertex);
        true
    }

    /// Exchanges one clique member for a vertex it alone blocks. Scans the
    /// clique in array order and takes the first pair found.
    ///
    /// Returns `(removed, inserted)`, or `None` at a local optimum.
    pub fn swap_one_to_one(&mut self) -> Option<(usize, usize)> {
        let graph = self.graph;
        let index = &self.index;
        let found = index.clique().iter().find_map(|&member| {
            graph
                .non_neighbours(member)
                .iter()
                .copied()
                .find(|&other| tightness(graph, index, other) == 1)
                .map(|other| (member, other))
        });
        if let Some((removed, inserted)) = found {
            self.remove_from_clique(removed);
            self.insert_to_clique(inserted);
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::BTreeSet;

    /// With an empty clique every vertex has tightness zero.
    fn open_all(engine: &mut MoveEngine<'_>) {
        engine.reset();
        for _ in 0..engine.graph().vertex_count() {
            engine.index_mut().grow_candidates();
        }
    }

    fn assert_consistent(engine: &MoveEngine<'_>) {
        let index = engine.index();
        assert!(index.check_invariants());
        assert!(engine.graph().verify(index.clique()));
        let candidates: BTreeSet<usize> = index.candidates().iter().copied().collect();
        let free: BTreeSet<usize> = (0..engine.graph().vertex_count())
            .filter(|&v| !index.in_clique(v) && engine.tightness(v) == 0)
            .collect();
        assert_eq!(candidates, free);
    }

    fn path(n: usize) -> Graph {
        Graph::from_edges(n, (1..n).map(|v| (v - 1, v))).unwrap()
    }

    #[test]
    fn move_grows_by_one() {
        let graph = path(4);
        let mut engine = MoveEngine::new(&graph);
        open_all(&mut engine);
        assert!(engine.try_move());
        assert_eq!(engine.index().clique(), &[0]);
        assert_eq!(engine.index().candidates(), &[1]);
        assert_consistent(&engine);

        assert!(engine.try_move());
        assert_eq!(engine.index().clique_size(), 2);
        assert!(!engine.try_move());
        assert_eq!(engine.index().clique_size(), 2);
        assert_consistent(&engine);
    }

    #[test]
    fn removal_promotes_sole_blocked() {
        let graph = path(3);
        let mut engine = MoveEngine::new(&graph);
        open_all(&mut engine);
        while engine.try_move() {}
        assert_eq!(engine.index().clique(), &[0, 1]);

        engine.remove_from_clique(0);
        assert_eq!(engine.index().clique(), &[1]);
        let candidates: BTreeSet<usize> = engine.index().candidates().iter().copied().collect();
        assert_eq!(candidates, vec![0, 2].into_iter().collect());
        assert_consistent(&engine);
    }

    #[test]
    fn swap_keeps_size() {
        let graph = path(3);
        let mut engine = MoveEngine::new(&graph);
        open_all(&mut engine);
        while engine.try_move() {}

        assert_eq!(engine.swap_one_to_one(), Some((0, 2)));
        let clique: BTreeSet<usize> = engine.index().clique().iter().copied().collect();
        assert_eq!(clique, vec![1, 2].into_iter().collect());
        assert!(!engine.index().has_candidates());
        assert_consistent(&engine);
    }

    #[test]
    fn no_swap_in_complete_graph() {
        let graph = Graph::from_edges(4, (0..4).flat_map(|u| (0..u).map(move |v| (u, v)))).unwrap();
        let mut engine = MoveEngine::new(&graph);
        open_all(&mut engine);
        while engine.try_move() {}
        assert_eq!(engine.index().clique_size(), 4);
        assert_eq!(engine.swap_one_to_one(), None);
    }

    #[test]
    fn construction_is_maximal() {
        let graph = path(7);
        let mut engine = MoveEngine::new(&graph);
        let mut rng = StdRng::seed_from_u64(3);
        engine.construct(&mut rng, 2);
        assert!(!engine.index().has_candidates());
        assert_consistent(&engine);
    }

    proptest! {
        #[test]
        fn moves_preserve_partition(
            n in 1usize..14,
            edges in prop::collection::vec((0usize..14, 0usize..14), 0..60),
            seed in any::<u64>(),
            randomization in 1usize..4,
        ) {
            let edges = edges.into_iter().filter(|&(u, v)| u < n && v < n);
            let graph = Graph::from_edges(n, edges).unwrap();
            let mut engine = MoveEngine::new(&graph);
            let mut rng = StdRng::seed_from_u64(seed);
            engine.construct(&mut rng, randomization);
            assert_consistent(&engine);

            for _ in 0..20 {
                let before = engine.index().clique_size();
                if engine.try_move() {
                    prop_assert_eq!(engine.index().clique_size(), before + 1);
                } else if engine.swap_one_to_one().is_some() {
                    prop_assert_eq!(engine.index().clique_size(), before);
                } else {
                    break;
                }
                assert_consistent(&engine);
            }
        }
    }
}
