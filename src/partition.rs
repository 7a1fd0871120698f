//! Flat-array partition of the vertex set into clique, candidate and
//! excluded regions.
//!
//! `order` is a permutation of `0..n`. Two cursors split it:
//!
//! ```text
//! [0, q_border)          clique
//! [q_border, c_border)   candidates
//! [c_border, n)          excluded
//! ```
//!
//! `position` is the inverse of `order`, so moving a vertex across a cursor
//! is a single two-slot swap.

/// Region a vertex currently belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    Clique,
    Candidate,
    Excluded,
}

#[derive(Clone, Debug, Default)]
pub struct PartitionIndex {
    order: Vec<usize>,
    position: Vec<usize>,
    q_border: usize,
    c_border: usize,
}

impl PartitionIndex {
    /// Identity partition over `n` vertices with empty clique and candidate
    /// regions.
    pub fn new(n: usize) -> Self {
        let mut index = Self::default();
        index.reset(n);
        index
    }

    /// Restores the identity permutation and closes both regions, reusing
    /// the existing allocations.
    pub fn reset(&mut self, n: usize) {
        self.order.clear();
        self.order.extend(0..n);
        self.position.clear();
        self.position.extend(0..n);
        self.q_border = 0;
        self.c_border = 0;
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn q_border(&self) -> usize {
        self.q_border
    }

    pub fn c_border(&self) -> usize {
        self.c_border
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn position(&self, vertex: usize) -> usize {
        self.position[vertex]
    }

    /// Vertex stored at `slot`.
    pub fn at(&self, slot: usize) -> usize {
        self.order[slot]
    }

    pub fn clique(&self) -> &[usize] {
        &self.order[..self.q_border]
    }

    pub fn candidates(&self) -> &[usize] {
        &self.order[self.q_border..self.c_border]
    }

    pub fn excluded(&self) -> &[usize] {
        &self.order[self.c_border..]
    }

    pub fn clique_size(&self) -> usize {
        self.q_border
    }

    pub fn has_candidates(&self) -> bool {
        self.c_border != self.q_border
    }

    #[inline]
    pub fn in_clique(&self, vertex: usize) -> bool {
        self.position[vertex] < self.q_border
    }

    pub fn region(&self, vertex: usize) -> Region {
        let slot = self.position[vertex];
        if slot < self.q_border {
            Region::Clique
        } else if slot < self.c_border {
            Region::Candidate
        } else {
            Region::Excluded
        }
    }

    /// Exchanges `vertex` with the occupant of `border`, keeping `position`
    /// the inverse of `order`.
    #[inline]
    pub fn swap_to_border(&mut self, vertex: usize, border: usize) {
        let at_border = self.order[border];
        let slot = self.position[vertex];
        self.order.swap(slot, border);
        self.position.swap(vertex, at_border);
        debug_assert_eq!(self.order[border], vertex);
        debug_assert_eq!(self.position[vertex], border);
    }

    /// Moves the clique cursor one slot right, absorbing `order[q_border]`
    /// into the clique. The candidate cursor is dragged along if needed.
    pub fn grow_clique(&mut self) {
        debug_assert!(self.q_border < self.len(), "clique cursor past end");
        self.q_border += 1;
        if self.c_border < self.q_border {
            self.c_border = self.q_border;
        }
    }

    /// Moves the clique cursor one slot left; the vertex at the old last
    /// clique slot becomes the first candidate.
    pub fn shrink_clique(&mut self) {
        debug_assert!(self.q_border > 0, "clique cursor below zero");
        self.q_border -= 1;
    }

    /// Absorbs `order[c_border]` into the candidate region.
    pub fn grow_candidates(&mut self) {
        debug_assert!(self.c_border < self.len(), "candidate cursor past end");
        self.c_border += 1;
    }

    /// Releases the last candidate slot into the excluded region and returns
    /// its index.
    pub fn shrink_candidates(&mut self) -> usize {
        debug_assert!(self.c_border > self.q_border, "candidate region empty");
        self.c_border -= 1;
        self.c_border
    }

    /// Empties the candidate region: everything outside the clique becomes
    /// excluded.
    pub fn close_candidates(&mut self) {
        self.c_border = self.q_border;
    }

    /// Whether `q_border <= c_border <= n` and `position` inverts `order`.
    pub fn check_invariants(&self) -> bool {
        let n = self.order.len();
        self.q_border <= self.c_border
            && self.c_border <= n
            && self.position.len() == n
            && self
                .order
                .iter()
                .enumerate()
                .all(|(slot, &vertex)| vertex < n && self.position[vertex] == slot)
    }
}
