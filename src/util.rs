use std::cmp::Ordering;

/// Sorts a pair of values into nondescending order.
pub fn sort_pair<K: Ord>(a: K, b: K) -> (K, K) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Orders route weights totally, treating `-0.0` and `0.0` as equal.
pub fn cmp_weights(a: f64, b: f64) -> Ordering {
    (a + 0.0).total_cmp(&(b + 0.0))
}

/// A fixed-size set of dense station indices.
#[cfg(feature = "bitvec")]
pub(crate) struct VisitedSet(bitvec::vec::BitVec);

#[cfg(feature = "bitvec")]
impl VisitedSet {
    pub fn new(len: usize) -> Self {
        Self(bitvec::vec::BitVec::repeat(false, len))
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0[index]
    }

    /// Marks `index` as visited, returning false if it already was.
    pub fn insert(&mut self, index: usize) -> bool {
        !self.0.replace(index, true)
    }

    pub fn count(&self) -> usize {
        self.0.count_ones()
    }
}

/// A fixed-size set of dense station indices.
#[cfg(not(feature = "bitvec"))]
pub(crate) struct VisitedSet(Vec<bool>);

#[cfg(not(feature = "bitvec"))]
impl VisitedSet {
    pub fn new(len: usize) -> Self {
        Self(vec![false; len])
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0[index]
    }

    /// Marks `index` as visited, returning false if it already was.
    pub fn insert(&mut self, index: usize) -> bool {
        !std::mem::replace(&mut self.0[index], true)
    }

    pub fn count(&self) -> usize {
        self.0.iter().filter(|&&visited| visited).count()
    }
}
