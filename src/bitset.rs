//! Fixed-width bitset and the per-vertex neighborhood masks the clique
//! algorithms run over.
//!
//! Backed by [`fixedbitset::FixedBitSet`] rather than a hand-rolled `Vec<u64>`
//! — the word-parallel population count and in-place boolean ops are what
//! bit-parallel neighborhood intersection needs, and reimplementing them
//! would just be a slower, less-tested copy of what the crate already does.

use fixedbitset::FixedBitSet;

/// A fixed-width bitset of `len()` bits, indices `0..len()`.
///
/// Bits at index `>= len()` never exist — there is nothing to mask out,
/// unlike a raw word array, because `FixedBitSet` itself maintains that
/// invariant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitset(FixedBitSet);

impl Bitset {
    /// Create a bitset of `len` bits, all clear.
    pub fn with_len(len: usize) -> Self {
        Bitset(FixedBitSet::with_capacity(len))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty_width(&self) -> bool {
        self.0.len() == 0
    }

    /// Set bit `i`.
    pub fn set(&mut self, i: usize) {
        self.0.set(i, true);
    }

    /// Clear bit `i`.
    pub fn clear_bit(&mut self, i: usize) {
        self.0.set(i, false);
    }

    /// Test bit `i`.
    pub fn test(&self, i: usize) -> bool {
        self.0.contains(i)
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.0.count_ones(..)
    }

    /// True iff no bit is set.
    pub fn none_set(&self) -> bool {
        self.count_ones() == 0
    }

    /// Ascending iterator over the indices of set bits — the "scan-set-bits"
    /// operation, and the source of every ascending-index tie-break the
    /// clique algorithms make.
    pub fn ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.ones()
    }

    /// In-place `self &= other`.
    pub fn intersect_with(&mut self, other: &Bitset) {
        self.0.intersect_with(&other.0);
    }

    /// In-place `self |= other`.
    pub fn union_with(&mut self, other: &Bitset) {
        self.0.union_with(&other.0);
    }

    /// In-place `self -= other` (bits in `self` and not in `other`).
    pub fn difference_with(&mut self, other: &Bitset) {
        self.0.difference_with(&other.0);
    }

    /// `self & other`, as a new bitset.
    pub fn intersection(&self, other: &Bitset) -> Bitset {
        let mut out = self.clone();
        out.intersect_with(other);
        out
    }

    /// `self - other`, as a new bitset.
    pub fn difference(&self, other: &Bitset) -> Bitset {
        let mut out = self.clone();
        out.difference_with(other);
        out
    }

    /// `self | other`, as a new bitset.
    pub fn union(&self, other: &Bitset) -> Bitset {
        let mut out = self.clone();
        out.union_with(other);
        out
    }
}

/// `N[v]` has bit `u` set iff `adj[v][u] = 1`. Built once per algorithm
/// invocation that needs bitset-parallel neighborhoods (the clique
/// algorithms), then read-only.
#[derive(Clone, Debug)]
pub struct NeighborMasks {
    masks: Vec<Bitset>,
}

impl NeighborMasks {
    pub fn build(graph: &crate::graph::Graph) -> Self {
        let v = graph.order();
        let mut masks = vec![Bitset::with_len(v); v];
        for u in 0..v {
            for w in 0..v {
                if graph.has_edge(u, w) {
                    masks[u].set(w);
                }
            }
        }
        NeighborMasks { masks }
    }

    pub fn of(&self, v: usize) -> &Bitset {
        &self.masks[v]
    }

    pub fn len(&self) -> usize {
        self.masks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_clear_test_roundtrip() {
        let mut b = Bitset::with_len(10);
        assert!(!b.test(3));
        b.set(3);
        assert!(b.test(3));
        b.clear_bit(3);
        assert!(!b.test(3));
    }

    #[test]
    fn ones_ascending() {
        let mut b = Bitset::with_len(8);
        b.set(5);
        b.set(1);
        b.set(6);
        assert_eq!(b.ones().collect::<Vec<_>>(), vec![1, 5, 6]);
        assert_eq!(b.count_ones(), 3);
    }

    #[test]
    fn intersection_union_difference() {
        let mut a = Bitset::with_len(8);
        a.set(0);
        a.set(1);
        a.set(2);
        let mut b = Bitset::with_len(8);
        b.set(1);
        b.set(2);
        b.set(3);

        assert_eq!(a.intersection(&b).ones().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(
            a.union(&b).ones().collect::<Vec<_>>(),
            vec![0, 1, 2, 3]
        );
        assert_eq!(a.difference(&b).ones().collect::<Vec<_>>(), vec![0]);
    }
}
