//! Disjoint-set (union-find) structure over integer elements.
//!
//! [`DisjointSet`] tracks a partition of the elements `0..n` into disjoint
//! sets, supporting near-constant-time find-representative and merge. The
//! graph builders use it to reason about connected components; it is also
//! exposed as a general-purpose utility.
//!
//! Performance relies on the usual pair of techniques: path halving during
//! [`DisjointSet::find`] and union by rank during [`DisjointSet::merge`],
//! giving amortized O(α(n)) per operation.

use std::cmp::Ordering;

use thiserror::Error;

/// Error generated when an element index falls outside a disjoint set.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("element {index} is out of range for a disjoint set over {len} elements")]
pub struct OutOfRange {
    /// The offending element.
    pub index: usize,
    /// Number of elements in the set.
    pub len: usize,
}

/// A partition of the elements `0..n` into disjoint sets.
///
/// Every element starts in its own singleton set. [`DisjointSet::merge`]
/// unions two sets; [`DisjointSet::find`] returns the current representative
/// of an element's set. Representatives are stable between merges but may
/// change when sets are merged.
///
/// # Example
///
/// ```
/// use graphgen::DisjointSet;
///
/// let mut sets = DisjointSet::new(10);
/// assert_eq!(sets.set_count(), 10);
///
/// sets.merge(0, 1)?;
/// sets.merge(1, 2)?;
/// assert!(sets.connected(0, 2)?);
/// assert_eq!(sets.set_count(), 8);
/// # Ok::<(), graphgen::OutOfRange>(())
/// ```
#[derive(Debug, Clone)]
pub struct DisjointSet {
    /// Parent pointers; roots point to themselves.
    parent: Vec<usize>,
    /// Upper bound on the height of each root's tree.
    rank: Vec<u8>,
    /// Current number of disjoint sets.
    sets: usize,
}

impl DisjointSet {
    /// Creates `len` singleton sets over the elements `0..len`.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            sets: len,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether the structure holds no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Current number of disjoint sets.
    ///
    /// Starts at [`len`](Self::len) and only decreases, by one per effective
    /// merge.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Returns the representative of the set containing `element`.
    ///
    /// Two elements are in the same set exactly when their representatives
    /// are equal. Repeated calls without intervening merges return the same
    /// representative.
    ///
    /// # Errors
    ///
    /// Fails with [`OutOfRange`] if `element` is not below
    /// [`len`](Self::len).
    pub fn find(&mut self, element: usize) -> Result<usize, OutOfRange> {
        self.check(element)?;
        Ok(self.root(element))
    }

    /// Unions the sets containing `a` and `b`.
    ///
    /// Returns whether the merge reduced the set count, i.e. `false` when
    /// both elements already shared a set.
    ///
    /// # Errors
    ///
    /// Fails with [`OutOfRange`] if either element is not below
    /// [`len`](Self::len); the partition is unchanged in that case.
    pub fn merge(&mut self, a: usize, b: usize) -> Result<bool, OutOfRange> {
        self.check(a)?;
        self.check(b)?;
        Ok(self.join(a, b))
    }

    /// Whether `a` and `b` are currently in the same set.
    ///
    /// # Errors
    ///
    /// Fails with [`OutOfRange`] if either element is not below
    /// [`len`](Self::len).
    pub fn connected(&mut self, a: usize, b: usize) -> Result<bool, OutOfRange> {
        self.check(a)?;
        self.check(b)?;
        Ok(self.root(a) == self.root(b))
    }

    fn check(&self, element: usize) -> Result<(), OutOfRange> {
        if element < self.parent.len() {
            Ok(())
        } else {
            Err(OutOfRange {
                index: element,
                len: self.parent.len(),
            })
        }
    }

    /// Union by rank over in-range elements. Returns whether the set count
    /// was reduced.
    pub(crate) fn join(&mut self, a: usize, b: usize) -> bool {
        let a = self.root(a);
        let b = self.root(b);
        if a == b {
            return false;
        }

        match self.rank[a].cmp(&self.rank[b]) {
            Ordering::Less => self.parent[a] = b,
            Ordering::Greater => self.parent[b] = a,
            Ordering::Equal => {
                self.parent[a] = b;
                self.rank[b] += 1;
            }
        }
        self.sets -= 1;
        true
    }

    /// Iterative find with path halving: every visited element is pointed at
    /// its grandparent.
    fn root(&mut self, mut element: usize) -> usize {
        while self.parent[element] != element {
            let grandparent = self.parent[self.parent[element]];
            self.parent[element] = grandparent;
            element = grandparent;
        }
        element
    }
}
