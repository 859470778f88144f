//! Compressed sparse row adjacency, the view every kernel consumes.
//!
//! A graph is the triple `(Ap, Aj, Ax?)`: row pointers of length `n + 1`,
//! column indices of length `nnz`, and optional edge weights of the same
//! length. [`CsrView`] borrows the two structural arrays and validates
//! their shape once at construction; weights travel alongside as a plain
//! slice so unweighted kernels never name a weight type.
//!
//! The kernels assume `Aj[Ap[i]..Ap[i+1]]` lists the neighbors of `i`,
//! tolerate self-loops (most skip `j == i` explicitly), and require
//! symmetry for the independent-set, coloring, and traversal guarantees.
//! Neither symmetry nor `Aj` range membership is checked here; that is
//! the caller's contract.

use crate::error::{KernelError, Result};
use crate::scalar::{VertexId, Weight};

use alloc::vec::Vec;
use core::ops::Range;

/// A read-only CSR adjacency structure.
///
/// Construction checks only the offset-sequence shape: length, zero
/// origin, monotonicity, and agreement with the edge count. Everything
/// else is bounds-implicit.
#[derive(Clone, Copy, Debug)]
pub struct CsrView<'a, I: VertexId> {
    n: usize,
    ap: &'a [I],
    aj: &'a [I],
}

impl<'a, I: VertexId> CsrView<'a, I> {
    /// Borrow `(Ap, Aj)` as a CSR view over `ap.len() - 1` vertices.
    pub fn new(ap: &'a [I], aj: &'a [I]) -> Result<Self> {
        if ap.is_empty() {
            return Err(KernelError::InvalidCsr("row pointers must have length n + 1"));
        }
        if ap[0] != I::ZERO {
            return Err(KernelError::InvalidCsr("row pointers must start at zero"));
        }
        if ap.windows(2).any(|w| w[1] < w[0]) {
            return Err(KernelError::InvalidCsr("row pointers must be non-decreasing"));
        }
        let n = ap.len() - 1;
        if ap[n].to_usize() != aj.len() {
            return Err(KernelError::InvalidCsr(
                "final row pointer must equal the column-index count",
            ));
        }
        Ok(Self { n, ap, aj })
    }

    /// Number of vertices `n`.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.n
    }

    /// Number of stored edges `nnz` (directed entries, so an undirected
    /// edge counts twice).
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.aj.len()
    }

    /// The edge-index window `Ap[i]..Ap[i+1]` of vertex `i`, usable to
    /// address both `Aj` and a parallel weight slice.
    #[inline]
    pub fn row_range(&self, i: usize) -> Range<usize> {
        self.ap[i].to_usize()..self.ap[i + 1].to_usize()
    }

    /// The neighbor list of vertex `i`.
    #[inline]
    pub fn row(&self, i: usize) -> &'a [I] {
        &self.aj[self.row_range(i)]
    }

    /// Out-degree of vertex `i`, counting self-loops.
    #[inline]
    pub fn degree(&self, i: usize) -> usize {
        self.row_range(i).len()
    }

    /// The raw column-index array.
    #[inline]
    pub fn col_indices(&self) -> &'a [I] {
        self.aj
    }
}

/// An owned, symmetric CSR matrix assembled from an edge list.
///
/// This is convenience scaffolding for tests, demos, and the FFI layer;
/// the kernels themselves only ever see the borrowed [`CsrView`].
/// Duplicate edges collapse to the most recently listed weight, and each
/// row's neighbors are stored in ascending index order.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Csr<I: VertexId, T: Weight> {
    ap: Vec<I>,
    aj: Vec<I>,
    ax: Vec<T>,
}

impl<I: VertexId, T: Weight> Csr<I, T> {
    /// Assemble a symmetric CSR matrix over `n` vertices from undirected
    /// `(u, v, w)` edges. Self-loops are stored once.
    pub fn from_edges(n: usize, edges: &[(usize, usize, T)]) -> Result<Self> {
        let mut dedup: hashbrown::HashMap<(usize, usize), T> =
            hashbrown::HashMap::with_capacity(edges.len() * 2);
        for &(u, v, w) in edges {
            if u >= n || v >= n {
                return Err(KernelError::InvalidCsr("edge endpoint out of range"));
            }
            dedup.insert((u, v), w);
            dedup.insert((v, u), w);
        }

        let mut entries: Vec<((usize, usize), T)> = dedup.into_iter().collect();
        entries.sort_unstable_by_key(|&((u, v), _)| (u, v));

        let mut ap = Vec::with_capacity(n + 1);
        let mut aj = Vec::with_capacity(entries.len());
        let mut ax = Vec::with_capacity(entries.len());
        ap.push(I::ZERO);
        let mut row = 0usize;
        for &((u, v), w) in &entries {
            while row < u {
                ap.push(I::from_usize(aj.len()));
                row += 1;
            }
            aj.push(I::from_usize(v));
            ax.push(w);
        }
        while row < n {
            ap.push(I::from_usize(aj.len()));
            row += 1;
        }
        debug_assert_eq!(ap.len(), n + 1);

        Ok(Self { ap, aj, ax })
    }

    /// Borrow the structural arrays as a [`CsrView`].
    pub fn view(&self) -> CsrView<'_, I> {
        // Shape is valid by construction.
        CsrView {
            n: self.ap.len() - 1,
            ap: &self.ap,
            aj: &self.aj,
        }
    }

    /// The edge-weight array, parallel to the column indices.
    pub fn weights(&self) -> &[T] {
        &self.ax
    }

    /// Number of vertices `n`.
    pub fn num_vertices(&self) -> usize {
        self.ap.len() - 1
    }
}
