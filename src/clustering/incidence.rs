//! Cluster→member incidence index.
//!
//! Inverts a per-vertex cluster label array into CSC-style offsets plus a
//! local-index map, so per-cluster kernels can translate between global
//! vertex ids and dense per-cluster matrix coordinates.

use crate::error::{KernelError, Result};
use crate::scalar::VertexId;

use alloc::vec;
use alloc::vec::Vec;

/// Cluster membership index built from a label array.
///
/// For `n` vertices in `k` clusters:
///
/// - `icp` (length `k + 1`): offsets into `ici`, one block per cluster in
///   ascending label order, `icp[0] == 0`, `icp[k] == n`;
/// - `ici` (length `n`): the vertex ids, grouped by cluster; **within
///   each block the ids are sorted descending**; callers rely on this
///   order and the tests pin it;
/// - `local` (length `n`): position of each vertex inside its block, so
///   `ici[icp[cm[i]] + local[i]] == i` for every vertex `i`.
///
/// Every cluster label in `[0, k)` must own at least one vertex.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClusterIncidence<I: VertexId> {
    icp: Vec<I>,
    ici: Vec<I>,
    local: Vec<I>,
}

impl<I: VertexId> ClusterIncidence<I> {
    /// Build the incidence index for `num_clusters` clusters from the
    /// label array `cm`.
    pub fn build(cm: &[I], num_clusters: usize) -> Result<Self> {
        let n = cm.len();
        for &label in cm {
            if label < I::ZERO || label.to_usize() >= num_clusters {
                return Err(KernelError::LabelOutOfRange {
                    label: if label < I::ZERO { -1 } else { label.to_usize() as i64 },
                    k: num_clusters,
                });
            }
        }
        if n == 0 && num_clusters > 0 {
            return Err(KernelError::EmptyCluster { cluster: 0 });
        }

        let mut ici: Vec<I> = (0..n).map(I::from_usize).collect();
        ici.sort_unstable_by(|&a, &b| {
            cm[a.to_usize()]
                .cmp(&cm[b.to_usize()])
                .then_with(|| b.cmp(&a))
        });

        let mut icp: Vec<I> = vec![I::ZERO; num_clusters + 1];
        let mut block = 0usize;
        for pos in 0..n {
            let label = cm[ici[pos].to_usize()].to_usize();
            let prev = if pos == 0 {
                0
            } else {
                cm[ici[pos - 1].to_usize()].to_usize()
            };
            if pos == 0 || label != prev {
                // A skipped label means some cluster has no members.
                let expected = if pos == 0 { 0 } else { prev + 1 };
                if label != expected {
                    return Err(KernelError::EmptyCluster { cluster: expected });
                }
                block = label;
                icp[block] = I::from_usize(pos);
            }
        }
        if num_clusters > 0 && block + 1 != num_clusters {
            return Err(KernelError::EmptyCluster { cluster: block + 1 });
        }
        icp[num_clusters] = I::from_usize(n);

        let mut local: Vec<I> = vec![I::ZERO; n];
        for a in 0..num_clusters {
            let start = icp[a].to_usize();
            let end = icp[a + 1].to_usize();
            for m in 0..(end - start) {
                local[ici[start + m].to_usize()] = I::from_usize(m);
            }
        }

        Ok(Self { icp, ici, local })
    }

    /// Number of clusters `k`.
    pub fn num_clusters(&self) -> usize {
        self.icp.len() - 1
    }

    /// The member vertices of cluster `a`, in descending id order.
    pub fn cluster(&self, a: usize) -> &[I] {
        &self.ici[self.icp[a].to_usize()..self.icp[a + 1].to_usize()]
    }

    /// The local index of vertex `i` inside its cluster's block.
    pub fn local_index(&self, i: usize) -> usize {
        self.local[i].to_usize()
    }

    /// The raw offset array (`k + 1` entries).
    pub fn offsets(&self) -> &[I] {
        &self.icp
    }

    /// The raw grouped vertex array (`n` entries).
    pub fn members(&self) -> &[I] {
        &self.ici
    }
}
