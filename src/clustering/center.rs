//! Exact graph center of a single cluster.
//!
//! Runs Floyd–Warshall on the dense all-pairs matrix of one cluster's
//! members, using only edges that stay inside the cluster, and returns
//! the member of minimum eccentricity. The scratch matrix is `N × N` for
//! an `N`-member cluster, so cost is O(N³) time and O(N²) space; callers
//! keep clusters small.

use crate::clustering::incidence::ClusterIncidence;
use crate::csr::CsrView;
use crate::error::{check_len, KernelError, Result};
use crate::scalar::{VertexId, Weight};

use alloc::vec;

/// Return the global index of the graph center of cluster `a`.
///
/// The center is the member minimizing the maximum intra-cluster
/// shortest-path distance to any other member; ties resolve to the
/// smallest local index (which, given the incidence ordering, is the
/// largest global id among the tied members). The cluster must be
/// internally connected: an unreachable member pair is a precondition
/// error, not a silent result.
pub fn cluster_center<I: VertexId, T: Weight>(
    g: &CsrView<'_, I>,
    ax: &[T],
    cm: &[I],
    a: usize,
    inc: &ClusterIncidence<I>,
) -> Result<I> {
    let n = g.num_vertices();
    check_len("ax", ax, g.num_edges())?;
    check_len("cm", cm, n)?;
    if a >= inc.num_clusters() {
        return Err(KernelError::LabelOutOfRange {
            label: a as i64,
            k: inc.num_clusters(),
        });
    }

    let members = inc.cluster(a);
    let nn = members.len();

    // Dense intra-cluster distance matrix, row-major over local indices.
    let mut dist = vec![T::MAX_FINITE; nn * nn];
    for (m, &gi) in members.iter().enumerate() {
        let i = gi.to_usize();
        for jj in g.row_range(i) {
            let j = g.col_indices()[jj].to_usize();
            if cm[j] == cm[i] {
                dist[m * nn + inc.local_index(j)] = ax[jj];
            }
        }
        dist[m * nn + m] = T::ZERO;
    }

    // Floyd-Warshall, intermediate vertex outermost.
    for l in 0..nn {
        for m in 0..nn {
            let d_ml = dist[m * nn + l];
            if d_ml == T::MAX_FINITE {
                continue;
            }
            for q in 0..nn {
                let d_lq = dist[l * nn + q];
                if d_lq == T::MAX_FINITE {
                    continue;
                }
                let through = d_ml + d_lq;
                if through < dist[m * nn + q] {
                    dist[m * nn + q] = through;
                }
            }
        }
    }

    if dist.iter().any(|&d| d == T::MAX_FINITE) {
        return Err(KernelError::DisconnectedCluster { cluster: a });
    }

    let mut best_local = 0usize;
    let mut best_ecc = T::MAX_FINITE;
    for m in 0..nn {
        let mut ecc = T::ZERO;
        for q in 0..nn {
            let d = dist[m * nn + q];
            if d > ecc {
                ecc = d;
            }
        }
        if ecc < best_ecc {
            best_ecc = ecc;
            best_local = m;
        }
    }
    Ok(members[best_local])
}
