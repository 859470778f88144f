//! Bellman–Ford relaxation sweeps and the two Lloyd clustering passes.
//!
//! Distances and cluster labels live in caller-owned arrays `d` and `cm`;
//! seeds arrive as one global vertex id per cluster in `c`. A Lloyd pass
//! assigns every vertex to its nearest seed and then moves each seed to a
//! more central vertex of its cluster, approximately (distance to the
//! cluster boundary) or exactly (dense graph-center per cluster). The
//! caller loops passes until the seeds stop moving.

use crate::clustering::center::cluster_center;
use crate::clustering::incidence::ClusterIncidence;
use crate::csr::CsrView;
use crate::error::{check_len, KernelError, Result};
use crate::scalar::{VertexId, Weight};

use alloc::vec;
use alloc::vec::Vec;

/// One Bellman–Ford relaxation sweep over all vertices.
///
/// For every vertex `i` and edge `(i, j)`, adopts `d[j] + Ax[ij]` and
/// `j`'s cluster label whenever that strictly improves `d[i]`. Sources at
/// `MAX_FINITE` are skipped, so "infinity plus a weight" is never formed.
/// A single call is one sweep; convergence is the caller's loop.
pub fn bellman_ford<I: VertexId, T: Weight>(
    g: &CsrView<'_, I>,
    ax: &[T],
    d: &mut [T],
    cm: &mut [I],
) -> Result<()> {
    let n = g.num_vertices();
    check_len("ax", ax, g.num_edges())?;
    check_len("d", d, n)?;
    check_len("cm", cm, n)?;

    for i in 0..n {
        for jj in g.row_range(i) {
            let j = g.col_indices()[jj].to_usize();
            if d[j] == T::MAX_FINITE {
                continue;
            }
            let through = ax[jj] + d[j];
            if through < d[i] {
                d[i] = through;
                cm[i] = cm[j];
            }
        }
    }
    Ok(())
}

/// Bellman–Ford with size-balancing, iterated internally to quiescence.
///
/// Besides the strict relaxation of [`bellman_ford`], a vertex defects to
/// an equally distant neighbor's cluster when that cluster would still be
/// strictly smaller than its own after the move, provided the vertex is
/// not currently the predecessor of any other vertex (moving it would cut
/// the path its dependents relaxed through). Predecessor links and
/// cluster sizes are maintained across switches.
///
/// Sweeps repeat until none changes anything. The pass is capped at `n³`
/// sweeps; hitting the cap reports [`KernelError::SweepCapExceeded`]
/// instead of spinning on pathological weight patterns.
pub fn bellman_ford_balanced<I: VertexId, T: Weight>(
    g: &CsrView<'_, I>,
    ax: &[T],
    d: &mut [T],
    cm: &mut [I],
    num_clusters: usize,
) -> Result<()> {
    let n = g.num_vertices();
    check_len("ax", ax, g.num_edges())?;
    check_len("d", d, n)?;
    check_len("cm", cm, n)?;

    let mut sizes = vec![0usize; num_clusters];
    for &label in cm.iter() {
        if label >= I::ZERO {
            let a = label.to_usize();
            if a >= num_clusters {
                return Err(KernelError::LabelOutOfRange {
                    label: a as i64,
                    k: num_clusters,
                });
            }
            sizes[a] += 1;
        }
    }

    let mut pred: Vec<I> = vec![I::NEG_ONE; n];
    let mut pred_count: Vec<usize> = vec![0usize; n];

    let cap = n.saturating_mul(n).saturating_mul(n);
    let mut sweeps = 0usize;
    loop {
        let mut changed = false;
        for i in 0..n {
            for jj in g.row_range(i) {
                let j = g.col_indices()[jj].to_usize();
                if d[j] == T::MAX_FINITE || cm[j] < I::ZERO {
                    continue;
                }
                let through = ax[jj] + d[j];

                let improves = through < d[i];
                let rebalances = !improves
                    && cm[i] >= I::ZERO
                    && through == d[i]
                    && sizes[cm[j].to_usize()] + 1 < sizes[cm[i].to_usize()]
                    && pred_count[i] == 0;
                if !(improves || rebalances) {
                    continue;
                }

                if cm[i] >= I::ZERO {
                    sizes[cm[i].to_usize()] -= 1;
                }
                sizes[cm[j].to_usize()] += 1;
                if pred[i] >= I::ZERO {
                    pred_count[pred[i].to_usize()] -= 1;
                }
                pred[i] = I::from_usize(j);
                pred_count[j] += 1;
                d[i] = through;
                cm[i] = cm[j];
                changed = true;
            }
        }

        sweeps += 1;
        if !changed {
            break;
        }
        if sweeps > cap {
            return Err(KernelError::SweepCapExceeded { cap });
        }
    }
    log::debug!("balanced bellman-ford quiesced after {} sweep(s)", sweeps);
    Ok(())
}

/// Validate seeds and initialize `d`/`cm` to the Lloyd starting state.
fn seed_distances<I: VertexId, T: Weight>(
    n: usize,
    d: &mut [T],
    cm: &mut [I],
    c: &[I],
) -> Result<()> {
    for &seed in c {
        if seed < I::ZERO || seed.to_usize() >= n {
            return Err(KernelError::SeedOutOfRange {
                seed: if seed < I::ZERO {
                    -1
                } else {
                    seed.to_usize() as i64
                },
                n,
            });
        }
    }
    d.fill(T::MAX_FINITE);
    cm.fill(I::NEG_ONE);
    for (a, &seed) in c.iter().enumerate() {
        d[seed.to_usize()] = T::ZERO;
        cm[seed.to_usize()] = I::from_usize(a);
    }
    Ok(())
}

/// Sweep [`bellman_ford`] until the distance array stops changing.
fn relax_to_fixpoint<I: VertexId, T: Weight>(
    g: &CsrView<'_, I>,
    ax: &[T],
    d: &mut [T],
    cm: &mut [I],
) -> Result<usize> {
    let mut passes = 0usize;
    loop {
        let before = d.to_vec();
        bellman_ford(g, ax, d, cm)?;
        passes += 1;
        if *d == *before {
            return Ok(passes);
        }
    }
}

/// One approximate Lloyd pass: nearest-seed assignment, then move each
/// seed to its cluster's most interior vertex.
///
/// After the outward propagation assigns clusters, the distance array is
/// repurposed: it is re-seeded with zeros on every vertex that touches a
/// different cluster and propagated inward, so `d[i]` becomes the
/// distance from `i` to its cluster's boundary. Each seed then jumps to
/// the member with the largest boundary distance seen so far: cheap, and
/// biased toward the interior rather than the exact center.
pub fn lloyd_cluster<I: VertexId, T: Weight>(
    g: &CsrView<'_, I>,
    ax: &[T],
    d: &mut [T],
    cm: &mut [I],
    c: &mut [I],
) -> Result<()> {
    let n = g.num_vertices();
    check_len("ax", ax, g.num_edges())?;
    check_len("d", d, n)?;
    check_len("cm", cm, n)?;
    seed_distances(n, d, cm, c)?;

    let outward = relax_to_fixpoint(g, ax, d, cm)?;

    // Re-seed the distances on the cluster boundaries.
    d.fill(T::MAX_FINITE);
    for i in 0..n {
        if g.row(i).iter().any(|&nbr| cm[nbr.to_usize()] != cm[i]) {
            d[i] = T::ZERO;
        }
    }

    let inward = relax_to_fixpoint(g, ax, d, cm)?;
    log::debug!(
        "lloyd pass: {} outward / {} inward propagation sweep(s)",
        outward,
        inward
    );

    // Walk each cluster toward its interior.
    for i in 0..n {
        if cm[i] < I::ZERO {
            continue;
        }
        let a = cm[i].to_usize();
        if d[c[a].to_usize()] < d[i] {
            c[a] = I::from_usize(i);
        }
    }
    Ok(())
}

/// One exact Lloyd pass: balanced nearest-seed assignment, then move each
/// seed to the true graph center of its cluster.
///
/// Assignment runs [`bellman_ford_balanced`] to convergence, the cluster
/// membership is inverted through [`ClusterIncidence`], and every cluster
/// gets the exact Floyd–Warshall center. Each new center must carry its
/// own cluster's label; anything else means the assignment state is
/// corrupt and is reported, not papered over.
pub fn lloyd_cluster_exact<I: VertexId, T: Weight>(
    g: &CsrView<'_, I>,
    ax: &[T],
    d: &mut [T],
    cm: &mut [I],
    c: &mut [I],
) -> Result<()> {
    let n = g.num_vertices();
    check_len("ax", ax, g.num_edges())?;
    check_len("d", d, n)?;
    check_len("cm", cm, n)?;
    seed_distances(n, d, cm, c)?;

    let num_clusters = c.len();
    bellman_ford_balanced(g, ax, d, cm, num_clusters)?;

    let inc = ClusterIncidence::build(cm, num_clusters)?;
    for a in 0..num_clusters {
        let center = cluster_center(g, ax, cm, a, &inc)?;
        if cm[center.to_usize()].to_usize() != a {
            return Err(KernelError::CenterOutsideCluster {
                cluster: a,
                center: center.to_usize(),
            });
        }
        c[a] = center;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csr::Csr;

    fn path5() -> Csr<i32, f64> {
        Csr::from_edges(5, &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (3, 4, 1.0)]).unwrap()
    }

    #[test]
    fn single_sweep_relaxes_one_frontier() {
        let m = path5();
        let mut d = [0.0, f64::MAX, f64::MAX, f64::MAX, f64::MAX];
        let mut cm = [0, -1, -1, -1, -1];
        bellman_ford(&m.view(), m.weights(), &mut d, &mut cm).unwrap();
        // The ascending sweep happens to carry the wave the whole way.
        assert_eq!(d, [0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(cm, [0, 0, 0, 0, 0]);
    }

    #[test]
    fn balanced_assignment_splits_the_path() {
        let m = path5();
        let mut d = [f64::MAX; 5];
        let mut cm = [-1i32; 5];
        d[0] = 0.0;
        cm[0] = 0;
        d[4] = 0.0;
        cm[4] = 1;
        bellman_ford_balanced(&m.view(), m.weights(), &mut d, &mut cm, 2).unwrap();
        assert_eq!(cm, [0, 0, 0, 1, 1]);
        assert_eq!(d, [0.0, 1.0, 2.0, 1.0, 0.0]);
    }

    #[test]
    fn equal_distance_defection_balances_sizes() {
        // 4-cycle 0-1-2-3 with seeds at opposite corners 0 and 3:
        // vertices 1 and 2 are equidistant; without the rebalance both
        // would join cluster 0 in sweep order.
        let m: Csr<i32, f64> = Csr::from_edges(
            4,
            &[(0, 1, 1.0), (0, 2, 1.0), (1, 3, 1.0), (2, 3, 1.0)],
        )
        .unwrap();
        let mut d = [0.0, f64::MAX, f64::MAX, 0.0];
        let mut cm = [0, -1, -1, 1];
        bellman_ford_balanced(&m.view(), m.weights(), &mut d, &mut cm, 2).unwrap();
        assert_eq!(cm, [0, 0, 1, 1]);
        assert_eq!(d, [0.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn defection_is_blocked_while_vertex_has_dependents() {
        // As above plus a tail 2-4-5: vertex 2 is vertex 4's predecessor,
        // so it may not defect back to the smaller cluster 0 even though
        // the sizes would justify it.
        let m: Csr<i32, f64> = Csr::from_edges(
            6,
            &[
                (0, 1, 1.0),
                (0, 2, 1.0),
                (1, 3, 1.0),
                (2, 3, 1.0),
                (2, 4, 1.0),
                (4, 5, 1.0),
            ],
        )
        .unwrap();
        let mut d = [0.0, f64::MAX, f64::MAX, 0.0, f64::MAX, f64::MAX];
        let mut cm = [0, -1, -1, 1, -1, -1];
        bellman_ford_balanced(&m.view(), m.weights(), &mut d, &mut cm, 2).unwrap();
        assert_eq!(cm, [0, 0, 1, 1, 1, 1]);
    }

    #[test]
    fn approximate_pass_pulls_seeds_into_the_interior() {
        let m = path5();
        let g = m.view();
        let mut d = [0.0f64; 5];
        let mut cm = [0i32; 5];
        let mut c = [0, 4];
        lloyd_cluster(&g, m.weights(), &mut d, &mut cm, &mut c).unwrap();
        assert_eq!(cm, [0, 0, 0, 1, 1]);
        // Boundary sits at 2-3; the most interior vertices are the ends.
        assert_eq!(c, [0, 4]);
        assert_eq!(d, [2.0, 1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn exact_pass_recenters_both_clusters() {
        let m = path5();
        let g = m.view();
        let mut d = [0.0f64; 5];
        let mut cm = [0i32; 5];
        let mut c = [0, 4];
        lloyd_cluster_exact(&g, m.weights(), &mut d, &mut cm, &mut c).unwrap();
        assert_eq!(cm, [0, 0, 0, 1, 1]);
        // Left cluster {0,1,2} centers on 1; right cluster {3,4} ties and
        // takes the smallest local index, which is the larger global id.
        assert_eq!(c, [1, 4]);
    }

    #[test]
    fn exact_pass_rejects_unreachable_vertices() {
        // Vertex 2 is disconnected from both seeds.
        let m: Csr<i32, f64> = Csr::from_edges(3, &[(0, 1, 1.0)]).unwrap();
        let mut d = [0.0f64; 3];
        let mut cm = [0i32; 3];
        let mut c = [0, 1];
        assert!(matches!(
            lloyd_cluster_exact(&m.view(), m.weights(), &mut d, &mut cm, &mut c),
            Err(KernelError::LabelOutOfRange { label: -1, .. })
        ));
    }

    #[test]
    fn seed_out_of_range_is_rejected_before_any_write() {
        let m = path5();
        let mut d = [0.0f64; 5];
        let mut cm = [0i32; 5];
        let mut c = [0, 9];
        assert!(matches!(
            lloyd_cluster(&m.view(), m.weights(), &mut d, &mut cm, &mut c),
            Err(KernelError::SeedOutOfRange { seed: 9, n: 5 })
        ));
    }

    #[test]
    fn integer_weights_propagate_without_overflow() {
        let m: Csr<i32, i64> =
            Csr::from_edges(4, &[(0, 1, 2), (1, 2, 2), (2, 3, 2)]).unwrap();
        let mut d = [0i64; 4];
        let mut cm = [0i32; 4];
        let mut c = [0, 3];
        lloyd_cluster_exact(&m.view(), m.weights(), &mut d, &mut cm, &mut c).unwrap();
        assert_eq!(cm, [0, 0, 1, 1]);
        assert_eq!(c, [1, 3]);
    }
}
