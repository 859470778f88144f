//! Vertex coloring built from repeated independent-set rounds.
//!
//! All three variants write colors into a caller-owned array `x`,
//! starting from `-1` everywhere. The serial variant peels maximal
//! independent sets with shifted sentinels; the two parallel variants run
//! one Luby round per color and then compact with a first-fit pass.
//! Validity (`x[i] != x[j]` across every edge `i != j`) relies on a
//! symmetric adjacency structure.

use crate::csr::CsrView;
use crate::error::{check_len, Result};
use crate::mis::{mis_parallel, mis_serial};
use crate::scalar::{VertexId, Weight};

use alloc::vec;
use alloc::vec::Vec;

/// Lower every vertex currently at color `k` to the smallest color its
/// neighborhood leaves free.
///
/// For each vertex with `x[i] == k` a `k`-entry mask records the colors
/// of its neighbors (`x[j] >= 0`, `j != i`); the vertex takes the
/// smallest unused color, or keeps `k` when the neighborhood already
/// uses every smaller one. The maximum color in `x` never increases.
pub fn first_fit<I: VertexId>(g: &CsrView<'_, I>, x: &mut [I], k: I) -> Result<()> {
    let n = g.num_vertices();
    check_len("x", x, n)?;

    let colors = k.to_usize();
    let mut mask = vec![false; colors];
    for i in 0..n {
        if x[i] != k {
            continue;
        }
        mask.fill(false);
        for &nbr in g.row(i) {
            let j = nbr.to_usize();
            if j == i {
                continue;
            }
            if x[j] >= I::ZERO && x[j] < k {
                mask[x[j].to_usize()] = true;
            }
        }
        if let Some(free) = mask.iter().position(|&used| !used) {
            x[i] = I::from_usize(free);
        }
    }
    Ok(())
}

/// Serial MIS-peeling coloring. Returns the number of colors used.
///
/// Color `K` is the greedy maximal independent set of the vertices still
/// uncolored after rounds `0..K`. The round-`K` sentinels are shifted to
/// `A = -1-K`, `F = -2-K` so they can never collide with colors already
/// written into the same array; the vertices a round rejects re-enter as
/// the next round's active value.
pub fn vertex_coloring_mis<I: VertexId>(g: &CsrView<'_, I>, x: &mut [I]) -> Result<I> {
    let n = g.num_vertices();
    check_len("x", x, n)?;

    x.fill(I::NEG_ONE);
    let mut colored = 0usize;
    let mut k = I::ZERO;
    while colored < n {
        let active = I::NEG_ONE - k;
        let rejected = I::NEG_TWO - k;
        colored += mis_serial(g, active, k, rejected, x)?;
        k = k + I::ONE;
    }
    log::debug!("mis coloring: {} vertices, {:?} colors", n, k);
    Ok(k)
}

/// Jones–Plassmann coloring. Returns the highest color assigned.
///
/// `z` carries caller-supplied random priorities; each vertex's degree is
/// folded in before the first round so that ties on the random component
/// break toward high-degree vertices. Every round runs **one** Luby
/// sweep over the uncolored vertices at color `K`, reverts that round's
/// rejections back to uncolored, then first-fits the fresh color-`K`
/// vertices downward.
pub fn vertex_coloring_jones_plassmann<I: VertexId, T: Weight>(
    g: &CsrView<'_, I>,
    x: &mut [I],
    z: &mut [T],
) -> Result<I> {
    let n = g.num_vertices();
    check_len("x", x, n)?;
    check_len("z", z, n)?;

    x.fill(I::NEG_ONE);
    for i in 0..n {
        z[i] = z[i] + T::from_usize(g.degree(i));
    }

    let mut colored = 0usize;
    let mut k = I::ZERO;
    while colored < n {
        colored += mis_parallel(g, I::NEG_ONE, k, I::NEG_TWO, x, z, Some(1))?;
        for state in x.iter_mut() {
            if *state == I::NEG_TWO {
                *state = I::NEG_ONE;
            }
        }
        first_fit(g, x, k)?;
        k = k + I::ONE;
    }
    log::debug!("jones-plassmann: {} vertices in {:?} rounds", n, k);
    Ok(x.iter().copied().max().unwrap_or(I::NEG_ONE))
}

/// Largest-degree-first coloring. Returns the highest color assigned.
///
/// Identical round structure to [`vertex_coloring_jones_plassmann`], but
/// the priorities are recomputed before every round as the caller's
/// random component plus the vertex's number of still-uncolored
/// neighbors (self excluded), so the contested part of the graph drives
/// each round's independent set.
pub fn vertex_coloring_ldf<I: VertexId, T: Weight>(
    g: &CsrView<'_, I>,
    x: &mut [I],
    y: &[T],
) -> Result<I> {
    let n = g.num_vertices();
    check_len("x", x, n)?;
    check_len("y", y, n)?;

    x.fill(I::NEG_ONE);
    let mut weights: Vec<T> = vec![T::ZERO; n];

    let mut colored = 0usize;
    let mut k = I::ZERO;
    while colored < n {
        for i in 0..n {
            if x[i] != I::NEG_ONE {
                continue;
            }
            let mut uncolored = 0usize;
            for &nbr in g.row(i) {
                let j = nbr.to_usize();
                if j != i && x[j] == I::NEG_ONE {
                    uncolored += 1;
                }
            }
            weights[i] = y[i] + T::from_usize(uncolored);
        }

        colored += mis_parallel(g, I::NEG_ONE, k, I::NEG_TWO, x, &weights, Some(1))?;
        for state in x.iter_mut() {
            if *state == I::NEG_TWO {
                *state = I::NEG_ONE;
            }
        }
        first_fit(g, x, k)?;
        k = k + I::ONE;
    }
    log::debug!("ldf coloring: {} vertices in {:?} rounds", n, k);
    Ok(x.iter().copied().max().unwrap_or(I::NEG_ONE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csr::Csr;

    fn complete4() -> Csr<i32, f64> {
        let mut edges = Vec::new();
        for u in 0..4usize {
            for v in (u + 1)..4 {
                edges.push((u, v, 1.0));
            }
        }
        Csr::from_edges(4, &edges).unwrap()
    }

    fn assert_proper<IFn: Fn(usize) -> i32>(g: &CsrView<'_, i32>, color: IFn) {
        for i in 0..g.num_vertices() {
            assert!(color(i) >= 0, "vertex {} left uncolored", i);
            for &j in g.row(i) {
                if j as usize != i {
                    assert_ne!(color(i), color(j as usize), "edge {}-{} monochrome", i, j);
                }
            }
        }
    }

    #[test]
    fn mis_peeling_colors_k4_with_four_colors() {
        let m = complete4();
        let mut x = [0i32; 4];
        let k = vertex_coloring_mis(&m.view(), &mut x).unwrap();
        assert_eq!(k, 4);
        assert_proper(&m.view(), |i| x[i]);
        let mut seen = x;
        seen.sort_unstable();
        assert_eq!(seen, [0, 1, 2, 3]);
    }

    #[test]
    fn mis_peeling_path_uses_two_colors() {
        let m: Csr<i32, f64> =
            Csr::from_edges(5, &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (3, 4, 1.0)]).unwrap();
        let mut x = [0i32; 5];
        let k = vertex_coloring_mis(&m.view(), &mut x).unwrap();
        assert_eq!(k, 2);
        assert_eq!(x, [0, 1, 0, 1, 0]);
    }

    #[test]
    fn first_fit_never_raises_the_max_color() {
        let m = complete4();
        let g = m.view();
        let mut x = [0, 1, 2, 3];
        first_fit(&g, &mut x, 3).unwrap();
        // K4 at color 3 has all lower colors taken: stays put.
        assert_eq!(x, [0, 1, 2, 3]);

        // A path vertex wastefully at color 2 drops to 0.
        let p: Csr<i32, f64> = Csr::from_edges(3, &[(0, 1, 1.0), (1, 2, 1.0)]).unwrap();
        let mut x = [1, 0, 2];
        first_fit(&p.view(), &mut x, 2).unwrap();
        assert_eq!(x, [1, 0, 1]);
    }

    #[test]
    fn jones_plassmann_produces_proper_coloring() {
        let m = complete4();
        let g = m.view();
        let mut x = [0i32; 4];
        let mut z = [0.4, 0.1, 0.8, 0.3];
        let max_color = vertex_coloring_jones_plassmann(&g, &mut x, &mut z).unwrap();
        assert_proper(&g, |i| x[i]);
        assert_eq!(max_color, *x.iter().max().unwrap());
        assert_eq!(max_color, 3);
    }

    #[test]
    fn ldf_produces_proper_coloring_on_star_plus_edge() {
        // Star center 0 with leaves 1..4, plus edge 3-4.
        let m: Csr<i32, f64> = Csr::from_edges(
            5,
            &[(0, 1, 1.0), (0, 2, 1.0), (0, 3, 1.0), (0, 4, 1.0), (3, 4, 1.0)],
        )
        .unwrap();
        let g = m.view();
        let mut x = [0i32; 5];
        let y = [0.2, 0.9, 0.6, 0.4, 0.7];
        let max_color = vertex_coloring_ldf(&g, &mut x, &y).unwrap();
        assert_proper(&g, |i| x[i]);
        assert!(max_color <= 2, "ldf used too many colors: {:?}", x);
    }

    #[test]
    fn coloring_handles_graph_without_edges() {
        let m: Csr<i32, f64> = Csr::from_edges(3, &[]).unwrap();
        let g = m.view();
        let mut x = [0i32; 3];
        let k = vertex_coloring_mis(&g, &mut x).unwrap();
        assert_eq!(k, 1);
        assert_eq!(x, [0, 0, 0]);

        let mut x = [0i32; 3];
        let mut z = [0.5, 0.2, 0.7];
        let max_color = vertex_coloring_jones_plassmann(&g, &mut x, &mut z).unwrap();
        assert_eq!(max_color, 0);
    }
}
