//! Breadth-first traversal and connected components.
//!
//! Both kernels treat the CSR structure as an undirected adjacency (the
//! usual symmetry contract) and use `-1` as the "unvisited" marker. No
//! recursion anywhere: component labeling runs on an explicit stack so
//! million-vertex graphs cannot exhaust the call stack.

use crate::csr::CsrView;
use crate::error::{check_len, KernelError, Result};
use crate::scalar::VertexId;

use alloc::vec;
use alloc::vec::Vec;

/// Level-set breadth-first traversal from `seed`.
///
/// `level` must arrive pre-filled with `-1`; on return `level[j]` is the
/// unweighted shortest-path distance from the seed for every reached
/// vertex, and the first `reached` entries of `order` list the reached
/// vertices in BFS discovery order. Unreached vertices keep `level == -1`
/// and never appear in `order`. Returns the reached count.
pub fn bfs<I: VertexId>(
    g: &CsrView<'_, I>,
    seed: usize,
    order: &mut [I],
    level: &mut [I],
) -> Result<usize> {
    let n = g.num_vertices();
    check_len("order", order, n)?;
    check_len("level", level, n)?;
    if seed >= n {
        return Err(KernelError::SeedOutOfRange {
            seed: seed as i64,
            n,
        });
    }

    order[0] = I::from_usize(seed);
    level[seed] = I::ZERO;
    let mut reached = 1usize;

    let mut window = 0..1usize;
    let mut current_level = I::ONE;
    while !window.is_empty() {
        for ii in window.clone() {
            let i = order[ii].to_usize();
            for &nbr in g.row(i) {
                let j = nbr.to_usize();
                if level[j] == I::NEG_ONE {
                    order[reached] = nbr;
                    reached += 1;
                    level[j] = current_level;
                }
            }
        }
        window = window.end..reached;
        current_level = current_level + I::ONE;
    }
    Ok(reached)
}

/// Label connected components with ids `0..k`; returns `k`.
///
/// Vertices are scanned in ascending order; each unlabeled one opens a
/// new component and floods it depth-first with an explicit stack, so
/// component ids are ordered by their smallest member.
pub fn connected_components<I: VertexId>(g: &CsrView<'_, I>, components: &mut [I]) -> Result<I> {
    let n = g.num_vertices();
    check_len("components", components, n)?;

    components.fill(I::NEG_ONE);
    let mut stack: Vec<usize> = Vec::new();
    let mut component = I::ZERO;
    for i in 0..n {
        if components[i] != I::NEG_ONE {
            continue;
        }
        components[i] = component;
        stack.push(i);
        while let Some(top) = stack.pop() {
            for &nbr in g.row(top) {
                let j = nbr.to_usize();
                if components[j] == I::NEG_ONE {
                    components[j] = component;
                    stack.push(j);
                }
            }
        }
        component = component + I::ONE;
    }
    Ok(component)
}

/// Find a pseudo-peripheral vertex by repeated sweeps from `seed`.
///
/// Each sweep runs a BFS and jumps to a minimum-degree vertex of the
/// deepest level; the walk stops once the eccentricity estimate stops
/// growing. Returns the final vertex together with its BFS depth, a
/// lower bound on the graph's diameter. Useful for picking traversal
/// seeds that produce long, thin level structures.
pub fn pseudo_peripheral_node<I: VertexId>(g: &CsrView<'_, I>, seed: usize) -> Result<(I, usize)> {
    let n = g.num_vertices();
    if seed >= n {
        return Err(KernelError::SeedOutOfRange {
            seed: seed as i64,
            n,
        });
    }

    let mut order: Vec<I> = vec![I::ZERO; n];
    let mut level: Vec<I> = vec![I::NEG_ONE; n];

    let mut x = seed;
    let mut depth = 0usize;
    loop {
        level.fill(I::NEG_ONE);
        let reached = bfs(g, x, &mut order, &mut level)?;

        let deepest = order[..reached]
            .iter()
            .map(|&v| level[v.to_usize()].to_usize())
            .max()
            .unwrap_or(0);
        if deepest <= depth && x != seed {
            return Ok((I::from_usize(x), depth));
        }
        if deepest == 0 {
            // Isolated seed: it is its own periphery.
            return Ok((I::from_usize(x), 0));
        }

        // Min-degree vertex of the last level, smallest index on ties.
        let mut best = None;
        for i in 0..n {
            if level[i] != I::NEG_ONE && level[i].to_usize() == deepest {
                let d = g.degree(i);
                match best {
                    Some((_, bd)) if bd <= d => {}
                    _ => best = Some((i, d)),
                }
            }
        }
        depth = deepest;
        x = best.map(|(i, _)| i).unwrap_or(x);
    }
}
