//! Maximal independent sets over a CSR graph.
//!
//! Three kernels share one state convention: vertex state lives in a
//! caller-owned integer array `x`, and only vertices holding the caller's
//! `active` value participate. On return every formerly-active vertex
//! holds either the `selected` value (in the MIS) or the `rejected` value
//! (dominated by a selected neighbor). The sentinel values are parameters
//! precisely so the coloring kernels can nest MIS rounds inside partially
//! colored arrays without the states colliding.
//!
//! Symmetry of the adjacency structure is required for the independence
//! guarantee and is not checked.

use crate::csr::CsrView;
use crate::error::{check_len, Result};
use crate::scalar::{VertexId, Weight};

use alloc::vec;
use alloc::vec::Vec;
use core::mem;

/// Outcome of examining one active vertex during a Luby round.
enum Examined {
    /// Outranks every active neighbor and joins the set.
    Promote,
    /// Has a selected neighbor; permanently dominated.
    Demote,
    /// Outranked by an active neighbor; tries again next round.
    Defer,
}

/// Greedy serial maximal independent set (ascending vertex order).
///
/// Every vertex with `x[i] == active` is visited in index order: it is
/// promoted to `selected` and its still-active neighbors are demoted to
/// `rejected`. Returns the number of promoted vertices.
///
/// The result is independent (no two selected vertices adjacent among the
/// originally active ones) and maximal with respect to the greedy order.
pub fn mis_serial<I: VertexId>(
    g: &CsrView<'_, I>,
    active: I,
    selected: I,
    rejected: I,
    x: &mut [I],
) -> Result<usize> {
    let n = g.num_vertices();
    check_len("x", x, n)?;

    let mut count = 0;
    for i in 0..n {
        if x[i] != active {
            continue;
        }
        x[i] = selected;
        count += 1;
        for &nbr in g.row(i) {
            let j = nbr.to_usize();
            if x[j] == active {
                x[j] = rejected;
            }
        }
    }
    Ok(count)
}

/// Luby-style randomized maximal independent set.
///
/// Each round sweeps the active vertices in ascending order. A vertex
/// with a selected neighbor anywhere in its row is demoted outright.
/// Otherwise it compares its priority pair `(y[i], i)` against every
/// active neighbor; `y` decides, and on equal `y` the **larger index
/// wins**. A vertex that outranks its whole active neighborhood is
/// promoted and demotes those neighbors; anything else stays active for
/// a later round.
///
/// The sweep order and the in-row edge order are part of the contract:
/// on equal `y` the outcome is reproducible, never dependent on
/// comparison reordering.
///
/// Rounds continue until no active vertex remains, or until `max_iters`
/// rounds have run (`None` = unbounded). Returns the promoted count.
pub fn mis_parallel<I: VertexId, T: Weight>(
    g: &CsrView<'_, I>,
    active: I,
    selected: I,
    rejected: I,
    x: &mut [I],
    y: &[T],
    max_iters: Option<usize>,
) -> Result<usize> {
    let n = g.num_vertices();
    check_len("x", x, n)?;
    check_len("y", y, n)?;

    let mut count = 0;
    let mut rounds = 0usize;
    loop {
        for i in 0..n {
            if x[i] != active {
                continue;
            }

            // A selected neighbor anywhere in the row demotes `i`
            // unconditionally; only when no such neighbor exists does the
            // outrank comparison decide. The scan must not stop at an
            // outranking active neighbor, or a selected one later in the
            // row would be missed.
            let mut outcome = Examined::Promote;
            for &nbr in g.row(i) {
                let j = nbr.to_usize();
                if x[j] == selected {
                    outcome = Examined::Demote;
                    break;
                }
                if matches!(outcome, Examined::Promote)
                    && x[j] == active
                    && (y[j] > y[i] || (y[j] == y[i] && j > i))
                {
                    outcome = Examined::Defer;
                }
            }

            match outcome {
                Examined::Demote => x[i] = rejected,
                Examined::Defer => {}
                Examined::Promote => {
                    x[i] = selected;
                    count += 1;
                    for &nbr in g.row(i) {
                        let j = nbr.to_usize();
                        if x[j] == active {
                            x[j] = rejected;
                        }
                    }
                }
            }
        }

        rounds += 1;
        if !x.iter().any(|&v| v == active) {
            break;
        }
        if let Some(cap) = max_iters {
            if rounds >= cap {
                break;
            }
        }
    }
    log::trace!("luby mis: {} promoted in {} round(s)", count, rounds);
    Ok(count)
}

/// One step of neighborhood max-propagation.
///
/// For every vertex the output `(key, value)` pair is the argmax over the
/// closed neighborhood (the vertex's own entry participates), with the
/// value as primary criterion and the **larger key** breaking ties.
/// Double-buffered: `k` successive applications leave each vertex holding
/// the winner of its `k`-ball.
pub fn propagate_max<I: VertexId, T: Weight>(
    g: &CsrView<'_, I>,
    i_keys: &[I],
    o_keys: &mut [I],
    i_vals: &[T],
    o_vals: &mut [T],
) -> Result<()> {
    let n = g.num_vertices();
    check_len("i_keys", i_keys, n)?;
    check_len("o_keys", o_keys, n)?;
    check_len("i_vals", i_vals, n)?;
    check_len("o_vals", o_vals, n)?;

    for i in 0..n {
        let mut k_max = i_keys[i];
        let mut v_max = i_vals[i];
        for &nbr in g.row(i) {
            let j = nbr.to_usize();
            let (k, v) = (i_keys[j], i_vals[j]);
            if v > v_max || (v == v_max && k > k_max) {
                k_max = k;
                v_max = v;
            }
        }
        o_keys[i] = k_max;
        o_vals[i] = v_max;
    }
    Ok(())
}

/// Distance-`k` maximal independent set via repeated max-propagation.
///
/// On return `x[i] == 1` marks the chosen vertices and `x[i] == 0` the
/// rest; any two chosen vertices are more than `k` edges apart, and every
/// vertex lies within `k` edges of a chosen one (for connected graphs and
/// unbounded iterations).
///
/// `y` supplies the per-vertex priorities and should be non-negative:
/// retired vertices are re-marked with value `-1` so they can never win a
/// propagation round. Ties on `y` resolve toward the larger vertex index,
/// as in [`mis_parallel`].
pub fn mis_k_parallel<I: VertexId, T: Weight>(
    g: &CsrView<'_, I>,
    k: usize,
    x: &mut [I],
    y: &[T],
    max_iters: Option<usize>,
) -> Result<()> {
    let n = g.num_vertices();
    check_len("x", x, n)?;
    check_len("y", y, n)?;

    let mut active = vec![true; n];
    let mut i_keys: Vec<I> = (0..n).map(I::from_usize).collect();
    let mut o_keys = i_keys.clone();
    let mut i_vals: Vec<T> = y.to_vec();
    let mut o_vals = i_vals.clone();

    x.fill(I::ZERO);

    let mut rounds = 0usize;
    loop {
        // Winner of each k-ball, by (value, key).
        for _ in 0..k {
            propagate_max(g, &i_keys, &mut o_keys, &i_vals, &mut o_vals)?;
            mem::swap(&mut i_keys, &mut o_keys);
            mem::swap(&mut i_vals, &mut o_vals);
        }

        // A vertex that wins its own ball joins the set.
        for i in 0..n {
            if active[i] && i_keys[i].to_usize() == i {
                x[i] = I::ONE;
            }
        }

        // Flood the membership flags back out k steps so every vertex
        // learns whether a chosen vertex sits within its k-ball.
        for i in 0..n {
            i_keys[i] = I::from_usize(i);
            i_vals[i] = if x[i] == I::ONE { T::ONE } else { T::ZERO };
        }
        for _ in 0..k {
            propagate_max(g, &i_keys, &mut o_keys, &i_vals, &mut o_vals)?;
            mem::swap(&mut i_keys, &mut o_keys);
            mem::swap(&mut i_vals, &mut o_vals);
        }

        // Retire covered vertices; rearm the rest with their priority.
        let mut work_left = false;
        for i in 0..n {
            i_keys[i] = I::from_usize(i);
            if i_vals[i] == T::ONE {
                active[i] = false;
                i_vals[i] = T::NEG_ONE;
            } else {
                i_vals[i] = y[i];
                if active[i] {
                    work_left = true;
                }
            }
        }

        rounds += 1;
        if !work_left {
            break;
        }
        if let Some(cap) = max_iters {
            if rounds >= cap {
                break;
            }
        }
    }
    log::trace!("mis-k (k={}): finished after {} outer round(s)", k, rounds);
    Ok(())
}
