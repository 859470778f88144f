//! Python FFI bindings via PyO3.
//!
//! Exposes the kernels over plain Python lists with `i64` indices and
//! `f64` weights. For other index or weight widths, use the Rust API
//! directly.
//!
//! # Building the Python extension
//!
//! ```bash
//! pip install maturin
//! maturin develop --features python-ffi
//! ```
//!
//! # Usage
//!
//! ```python
//! import amgraph
//!
//! # Path graph 0-1-2 in CSR form.
//! ap, aj = [0, 1, 3, 4], [1, 0, 2, 1]
//! k, colors = amgraph.vertex_coloring_mis(ap, aj)
//!
//! ax = [1.0, 1.0, 1.0, 1.0]
//! d, cm, centers = amgraph.lloyd_cluster_exact(ap, aj, ax, [0, 2])
//! ```
//!
//! Scalar conventions follow the in-process API: `max_iters = -1` means
//! unbounded, `-1` is the uncolored/unassigned marker, and the largest
//! finite `f64` stands in for infinity.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::csr::CsrView;
use crate::error::KernelError;
use crate::{clustering, coloring, mis, traversal};

use alloc::string::ToString;
use alloc::vec;
use alloc::vec::Vec;

fn kernel_err(e: KernelError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

fn iters(max_iters: i64) -> Option<usize> {
    if max_iters < 0 {
        None
    } else {
        Some(max_iters as usize)
    }
}

/// Greedy serial maximal independent set.
///
/// Returns `(count, x)` where `x` is the updated state array.
#[pyfunction]
fn mis_serial(
    ap: Vec<i64>,
    aj: Vec<i64>,
    active: i64,
    selected: i64,
    rejected: i64,
    mut x: Vec<i64>,
) -> PyResult<(usize, Vec<i64>)> {
    let g = CsrView::new(&ap, &aj).map_err(kernel_err)?;
    let count = mis::mis_serial(&g, active, selected, rejected, &mut x).map_err(kernel_err)?;
    Ok((count, x))
}

/// Luby-style randomized maximal independent set.
///
/// `y` carries the caller's random priorities; `max_iters = -1` runs
/// until no active vertex remains. Returns `(count, x)`.
#[pyfunction]
#[pyo3(signature = (ap, aj, active, selected, rejected, x, y, max_iters = -1))]
#[allow(clippy::too_many_arguments)]
fn mis_parallel(
    ap: Vec<i64>,
    aj: Vec<i64>,
    active: i64,
    selected: i64,
    rejected: i64,
    mut x: Vec<i64>,
    y: Vec<f64>,
    max_iters: i64,
) -> PyResult<(usize, Vec<i64>)> {
    let g = CsrView::new(&ap, &aj).map_err(kernel_err)?;
    let count = mis::mis_parallel(&g, active, selected, rejected, &mut x, &y, iters(max_iters))
        .map_err(kernel_err)?;
    Ok((count, x))
}

/// Serial MIS-peeling vertex coloring.
///
/// Returns `(num_colors, colors)`.
#[pyfunction]
fn vertex_coloring_mis(ap: Vec<i64>, aj: Vec<i64>) -> PyResult<(i64, Vec<i64>)> {
    let g = CsrView::new(&ap, &aj).map_err(kernel_err)?;
    let mut x = vec![0i64; g.num_vertices()];
    let k = coloring::vertex_coloring_mis(&g, &mut x).map_err(kernel_err)?;
    Ok((k, x))
}

/// Jones–Plassmann vertex coloring.
///
/// `z` carries the caller's random priorities (augmented in place with
/// vertex degrees). Returns `(max_color, colors)`.
#[pyfunction]
fn vertex_coloring_jones_plassmann(
    ap: Vec<i64>,
    aj: Vec<i64>,
    mut z: Vec<f64>,
) -> PyResult<(i64, Vec<i64>)> {
    let g = CsrView::new(&ap, &aj).map_err(kernel_err)?;
    let mut x = vec![0i64; g.num_vertices()];
    let max_color =
        coloring::vertex_coloring_jones_plassmann(&g, &mut x, &mut z).map_err(kernel_err)?;
    Ok((max_color, x))
}

/// Largest-degree-first vertex coloring.
///
/// Returns `(max_color, colors)`.
#[pyfunction]
fn vertex_coloring_ldf(ap: Vec<i64>, aj: Vec<i64>, y: Vec<f64>) -> PyResult<(i64, Vec<i64>)> {
    let g = CsrView::new(&ap, &aj).map_err(kernel_err)?;
    let mut x = vec![0i64; g.num_vertices()];
    let max_color = coloring::vertex_coloring_ldf(&g, &mut x, &y).map_err(kernel_err)?;
    Ok((max_color, x))
}

/// Breadth-first traversal from `seed`.
///
/// Returns `(order, level)`: the reached vertices in discovery order and
/// the per-vertex BFS level (`-1` where unreached).
#[pyfunction]
fn bfs(ap: Vec<i64>, aj: Vec<i64>, seed: usize) -> PyResult<(Vec<i64>, Vec<i64>)> {
    let g = CsrView::new(&ap, &aj).map_err(kernel_err)?;
    let mut order = vec![0i64; g.num_vertices()];
    let mut level = vec![-1i64; g.num_vertices()];
    let reached = traversal::bfs(&g, seed, &mut order, &mut level).map_err(kernel_err)?;
    order.truncate(reached);
    Ok((order, level))
}

/// Connected component labeling.
///
/// Returns `(num_components, components)`.
#[pyfunction]
fn connected_components(ap: Vec<i64>, aj: Vec<i64>) -> PyResult<(i64, Vec<i64>)> {
    let g = CsrView::new(&ap, &aj).map_err(kernel_err)?;
    let mut components = vec![0i64; g.num_vertices()];
    let k = traversal::connected_components(&g, &mut components).map_err(kernel_err)?;
    Ok((k, components))
}

/// One approximate Lloyd clustering pass from the given seed vertices.
///
/// Returns `(d, cm, centers)`: boundary distances, cluster labels, and
/// the updated seed list.
#[pyfunction]
fn lloyd_cluster(
    ap: Vec<i64>,
    aj: Vec<i64>,
    ax: Vec<f64>,
    mut centers: Vec<i64>,
) -> PyResult<(Vec<f64>, Vec<i64>, Vec<i64>)> {
    let g = CsrView::new(&ap, &aj).map_err(kernel_err)?;
    let mut d = vec![0.0f64; g.num_vertices()];
    let mut cm = vec![0i64; g.num_vertices()];
    clustering::lloyd_cluster(&g, &ax, &mut d, &mut cm, &mut centers).map_err(kernel_err)?;
    Ok((d, cm, centers))
}

/// One exact Lloyd clustering pass from the given seed vertices.
///
/// Returns `(d, cm, centers)` with each center the exact graph center of
/// its cluster.
#[pyfunction]
fn lloyd_cluster_exact(
    ap: Vec<i64>,
    aj: Vec<i64>,
    ax: Vec<f64>,
    mut centers: Vec<i64>,
) -> PyResult<(Vec<f64>, Vec<i64>, Vec<i64>)> {
    let g = CsrView::new(&ap, &aj).map_err(kernel_err)?;
    let mut d = vec![0.0f64; g.num_vertices()];
    let mut cm = vec![0i64; g.num_vertices()];
    clustering::lloyd_cluster_exact(&g, &ax, &mut d, &mut cm, &mut centers)
        .map_err(kernel_err)?;
    Ok((d, cm, centers))
}

/// amgraph: sparse CSR graph kernels for algebraic multigrid coarsening.
#[pymodule]
pub fn amgraph(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(mis_serial, m)?)?;
    m.add_function(wrap_pyfunction!(mis_parallel, m)?)?;
    m.add_function(wrap_pyfunction!(vertex_coloring_mis, m)?)?;
    m.add_function(wrap_pyfunction!(vertex_coloring_jones_plassmann, m)?)?;
    m.add_function(wrap_pyfunction!(vertex_coloring_ldf, m)?)?;
    m.add_function(wrap_pyfunction!(bfs, m)?)?;
    m.add_function(wrap_pyfunction!(connected_components, m)?)?;
    m.add_function(wrap_pyfunction!(lloyd_cluster, m)?)?;
    m.add_function(wrap_pyfunction!(lloyd_cluster_exact, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
