//! # amgraph
//!
//! Sparse CSR graph kernels for algebraic multigrid coarsening.
//!
//! ## What This Is
//!
//! The coarsening and smoothing stages of an AMG setup reduce to a small
//! set of graph kernels: maximal independent sets, vertex colorings,
//! breadth-first level sets, connected components, and Lloyd-style
//! clustering with exact graph centers. This crate implements those
//! kernels over a caller-owned compressed sparse row structure, with the
//! tie-break rules and sentinel conventions the surrounding setup relies
//! on reproducibly, vertex by vertex.
//!
//! ## Kernel map
//!
//! | Module | Kernels |
//! |--------|---------|
//! | [`csr`] | [`CsrView`](csr::CsrView) borrowed adjacency, [`Csr`](csr::Csr) edge-list builder |
//! | [`mis`] | greedy serial MIS, Luby rounds, distance-k MIS via max-propagation |
//! | [`coloring`] | first-fit recolor; MIS-peel, Jones–Plassmann, and LDF colorings |
//! | [`traversal`] | level-set BFS, connected components, pseudo-peripheral search |
//! | [`clustering`] | cluster incidence, Floyd–Warshall centers, Bellman–Ford sweeps, Lloyd passes |
//!
//! All kernels are sequential, allocation is limited to per-call scratch,
//! and randomness is always supplied by the caller. Index and weight
//! types are generic over [`scalar::VertexId`] (`i32`/`i64`) and
//! [`scalar::Weight`] (`f32`/`f64`/`i32`/`i64`); the largest finite
//! weight stands in for `+∞` throughout.
//!
//! ```rust
//! use amgraph::coloring::vertex_coloring_mis;
//! use amgraph::csr::Csr;
//!
//! // A 4-vertex path needs two colors.
//! let m: Csr<i32, f64> =
//!     Csr::from_edges(4, &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0)]).unwrap();
//! let mut colors = [0i32; 4];
//! let k = vertex_coloring_mis(&m.view(), &mut colors).unwrap();
//! assert_eq!(k, 2);
//! ```
//!
//! ## no_std
//!
//! This crate is `no_std` (with `alloc`) by default. Enable the `std`
//! feature for std-only integrations and `python-ffi` (implies `std`)
//! for the PyO3 bindings. The `serde` feature derives serialization on
//! the owned [`Csr`](csr::Csr) and
//! [`ClusterIncidence`](clustering::ClusterIncidence) containers.

#![no_std]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod clustering;
pub mod coloring;
pub mod csr;
pub mod error;
pub mod mis;
pub mod scalar;
pub mod traversal;

#[cfg(feature = "python-ffi")]
pub mod ffi;
