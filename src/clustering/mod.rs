//! Lloyd-style graph clustering and its supporting kernels.
//!
//! A clustering is a per-vertex label array `cm` (`-1` = unassigned
//! during initialization) plus one center vertex per cluster. The
//! kernels compose bottom-up:
//!
//! - [`incidence`] inverts `cm` into a cluster→members index so that
//!   per-cluster work can address members by local index;
//! - [`center`] finds the exact graph center of one cluster with a dense
//!   all-pairs pass over the members;
//! - [`lloyd`] propagates distances with Bellman–Ford sweeps (plain or
//!   size-balanced) and recomputes the seeds, one Lloyd iteration per
//!   call; the surrounding multigrid setup decides how many iterations
//!   to run.
//!
//! All distances use [`Weight::MAX_FINITE`] as the unreachable marker;
//! the sweeps never add to it, so integer weight types are safe.
//!
//! [`Weight::MAX_FINITE`]: crate::scalar::Weight::MAX_FINITE

pub mod center;
pub mod incidence;
pub mod lloyd;

pub use center::cluster_center;
pub use incidence::ClusterIncidence;
pub use lloyd::{bellman_ford, bellman_ford_balanced, lloyd_cluster, lloyd_cluster_exact};
