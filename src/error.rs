//! Precondition errors shared by every kernel.
//!
//! All failures here are synchronous and fatal to the call: no kernel
//! writes partial results after reporting one. Violations the kernels do
//! not check (asymmetric adjacency, out-of-range `Aj` entries) are the
//! caller's contract and surface as bounds-check panics, never as memory
//! corruption.

use thiserror::Error;

/// Precondition violation detected before a kernel touches its outputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KernelError {
    /// An input slice does not match the length the graph implies.
    #[error("array `{name}` has length {got}, expected {expected}")]
    LengthMismatch {
        /// Name of the offending argument.
        name: &'static str,
        /// Length the graph shape requires.
        expected: usize,
        /// Length actually supplied.
        got: usize,
    },

    /// The row-pointer array is not a valid CSR offset sequence.
    #[error("malformed CSR structure: {0}")]
    InvalidCsr(&'static str),

    /// A traversal or clustering seed lies outside `[0, n)`.
    #[error("seed {seed} out of range for {n} vertices")]
    SeedOutOfRange {
        /// The offending seed value.
        seed: i64,
        /// Number of vertices in the graph.
        n: usize,
    },

    /// A cluster label lies outside `[0, k)`, including `-1`, meaning a
    /// vertex was never assigned to any cluster.
    #[error("cluster label {label} out of range for {k} clusters")]
    LabelOutOfRange {
        /// The offending label value.
        label: i64,
        /// Number of clusters expected.
        k: usize,
    },

    /// A cluster label in `[0, k)` has no member vertices.
    #[error("cluster {cluster} is empty")]
    EmptyCluster {
        /// The empty cluster's label.
        cluster: usize,
    },

    /// A cluster is not internally connected, so it has no finite
    /// all-pairs distances and no graph center.
    #[error("cluster {cluster} is not internally connected")]
    DisconnectedCluster {
        /// The disconnected cluster's label.
        cluster: usize,
    },

    /// The recomputed center of a cluster is labeled with a different
    /// cluster, so the clustering state is inconsistent.
    #[error("center {center} of cluster {cluster} carries another cluster's label")]
    CenterOutsideCluster {
        /// The cluster whose center was requested.
        cluster: usize,
        /// The global index returned as its center.
        center: usize,
    },

    /// The balanced relaxation failed to quiesce within its sweep cap.
    #[error("balanced relaxation exceeded the sweep cap of {cap} iterations")]
    SweepCapExceeded {
        /// The cap that was hit (`n³`).
        cap: usize,
    },
}

/// Shorthand for the crate's universal result type.
pub type Result<T> = core::result::Result<T, KernelError>;

/// Check that `slice` has exactly `expected` entries.
pub(crate) fn check_len<E>(name: &'static str, slice: &[E], expected: usize) -> Result<()> {
    if slice.len() != expected {
        return Err(KernelError::LengthMismatch {
            name,
            expected,
            got: slice.len(),
        });
    }
    Ok(())
}
