//! Numeric abstractions for graph indices and edge weights.
//!
//! Every kernel in this crate is generic over two primitive families:
//!
//! - [`VertexId`]: the signed integer type of the CSR arrays (`Ap`, `Aj`)
//!   and of every vertex-state array (colors, cluster labels, BFS levels).
//!   Signedness is load-bearing: the kernels encode transient state in the
//!   same array as results via negative sentinels (`-1` uncolored, `-2`
//!   to-be-reverted, `-1-K` / `-2-K` during MIS peeling).
//! - [`Weight`]: the edge-weight / distance / random-priority scalar.
//!   There is no IEEE infinity anywhere in the crate: the only admissible
//!   "unreachable" marker is [`Weight::MAX_FINITE`], and relaxation kernels
//!   skip sources holding it instead of adding to it.

use core::fmt::Debug;
use core::ops::{Add, Sub};

/// Signed integer vertex index and vertex-state scalar.
///
/// Implemented for `i32` and `i64`. Conversions assume the value fits the
/// target type; graphs are bounded by the caller's choice of index width.
pub trait VertexId:
    Copy + Eq + Ord + Debug + Add<Output = Self> + Sub<Output = Self> + 'static
{
    /// The additive identity.
    const ZERO: Self;
    /// The multiplicative identity.
    const ONE: Self;
    /// Sentinel base: uncolored / unassigned.
    const NEG_ONE: Self;
    /// Sentinel base: transient "revert me" state.
    const NEG_TWO: Self;

    /// Widen a `usize` into this index type.
    fn from_usize(v: usize) -> Self;

    /// Narrow a non-negative index into a `usize` for slice addressing.
    fn to_usize(self) -> usize;
}

macro_rules! impl_vertex_id {
    ($($t:ty),*) => {$(
        impl VertexId for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const NEG_ONE: Self = -1;
            const NEG_TWO: Self = -2;

            #[inline]
            fn from_usize(v: usize) -> Self {
                v as $t
            }

            #[inline]
            fn to_usize(self) -> usize {
                debug_assert!(self >= 0, "sentinel used as array index: {}", self);
                self as usize
            }
        }
    )*};
}

impl_vertex_id!(i32, i64);

/// Edge weight, distance, and random-priority scalar.
///
/// Implemented for `f32`, `f64`, `i32`, and `i64`. `MAX_FINITE` plays the
/// role of `+∞`; callers must keep real weights small enough that finite
/// sums never reach it.
pub trait Weight: Copy + PartialOrd + PartialEq + Debug + Add<Output = Self> + 'static {
    /// The additive identity; also the distance of a seed to itself.
    const ZERO: Self;
    /// The promoted-vertex marker used by the distance-k MIS propagation.
    const ONE: Self;
    /// The retired-vertex marker used by the distance-k MIS propagation.
    const NEG_ONE: Self;
    /// The largest finite value, the crate-wide stand-in for `+∞`.
    const MAX_FINITE: Self;

    /// Widen a vertex degree into this scalar (Jones–Plassmann / LDF
    /// fold degrees into random priorities).
    fn from_usize(v: usize) -> Self;
}

macro_rules! impl_weight {
    ($($t:ty => $max:expr),*) => {$(
        impl Weight for $t {
            const ZERO: Self = 0 as $t;
            const ONE: Self = 1 as $t;
            const NEG_ONE: Self = -1 as $t;
            const MAX_FINITE: Self = $max;

            #[inline]
            fn from_usize(v: usize) -> Self {
                v as $t
            }
        }
    )*};
}

impl_weight!(f32 => f32::MAX, f64 => f64::MAX, i32 => i32::MAX, i64 => i64::MAX);
