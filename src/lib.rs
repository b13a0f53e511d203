//! Box partitioning and aggregate statistics for dense grids.
//!
//! A [`Grid`] of rank 2 or 3 is cut into square (or cubic) boxes whose side is
//! `floor(sqrt(mean(shape)))`. The [`Partitioner`] records which box every
//! coordinate falls into and computes per-box statistics on demand.
//!
//! ## Core Types
//!
//! - [`Grid`] — Dense row-major array with a validated shape
//! - [`Partitioner`] — Coordinate ⇄ partition maps plus cached aggregates
//! - [`Quantity`] — What an average is taken over
//! - [`Mean`] — Scalar or coordinate-pair average
//!
//! ## Helpers
//!
//! - [`rotate()`] — 2-D rotation about a center
//! - [`DistanceMatrix`] — Memoised pairwise distances over an n×n grid
//! - [`Sphere`] — Radial falloff mask
//! - [`Progress`] — Injectable loop progress reporting
mod coords;
mod distances;
mod error;
mod grid;
mod keys;
mod partition;
mod partitioner;
mod progress;
mod quantity;
mod rotate;
mod sample;
mod sphere;

pub use coords::*;
pub use distances::*;
pub use error::*;
pub use grid::*;
pub use keys::*;
pub use partition::*;
pub use partitioner::*;
pub use progress::*;
pub use quantity::*;
pub use rotate::*;
pub use sample::*;
pub use sphere::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Scalar type of every aggregate: averages, masses, centroids, distances.
pub type Value = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// PARTITIONING PARAMETERS
// ============================================================================
/// Grid ranks the partitioner accepts.
pub const RANKS: [usize; 2] = [2, 3];
/// Leading axes averaged by `Quantity::Index`.
pub const INDEX_AXES: usize = 2;
/// Leading axes a center of mass is resolved along.
pub const CENTROID_AXES: usize = 2;
/// Largest extent along any axis of an `Arbitrary` grid.
pub const ARBITRARY_EXTENT: usize = 24;

// ============================================================================
// PROGRESS REPORTING
// ============================================================================
/// Header line written once when a `LoopProgress` is created.
pub const PROGRESS_HEADER: &str = "Loop progress";
