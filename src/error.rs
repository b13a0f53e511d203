use super::*;

/// Errors raised while partitioning a grid or aggregating its boxes.
///
/// None of these are transient: each one means the computation cannot
/// proceed with the inputs it was given.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Unsupported rank, or data that does not fill the declared shape.
    InvalidInput(String),
    /// The box side collapses to zero.
    DegenerateGrid(Vec<usize>),
    /// Partitions do not cover the grid exactly once.
    PartitionIntegrity { placed: usize, expected: usize },
    /// A sample cannot provide the requested quantity.
    InvalidParameter(String),
    /// A partition whose masses sum to exactly zero has no centroid.
    ZeroMassPartition(Partition),
    /// Lookup of an unknown coordinate or partition.
    KeyNotFound(String),
}

/// Fallible result of every grid operation.
pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(s) => write!(f, "invalid input: {}", s),
            Self::DegenerateGrid(shape) => write!(f, "degenerate grid {:?}: box side is zero", shape),
            Self::PartitionIntegrity { placed, expected } => write!(
                f,
                "partition integrity: {} of {} points placed in boxes",
                placed, expected
            ),
            Self::InvalidParameter(s) => write!(f, "invalid parameter: {}", s),
            Self::ZeroMassPartition(p) => write!(f, "partition {} has zero total mass", p),
            Self::KeyNotFound(s) => write!(f, "key not found: {}", s),
        }
    }
}

impl std::error::Error for Error {}
