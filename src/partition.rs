use super::*;

/// Identifier of one box of a partitioned grid.
///
/// Box indices along each axis are folded into a single id with the box
/// side as the radix: `bx + side·by` in 2-D, `bx + side·by + side²·bz` in 3-D.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Partition(usize);

impl Partition {
    /// Box side for a grid of this shape: `floor(sqrt(mean(shape)))`.
    ///
    /// Zero-length axes and sides that floor to zero are degenerate.
    pub fn side<const D: usize>(shape: &[usize; D]) -> Result<usize> {
        let mean = shape.iter().sum::<usize>() as Value / D as Value;
        let side = mean.sqrt().floor() as usize;
        match side == 0 || shape.contains(&0) {
            true => Err(Error::DegenerateGrid(shape.to_vec())),
            false => Ok(side),
        }
    }
    /// The partition holding `coord` when boxes have the given side.
    pub fn locate<const D: usize>(coord: &[usize; D], side: usize) -> Self {
        debug_assert!(side > 0);
        Self(
            coord
                .iter()
                .rev()
                .fold(0, |id, &c| id * side + c / side),
        )
    }
    pub fn id(&self) -> usize {
        self.0
    }
}

impl From<usize> for Partition {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

impl From<Partition> for usize {
    fn from(p: Partition) -> Self {
        p.0
    }
}

impl std::fmt::Display for Partition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
