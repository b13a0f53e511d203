use super::*;

/// What `Partitioner::average` takes the mean of.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Quantity {
    /// The scalar value stored at each coordinate.
    #[default]
    Value,
    /// The k-th component of composite values.
    Component(usize),
    /// The coordinates themselves, first two axes only.
    Index,
}

/// Average of one partition.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mean {
    Scalar(Value),
    Pair(Value, Value),
}

impl Quantity {
    /// Reads this quantity at one coordinate of the grid.
    pub(crate) fn sample<T, const D: usize>(
        &self,
        grid: &Grid<T, D>,
        coord: &[usize; D],
    ) -> Result<[Value; INDEX_AXES]>
    where
        T: Sample,
    {
        match self {
            Self::Index => Ok(std::array::from_fn(|axis| coord[axis] as Value)),
            Self::Value => Ok([
                Self::at(grid, coord)?
                    .value()
                    .ok_or_else(|| Error::InvalidParameter("composite samples have no scalar value".into()))?,
                0.,
            ]),
            Self::Component(k) => Ok([
                Self::at(grid, coord)?
                    .component(*k)
                    .ok_or_else(|| Error::InvalidParameter(format!("sample has no component {}", k)))?,
                0.,
            ]),
        }
    }
    /// Packs accumulated sums over `n` points into a mean of the right arity.
    pub(crate) fn mean(&self, sums: [Value; INDEX_AXES], n: usize) -> Mean {
        let n = n as Value;
        match self {
            Self::Index => Mean::Pair(sums[0] / n, sums[1] / n),
            Self::Value | Self::Component(_) => Mean::Scalar(sums[0] / n),
        }
    }
    pub(crate) fn at<'g, T, const D: usize>(grid: &'g Grid<T, D>, coord: &[usize; D]) -> Result<&'g T> {
        grid.get(coord)
            .ok_or_else(|| Error::KeyNotFound(format!("coordinate {:?} outside grid {:?}", coord, grid.shape())))
    }
}

impl Mean {
    pub fn scalar(&self) -> Option<Value> {
        match self {
            Self::Scalar(v) => Some(*v),
            Self::Pair(..) => None,
        }
    }
    pub fn pair(&self) -> Option<(Value, Value)> {
        match self {
            Self::Scalar(_) => None,
            Self::Pair(x, y) => Some((*x, *y)),
        }
    }
}

impl std::fmt::Display for Mean {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scalar(v) => write!(f, "{}", v),
            Self::Pair(x, y) => write!(f, "({}, {})", x, y),
        }
    }
}
