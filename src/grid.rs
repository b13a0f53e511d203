use super::*;

/// Dense row-major array of rank `D`.
///
/// Only ranks listed in [`RANKS`] can be constructed, and the data must
/// fill the shape exactly. Coordinates are `[usize; D]` in axis order
/// (x, y, z), with the last axis contiguous in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T, const D: usize> {
    shape: [usize; D],
    data: Vec<T>,
}

impl<T, const D: usize> Grid<T, D> {
    /// Wraps row-major `data` in the given shape.
    pub fn new(shape: [usize; D], data: Vec<T>) -> Result<Self> {
        if !RANKS.contains(&D) {
            return Err(Error::InvalidInput(format!(
                "rank {} grid, expected one of {:?}",
                D, RANKS
            )));
        }
        let expected = shape.iter().product::<usize>();
        if data.len() != expected {
            return Err(Error::InvalidInput(format!(
                "{} values cannot fill shape {:?} ({} cells)",
                data.len(),
                shape,
                expected
            )));
        }
        Ok(Self { shape, data })
    }
    /// Builds a grid by evaluating `f` at every coordinate in row-major order.
    pub fn from_fn<F>(shape: [usize; D], f: F) -> Result<Self>
    where
        F: FnMut([usize; D]) -> T,
    {
        Self::new(shape, Coords::new(shape).map(f).collect())
    }
    pub fn shape(&self) -> [usize; D] {
        self.shape
    }
    pub fn rank(&self) -> usize {
        D
    }
    /// Number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// The element at `coord`, or `None` when it lies outside the shape.
    pub fn get(&self, coord: &[usize; D]) -> Option<&T> {
        self.offset(coord).and_then(|i| self.data.get(i))
    }
    /// Every coordinate in row-major order.
    pub fn coords(&self) -> Coords<D> {
        Coords::new(self.shape)
    }
    /// Coordinates paired with their elements, row-major.
    pub fn iter(&self) -> impl Iterator<Item = ([usize; D], &T)> + '_ {
        self.coords().zip(self.data.iter())
    }
    pub fn values(&self) -> &[T] {
        &self.data
    }
    fn offset(&self, coord: &[usize; D]) -> Option<usize> {
        coord
            .iter()
            .zip(self.shape.iter())
            .try_fold(0, |offset, (&c, &n)| match c < n {
                true => Some(offset * n + c),
                false => None,
            })
    }
}

impl<T, const D: usize> Grid<T, D>
where
    T: Clone,
{
    /// A grid holding `value` in every cell.
    pub fn filled(shape: [usize; D], value: T) -> Result<Self> {
        Self::new(shape, vec![value; shape.iter().product()])
    }
}

impl<const D: usize> Grid<Value, D> {
    fn random_shaped() -> Self {
        let shape = std::array::from_fn(|_| rand::random_range(1..=ARBITRARY_EXTENT));
        let data = Coords::new(shape)
            .map(|_| 1. - rand::random::<Value>())
            .collect();
        Self { shape, data }
    }
}

/// Random shape with every extent in `1..=ARBITRARY_EXTENT`,
/// filled with strictly positive values in `(0, 1]`.
impl Arbitrary for Grid<Value, 2> {
    fn random() -> Self {
        Self::random_shaped()
    }
}

impl Arbitrary for Grid<Value, 3> {
    fn random() -> Self {
        Self::random_shaped()
    }
}

#[cfg(feature = "serde")]
impl<T, const D: usize> serde::Serialize for Grid<T, D>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Grid", 2)?;
        state.serialize_field("shape", &self.shape[..])?;
        state.serialize_field("data", &self.data)?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T, const D: usize> serde::Deserialize<'de> for Grid<T, D>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<De>(deserializer: De) -> std::result::Result<Self, De::Error>
    where
        De: serde::Deserializer<'de>,
    {
        use serde::de::Error as _;
        #[derive(serde::Deserialize)]
        struct Raw<S> {
            shape: Vec<usize>,
            data: Vec<S>,
        }
        let raw = Raw::<T>::deserialize(deserializer)?;
        let shape = <[usize; D]>::try_from(raw.shape.as_slice()).map_err(|_| {
            De::Error::custom(format!("shape {:?} is not rank {}", raw.shape, D))
        })?;
        Self::new(shape, raw.data).map_err(De::Error::custom)
    }
}
