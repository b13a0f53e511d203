use super::*;

/// A single grid element as seen by the aggregations.
///
/// Scalar elements expose a value and no components. Composite elements
/// (arrays, vectors) expose components and no value of their own.
pub trait Sample {
    /// The element as a scalar, if it is one.
    fn value(&self) -> Option<Value>;
    /// The k-th component, if the element is composite and has one.
    fn component(&self, k: usize) -> Option<Value>;
}

macro_rules! scalar {
    ($($t:ty),*) => {
        $(
            impl Sample for $t {
                fn value(&self) -> Option<Value> {
                    Some(*self as Value)
                }
                fn component(&self, _: usize) -> Option<Value> {
                    None
                }
            }
        )*
    };
}

scalar!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<S, const N: usize> Sample for [S; N]
where
    S: Sample,
{
    fn value(&self) -> Option<Value> {
        None
    }
    fn component(&self, k: usize) -> Option<Value> {
        self.get(k).and_then(Sample::value)
    }
}

impl<S> Sample for Vec<S>
where
    S: Sample,
{
    fn value(&self) -> Option<Value> {
        None
    }
    fn component(&self, k: usize) -> Option<Value> {
        self.get(k).and_then(Sample::value)
    }
}
