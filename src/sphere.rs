use super::*;
use std::collections::BTreeMap;

/// Radial falloff weights inside a disc of integer radius.
///
/// Every integer offset `(dx, dy)` within `radius` of the origin maps to
/// `radius + 1 - hypot(dx, dy)`, so the center weighs `radius + 1` and the
/// rim weighs at least one.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    radius: usize,
    weights: BTreeMap<(isize, isize), Value>,
}

impl Sphere {
    pub fn new(radius: usize) -> Self {
        let r = radius as isize;
        let reach = radius as Value;
        let weights = (-r..=r)
            .flat_map(|dx| (-r..=r).map(move |dy| (dx, dy)))
            .map(|(dx, dy)| ((dx, dy), (dx as Value).hypot(dy as Value)))
            .filter(|&(_, d)| d <= reach)
            .map(|(offset, d)| (offset, reach + 1. - d))
            .collect();
        Self { radius, weights }
    }
    pub fn radius(&self) -> usize {
        self.radius
    }
    /// Weight at `(dx, dy)`, or `None` outside the disc.
    pub fn weight(&self, dx: isize, dy: isize) -> Option<Value> {
        self.weights.get(&(dx, dy)).copied()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&(isize, isize), &Value)> {
        self.weights.iter()
    }
    /// Number of offsets inside the disc.
    pub fn len(&self) -> usize {
        self.weights.len()
    }
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_sphere_is_a_plus() {
        let sphere = Sphere::new(1);
        assert_eq!(sorted_keys(sphere.iter()), vec![(-1, 0), (0, -1), (0, 0), (0, 1), (1, 0)]);
        assert_eq!(sphere.weight(0, 0), Some(2.));
        assert_eq!(sphere.weight(0, -1), Some(1.));
        assert_eq!(sphere.weight(1, 1), None);
    }

    #[test]
    fn four_fold_symmetric() {
        let sphere = Sphere::new(4);
        for (&(dx, dy), &w) in sphere.iter() {
            assert_eq!(sphere.weight(-dx, dy), Some(w));
            assert_eq!(sphere.weight(dx, -dy), Some(w));
            assert_eq!(sphere.weight(-dx, -dy), Some(w));
            assert!(w >= 1.);
        }
        assert_eq!(sphere.weight(3, 4), None);
        assert_eq!(sphere.weight(0, 4), Some(1.));
    }

    #[test]
    fn zero_radius_is_the_origin() {
        let sphere = Sphere::new(0);
        assert_eq!(sphere.len(), 1);
        assert_eq!(sphere.weight(0, 0), Some(1.));
    }
}
