/// Row-major walk over every coordinate of a shape.
///
/// The last axis varies fastest, so a `[2, 3]` shape yields
/// `[0,0] [0,1] [0,2] [1,0] [1,1] [1,2]`.
#[derive(Debug, Clone)]
pub struct Coords<const D: usize> {
    shape: [usize; D],
    next: Option<[usize; D]>,
}

impl<const D: usize> Coords<D> {
    pub fn new(shape: [usize; D]) -> Self {
        let next = match shape.iter().all(|&n| n > 0) {
            true => Some([0; D]),
            false => None,
        };
        Self { shape, next }
    }
}

impl<const D: usize> Iterator for Coords<D> {
    type Item = [usize; D];
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        let mut carry = current;
        self.next = None;
        for axis in (0..D).rev() {
            carry[axis] += 1;
            if carry[axis] < self.shape[axis] {
                self.next = Some(carry);
                break;
            }
            carry[axis] = 0;
        }
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major_order() {
        let walked = Coords::new([2, 3]).collect::<Vec<_>>();
        assert_eq!(
            walked,
            vec![[0, 0], [0, 1], [0, 2], [1, 0], [1, 1], [1, 2]]
        );
    }

    #[test]
    fn visits_every_cell_once() {
        assert_eq!(Coords::new([3, 4, 5]).count(), 60);
        assert_eq!(Coords::new([4, 0]).count(), 0);
    }
}
