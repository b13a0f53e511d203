use super::*;
use std::collections::BTreeMap;
use std::collections::HashMap;

/// Euclidean distances between every pair of cells of an n×n grid.
///
/// Each origin cell owns an n×n grid of distances to every target cell.
/// Distances depend only on `(|dx|, |dy|)`, so each offset is computed
/// once and its transpose is filled in at the same time.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    size: usize,
    rows: BTreeMap<[usize; 2], Grid<Value, 2>>,
    memo: HashMap<(usize, usize), Value>,
}

impl DistanceMatrix {
    pub fn new(size: usize) -> Result<Self> {
        Self::build(size, &mut Silent)
    }

    /// Builds the matrix, reporting each completed `x1` column of origins.
    pub fn build<P>(size: usize, progress: &mut P) -> Result<Self>
    where
        P: Progress,
    {
        log::debug!("{:<32}{:<32}", "building distance matrix", size);
        let mut rows = BTreeMap::new();
        let mut memo = HashMap::<(usize, usize), Value>::new();
        for x1 in 0..size {
            for y1 in 0..size {
                let row = Grid::from_fn([size, size], |[x2, y2]| {
                    let dx = x1.abs_diff(x2);
                    let dy = y1.abs_diff(y2);
                    match memo.get(&(dx, dy)) {
                        Some(&d) => d,
                        None => {
                            let d = (dx as Value).hypot(dy as Value);
                            memo.insert((dx, dy), d);
                            memo.insert((dy, dx), d);
                            d
                        }
                    }
                })?;
                rows.insert([x1, y1], row);
            }
            progress.update(x1);
        }
        Ok(Self { size, rows, memo })
    }
    pub fn size(&self) -> usize {
        self.size
    }
    /// Distance from `origin` to `target`, if both lie in the grid.
    pub fn get(&self, origin: [usize; 2], target: [usize; 2]) -> Option<Value> {
        self.rows.get(&origin)?.get(&target).copied()
    }
    /// All distances from `origin`.
    pub fn row(&self, origin: [usize; 2]) -> Option<&Grid<Value, 2>> {
        self.rows.get(&origin)
    }
    pub fn iter(&self) -> impl Iterator<Item = (&[usize; 2], &Grid<Value, 2>)> {
        self.rows.iter()
    }
    /// Number of memoised `(dx, dy)` offsets.
    pub fn memo_len(&self) -> usize {
        self.memo.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pythagorean_triples() {
        let m = DistanceMatrix::new(6).unwrap();
        assert_eq!(m.get([0, 0], [3, 4]), Some(5.));
        assert_eq!(m.get([5, 5], [2, 1]), Some(5.));
        assert_eq!(m.get([1, 2], [1, 2]), Some(0.));
        assert_eq!(m.get([0, 0], [6, 0]), None);
    }

    #[test]
    fn uses_both_target_axes() {
        let m = DistanceMatrix::new(3).unwrap();
        assert_eq!(m.get([0, 2], [2, 2]), Some(2.));
        assert_eq!(m.get([0, 0], [0, 2]), Some(2.));
    }

    #[test]
    fn symmetric() {
        let n = 5;
        let m = DistanceMatrix::new(n).unwrap();
        for (&a, row) in m.iter() {
            for (b, &d) in row.iter() {
                assert_eq!(m.get(b, a), Some(d));
            }
        }
        assert_eq!(m.iter().count(), n * n);
        assert_eq!(m.memo_len(), n * n);
    }

    #[test]
    fn reports_each_column() {
        struct Count(Vec<usize>);
        impl Progress for Count {
            fn update(&mut self, i: usize) {
                self.0.push(i);
            }
        }
        let ref mut count = Count(vec![]);
        DistanceMatrix::build(4, count).unwrap();
        assert_eq!(count.0, vec![0, 1, 2, 3]);
    }
}
