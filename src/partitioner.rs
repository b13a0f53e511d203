//! Box partitioning of a grid with per-box aggregates.

use super::*;
use std::collections::BTreeMap;
use std::collections::HashMap;

/// Splits a grid into boxes and aggregates values per box.
///
/// Both directions of the membership relation are built together in a
/// single pass at construction and never change afterwards:
///
/// - coordinate → partition, for [`Partitioner::partition_of`]
/// - partition → coordinates (row-major), for [`Partitioner::points_of`]
///
/// Aggregates are computed on demand. Each computation overwrites the
/// previous table, and a failed computation leaves it untouched.
///
/// The grid can be swapped for another of the same rank with
/// [`Partitioner::replace`] without rebuilding the partitions, which is
/// what moving averages over successive frames want.
#[derive(Debug, Clone)]
pub struct Partitioner<T, const D: usize> {
    grid: Grid<T, D>,
    side: usize,
    owner: HashMap<[usize; D], Partition>,
    points: BTreeMap<Partition, Vec<[usize; D]>>,
    averages: BTreeMap<Partition, Mean>,
    masses: BTreeMap<Partition, Value>,
    centroids: BTreeMap<Partition, [Value; CENTROID_AXES]>,
}

impl<T, const D: usize> Partitioner<T, D> {
    /// Partitions every coordinate of `grid`.
    ///
    /// The point/partition summary is emitted through `log::info!` and
    /// only reaches stderr when the host installs a `log` backend.
    /// Rank is already validated by every `Grid` constructor.
    pub fn new(grid: Grid<T, D>) -> Result<Self> {
        let side = Partition::side(&grid.shape())?;
        let mut owner = HashMap::with_capacity(grid.len());
        let mut points = BTreeMap::<Partition, Vec<[usize; D]>>::new();
        for coord in grid.coords() {
            let partition = Partition::locate(&coord, side);
            owner.insert(coord, partition);
            points.entry(partition).or_default().push(coord);
        }
        let placed = points.values().map(Vec::len).sum::<usize>();
        if placed != grid.len() || owner.len() != grid.len() {
            return Err(Error::PartitionIntegrity {
                placed,
                expected: grid.len(),
            });
        }
        log::info!("{} data points -> {} partitions", owner.len(), points.len());
        Ok(Self {
            grid,
            side,
            owner,
            points,
            averages: BTreeMap::new(),
            masses: BTreeMap::new(),
            centroids: BTreeMap::new(),
        })
    }

    /// Box side length along every axis.
    pub fn side(&self) -> usize {
        self.side
    }
    /// Number of partitioned points.
    pub fn len(&self) -> usize {
        self.owner.len()
    }
    pub fn is_empty(&self) -> bool {
        self.owner.is_empty()
    }
    /// Distinct partition count minus one.
    ///
    /// Ids are not necessarily contiguous, so this is a count and not
    /// the largest id. Use [`Partitioner::partitions`] to walk the ids.
    pub fn max_partition(&self) -> usize {
        self.points.len().saturating_sub(1)
    }
    /// Populated partition ids, ascending.
    pub fn partitions(&self) -> impl Iterator<Item = Partition> + '_ {
        self.points.keys().copied()
    }
    pub fn grid(&self) -> &Grid<T, D> {
        &self.grid
    }
    /// Swaps in a new grid of the same rank and returns the old one.
    ///
    /// Partitions are not recomputed; they still describe the shape the
    /// partitioner was built with.
    pub fn replace(&mut self, grid: Grid<T, D>) -> Grid<T, D> {
        std::mem::replace(&mut self.grid, grid)
    }

    pub fn partition_of(&self, coord: &[usize; D]) -> Result<Partition> {
        self.owner
            .get(coord)
            .copied()
            .ok_or_else(|| Error::KeyNotFound(format!("coordinate {:?}", coord)))
    }
    pub fn points_of(&self, partition: Partition) -> Result<&[[usize; D]]> {
        self.points
            .get(&partition)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::KeyNotFound(format!("partition {}", partition)))
    }

    /// Last successful `average` table.
    pub fn averages(&self) -> &BTreeMap<Partition, Mean> {
        &self.averages
    }
    /// Last successful `center_of_mass` masses.
    pub fn masses(&self) -> &BTreeMap<Partition, Value> {
        &self.masses
    }
    /// Last successful `center_of_mass` centroids, first two axes.
    pub fn centroids(&self) -> &BTreeMap<Partition, [Value; CENTROID_AXES]> {
        &self.centroids
    }
}

impl<T, const D: usize> Partitioner<T, D>
where
    T: Sample,
{
    /// Averages `quantity` over every partition.
    pub fn average(&mut self, quantity: Quantity) -> Result<&BTreeMap<Partition, Mean>> {
        log::debug!("{:<32}{:<32?}", "averaging partitions", quantity);
        let ref grid = self.grid;
        self.averages = self
            .points
            .iter()
            .map(|(&partition, coords)| {
                coords
                    .iter()
                    .map(|coord| quantity.sample(grid, coord))
                    .try_fold([0.; INDEX_AXES], |sum, x| {
                        x.map(|x| std::array::from_fn(|i| sum[i] + x[i]))
                    })
                    .map(|sum| (partition, quantity.mean(sum, coords.len())))
            })
            .collect::<Result<BTreeMap<Partition, Mean>>>()?;
        Ok(&self.averages)
    }

    /// Treats each value as a mass and resolves every partition's total
    /// mass and mass-weighted centroid.
    pub fn center_of_mass(
        &mut self,
    ) -> Result<(
        &BTreeMap<Partition, Value>,
        &BTreeMap<Partition, [Value; CENTROID_AXES]>,
    )> {
        log::debug!("{:<32}{:<32}", "weighing partitions", self.points.len());
        let mut masses = BTreeMap::new();
        let mut centroids = BTreeMap::new();
        for (&partition, coords) in self.points.iter() {
            let mut total = 0.;
            let mut moment = [0.; CENTROID_AXES];
            for coord in coords {
                let mass = Quantity::Value.sample(&self.grid, coord)?[0];
                total += mass;
                moment
                    .iter_mut()
                    .zip(coord.iter())
                    .for_each(|(m, &c)| *m += mass * c as Value);
            }
            if total == 0. {
                return Err(Error::ZeroMassPartition(partition));
            }
            masses.insert(partition, total);
            centroids.insert(partition, moment.map(|m| m / total));
        }
        self.masses = masses;
        self.centroids = centroids;
        Ok((&self.masses, &self.centroids))
    }
}
