criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        partitioning_random_plane,
        partitioning_random_volume,
        averaging_plane_values,
        averaging_plane_indices,
        weighing_plane_centroids,
        building_distance_matrix,
        building_sphere_mask,
}

fn partitioning_random_plane(c: &mut criterion::Criterion) {
    let grid = Grid::<Value, 2>::random();
    c.bench_function("partition a random 2-D grid", |b| {
        b.iter(|| Partitioner::new(grid.clone()).unwrap())
    });
}

fn partitioning_random_volume(c: &mut criterion::Criterion) {
    let grid = Grid::<Value, 3>::random();
    c.bench_function("partition a random 3-D grid", |b| {
        b.iter(|| Partitioner::new(grid.clone()).unwrap())
    });
}

fn averaging_plane_values(c: &mut criterion::Criterion) {
    let mut partitioner = Partitioner::new(Grid::<Value, 2>::random()).unwrap();
    c.bench_function("average values over 2-D partitions", |b| {
        b.iter(|| partitioner.average(Quantity::Value).unwrap().len())
    });
}

fn averaging_plane_indices(c: &mut criterion::Criterion) {
    let mut partitioner = Partitioner::new(Grid::<Value, 2>::random()).unwrap();
    c.bench_function("average indices over 2-D partitions", |b| {
        b.iter(|| partitioner.average(Quantity::Index).unwrap().len())
    });
}

fn weighing_plane_centroids(c: &mut criterion::Criterion) {
    let mut partitioner = Partitioner::new(Grid::<Value, 2>::random()).unwrap();
    c.bench_function("center of mass over 2-D partitions", |b| {
        b.iter(|| partitioner.center_of_mass().unwrap().0.len())
    });
}

fn building_distance_matrix(c: &mut criterion::Criterion) {
    c.bench_function("build a 16x16 distance matrix", |b| {
        b.iter(|| DistanceMatrix::new(16).unwrap())
    });
}

fn building_sphere_mask(c: &mut criterion::Criterion) {
    c.bench_function("build a radius 32 sphere mask", |b| {
        b.iter(|| Sphere::new(32))
    });
}

use gridstat::Arbitrary;
use gridstat::DistanceMatrix;
use gridstat::Grid;
use gridstat::Partitioner;
use gridstat::Quantity;
use gridstat::Sphere;
use gridstat::Value;
