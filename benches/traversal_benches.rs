use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hexindex::*;

const SF_RES9: H3Index = H3Index::new(0x8928308280fffff);
const PENT_RES5: H3Index = H3Index::new(0x85080003fffffff);

fn bench_grid_disk(c: &mut Criterion) {
  let mut group = c.benchmark_group("grid_disk");
  for k in [1, 5, 20] {
    group.bench_with_input(BenchmarkId::new("hexagon", k), &k, |b, &k| {
      b.iter(|| grid_disk(black_box(SF_RES9), k));
    });
  }
  group.bench_function("pentagon_k5", |b| b.iter(|| grid_disk(black_box(PENT_RES5), 5)));
  group.bench_function("ring_k10", |b| b.iter(|| grid_ring(black_box(SF_RES9), 10)));
  group.finish();
}

fn bench_distance_and_path(c: &mut Criterion) {
  let far = grid_ring(SF_RES9, 30).ok().and_then(|ring| ring.first().copied()).unwrap_or(SF_RES9);
  c.benchmark_group("grid_distance")
    .bench_function("distance_30", |b| b.iter(|| grid_distance(black_box(SF_RES9), black_box(far))))
    .bench_function("path_30", |b| b.iter(|| grid_path_cells(black_box(SF_RES9), black_box(far))))
    .bench_function("local_ij", |b| b.iter(|| cell_to_local_ij(black_box(SF_RES9), black_box(far))));
}

fn bench_edges(c: &mut Criterion) {
  let edges = origin_to_directed_edges(SF_RES9).unwrap_or_default();
  let edge = edges.first().copied().unwrap_or(SF_RES9);
  c.benchmark_group("directed_edge")
    .bench_function("origin_to_edges", |b| b.iter(|| origin_to_directed_edges(black_box(SF_RES9))))
    .bench_function("destination", |b| b.iter(|| get_directed_edge_destination(black_box(edge))))
    .bench_function("boundary", |b| b.iter(|| directed_edge_to_boundary(black_box(edge))))
    .bench_function("length_m", |b| b.iter(|| edge_length_m(black_box(edge))));
}

fn bench_area(c: &mut Criterion) {
  c.benchmark_group("measures")
    .bench_function("cell_area_m2", |b| b.iter(|| cell_area_m2(black_box(SF_RES9))))
    .bench_function("pentagon_area_m2", |b| b.iter(|| cell_area_m2(black_box(PENT_RES5))));
}

criterion_group!(traversal_benches, bench_grid_disk, bench_distance_and_path, bench_edges, bench_area);
criterion_main!(traversal_benches);
