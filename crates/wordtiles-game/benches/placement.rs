//! Benchmarks for placement bookkeeping.
//!
//! # Benchmarks
//!
//! - **`overlap_grid`**: recomputes the occupancy grid from scratch, as the
//!   rendering layer does after every action.
//! - **`touching_cluster`**: resolves the cluster of pieces touching a seed, as
//!   `dragNeighbors` does.
//!
//! # Test Data
//!
//! A 15×15 board tiled with 2×3 pieces in a brick pattern, so every piece
//! touches its neighbors and the cluster spans the whole board.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench placement
//! ```

use std::{hint, time::Duration};

use criterion::{BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main};
use wordtiles_core::{Cell, OverlapGrid, Piece, PieceId};
use wordtiles_game::group::touching_cluster;

const GRID_SIZE: usize = 15;

fn brick_pieces() -> Vec<Piece> {
    let mut pieces = Vec::new();
    let mut id = 0;
    for row in (0..GRID_SIZE - 1).step_by(2) {
        let shift = (row / 2) % 2;
        for col in (shift..GRID_SIZE - 2).step_by(3) {
            pieces.push(
                Piece::new(PieceId::new(id), "ABC/D.E".parse().unwrap())
                    .with_board_position(Cell::new(row, col)),
            );
            id += 1;
        }
    }
    pieces
}

fn bench_overlap_grid(c: &mut Criterion) {
    let pieces = brick_pieces();
    c.bench_with_input(
        BenchmarkId::new("overlap_grid", pieces.len()),
        &pieces,
        |b, pieces| b.iter(|| OverlapGrid::compute(hint::black_box(pieces), GRID_SIZE)),
    );
}

fn bench_touching_cluster(c: &mut Criterion) {
    let pieces = brick_pieces();
    c.bench_with_input(
        BenchmarkId::new("touching_cluster", pieces.len()),
        &pieces,
        |b, pieces| b.iter(|| touching_cluster(hint::black_box(pieces), PieceId::new(0))),
    );
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(5));
    targets =
        bench_overlap_grid,
        bench_touching_cluster
);
criterion_main!(benches);
