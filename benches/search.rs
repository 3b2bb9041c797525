use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tilefit::{Grid, GridOptions};

fn distribute_single(c: &mut Criterion) {
    let grid = Grid::new(GridOptions::new(4, 3)).expect("grid");
    c.bench_function("distribute_single", |b| {
        b.iter(|| {
            grid.distribute(black_box(vec![2.0_f64]), |prio| *prio)
                .expect("distribute")
                .expect("solution")
        });
    });
}

fn distribute_mixed_priorities(c: &mut Criterion) {
    let grid = Grid::new(GridOptions::new(4, 3)).expect("grid");
    let elements = vec![2.0_f64, 2.0, 1.0, 4.0, 0.5];
    c.bench_function("distribute_mixed_priorities", |b| {
        b.iter(|| {
            grid.distribute(black_box(elements.clone()), |prio| *prio)
                .expect("distribute")
                .expect("solution")
        });
    });
}

fn distribute_wide_grid(c: &mut Criterion) {
    let grid = Grid::new(GridOptions::new(6, 4)).expect("grid");
    let elements = vec![5.0_f64, 3.0, 2.0, 1.0];
    c.bench_function("distribute_wide_grid", |b| {
        b.iter(|| {
            grid.distribute(black_box(elements.clone()), |prio| *prio)
                .expect("distribute")
                .expect("solution")
        });
    });
}

criterion_group!(
    benches,
    distribute_single,
    distribute_mixed_priorities,
    distribute_wide_grid
);
criterion_main!(benches);
