use criterion::{criterion_group, criterion_main, Criterion};
use std::collections::HashSet;
use std::time::Duration;

use snake_engine::games::SessionRng;
use snake_engine::games::snake::{
    Direction, GameState, GridSize, Point, SnakeSessionSettings, place_food,
};

fn bench_settings() -> SnakeSessionSettings {
    SnakeSessionSettings {
        grid: GridSize::new(30, 30),
        start_position: Point::new(15, 15),
        start_direction: Direction::Right,
        score_per_food: 10,
        max_food_spawn_attempts: 1000,
        move_interval: Duration::from_millis(200),
        enable_sounds: false,
    }
}

fn bench_100_ticks_with_steering() {
    let mut rng = SessionRng::new(4242);
    let mut state = GameState::new(&bench_settings(), 0, &mut rng);

    let directions = [
        Direction::Right,
        Direction::Up,
        Direction::Left,
        Direction::Down,
    ];
    for tick in 0..100 {
        state.request_direction(directions[(tick / 5) % directions.len()]);
        if state.update(&mut rng).is_none() {
            break;
        }
    }
}

fn bench_place_food_on_crowded_grid() {
    let grid = GridSize::new(30, 30);
    let mut occupied = HashSet::new();
    for x in 0..grid.width {
        for y in 0..grid.height {
            // Leave one free column.
            if x != 17 {
                occupied.insert(Point::new(x, y));
            }
        }
    }

    let mut rng = SessionRng::new(99);
    for _ in 0..100 {
        place_food(grid, &occupied, 1000, &mut rng);
    }
}

fn tick_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    group.sample_size(50).measurement_time(Duration::from_secs(20));

    group.bench_function("100_ticks_with_steering", |b| {
        b.iter(bench_100_ticks_with_steering)
    });

    group.bench_function("place_food_crowded_100", |b| {
        b.iter(bench_place_food_on_crowded_grid)
    });

    group.finish();
}

criterion_group!(benches, tick_bench);
criterion_main!(benches);
