use lifegrid::{
    count_live_neighbors, next_generation, Grid, GridError, Simulation, SimulationState,
};
use std::time::{Duration, Instant};

const ROWS: usize = 11;
const COLS: usize = 11;
const SEED: u64 = 42;
const FILL_RATE: f64 = 0.3;
const TICK: Duration = Duration::from_millis(5);

fn grid_with(alive: &[(usize, usize)]) -> Grid {
    let mut grid = Grid::blank(ROWS, COLS);
    for &(row, col) in alive {
        grid.set(row, col, true).unwrap();
    }
    grid
}

fn wait_until(timeout: Duration, mut cond: impl FnMut() -> bool) -> bool {
    let start = Instant::now();
    while start.elapsed() < timeout {
        if cond() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(1));
    }
    cond()
}

#[test]
fn test_block_stays_forever() {
    let block = grid_with(&[(4, 4), (4, 5), (5, 4), (5, 5)]);
    let mut grid = block.clone();
    for step in 0..10 {
        grid = next_generation(&grid);
        assert_eq!(grid, block, "step={}", step);
    }
}

#[test]
fn test_blinker_oscillates() {
    let horizontal = grid_with(&[(5, 4), (5, 5), (5, 6)]);
    let vertical = grid_with(&[(4, 5), (5, 5), (6, 5)]);

    let next = next_generation(&horizontal);
    assert_eq!(next, vertical);
    assert_eq!(next_generation(&next), horizontal);
}

#[test]
fn test_boundary_cells_have_no_outside_neighbors() {
    let full = Grid::random(ROWS, COLS, Some(SEED), 1.0);
    assert_eq!(count_live_neighbors(&full, 0, 0), 3);
    assert_eq!(count_live_neighbors(&full, 0, COLS - 1), 3);
    assert_eq!(count_live_neighbors(&full, ROWS - 1, 0), 3);
    assert_eq!(count_live_neighbors(&full, ROWS - 1, COLS - 1), 3);
    assert_eq!(count_live_neighbors(&full, 0, 5), 5);
    assert_eq!(count_live_neighbors(&full, 5, 0), 5);
    assert_eq!(count_live_neighbors(&full, 5, 5), 8);
}

#[test]
fn test_out_of_range_reports_the_bounds() {
    let mut grid = Grid::blank(ROWS, COLS);
    let err = grid.get(ROWS, 2).unwrap_err();
    assert_eq!(
        err,
        GridError::OutOfRange {
            row: ROWS,
            col: 2,
            rows: ROWS,
            cols: COLS,
        }
    );
    assert_eq!(err.to_string(), "cell (11, 2) is outside the 11x11 board");
    assert!(grid.set(3, COLS, true).is_err());
    assert!(grid.toggle(ROWS, COLS).is_err());
}

#[test]
fn test_seeded_boards_match() {
    let a = Grid::random(ROWS, COLS, Some(SEED), FILL_RATE);
    let b = Grid::random(ROWS, COLS, Some(SEED), FILL_RATE);
    assert_eq!(a, b);
    assert!(a.population() > 0);
    assert!(a.population() < ROWS * COLS);
}

#[test]
fn test_simulation_lifecycle() {
    let block = grid_with(&[(4, 4), (4, 5), (5, 4), (5, 5)]);
    let mut sim = Simulation::with_interval(block.clone(), TICK);
    assert_eq!(sim.state(), SimulationState::Idle);
    assert_eq!(sim.ticks_survived(), 0);

    sim.start();
    assert_eq!(sim.state(), SimulationState::Running);
    assert!(wait_until(Duration::from_secs(2), || sim.ticks_survived() >= 5));

    sim.stop();
    assert_eq!(sim.state(), SimulationState::Idle);
    let frozen = sim.ticks_survived();
    assert_eq!(sim.snapshot(), block);

    sim.start();
    assert!(wait_until(Duration::from_secs(2), || {
        sim.ticks_survived() > frozen
    }));
    sim.stop();
}

#[test]
fn test_ticks_match_single_steps() {
    // glider in the top left corner, alive for dozens of generations
    let start = grid_with(&[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]);
    let mut sim = Simulation::with_interval(start.clone(), TICK);

    sim.start();
    assert!(wait_until(Duration::from_secs(2), || sim.ticks_survived() >= 4));
    sim.stop();

    let ticks = sim.ticks_survived();
    let mut expected = start;
    for _ in 0..ticks {
        expected = next_generation(&expected);
    }
    assert_eq!(sim.snapshot(), expected, "after {} ticks", ticks);
}

#[test]
fn test_empty_board_never_runs() {
    let mut sim = Simulation::new(Grid::blank(ROWS, COLS));
    sim.start();
    assert_eq!(sim.state(), SimulationState::GameOver);
    assert_eq!(sim.ticks_survived(), 0);
    assert!(sim.snapshot().is_all_dead());
}
