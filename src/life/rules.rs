use super::grid::Grid;

/// Offsets of the 8 cells in a Moore neighborhood.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Counts the live cells among the 8 neighbors of `(row, col)`.
///
/// Coordinates beyond the board edges contribute 0: the board does not wrap.
pub fn count_live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let mut count = 0;
    for (dr, dc) in NEIGHBOR_OFFSETS {
        let r = row as isize + dr;
        let c = col as isize + dc;
        if r < 0 || r as usize >= grid.rows() || c < 0 || c as usize >= grid.cols() {
            continue;
        }
        if grid.cell(r as usize, c as usize) {
            count += 1;
        }
    }
    count
}

/// Applies the B3/S23 rule to the whole board, producing a brand-new grid of
/// the same dimensions.
///
/// Every cell is computed from the old grid, never from partially updated
/// state: a live cell survives with 2 or 3 live neighbors, a dead cell comes
/// alive with exactly 3.
pub fn next_generation(grid: &Grid) -> Grid {
    let mut next = Grid::blank(grid.rows(), grid.cols());
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let neighbors = count_live_neighbors(grid, row, col);
            let alive = if grid.cell(row, col) {
                neighbors == 2 || neighbors == 3
            } else {
                neighbors == 3
            };
            next.set_cell(row, col, alive);
        }
    }
    next
}
