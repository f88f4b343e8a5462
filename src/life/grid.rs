use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

/// Share of cells that start alive when no explicit fill rate is given.
pub const DEFAULT_FILL_RATE: f64 = 0.3;

/// Errors raised by the checked board accessors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// A fixed-size board of cells, `rows x cols`, stored row-major.
///
/// The dimensions are set at construction and never change. Cells beyond the
/// edges are permanently dead: they never count as neighbors and cannot be
/// addressed. A clone of the board is an independent snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates a board with every cell dead.
    pub fn blank(rows: usize, cols: usize) -> Self {
        assert!(rows >= 1 && cols >= 1);
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// Creates a board where each cell is independently alive with
    /// probability `fill_rate`.
    ///
    /// The fill is reproducible for a given `Some(seed)`; `None` seeds the
    /// generator from entropy.
    pub fn random(rows: usize, cols: usize, seed: Option<u64>, fill_rate: f64) -> Self {
        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        let mut grid = Self::blank(rows, cols);
        for cell in grid.cells.iter_mut() {
            *cell = rng.gen_bool(fill_rate);
        }
        grid
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn checked(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row < self.rows && col < self.cols {
            Ok(row * self.cols + col)
        } else {
            Err(GridError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Returns whether the cell at `(row, col)` is alive.
    pub fn get(&self, row: usize, col: usize) -> Result<bool, GridError> {
        Ok(self.cells[self.checked(row, col)?])
    }

    /// Overwrites the cell at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<(), GridError> {
        let idx = self.checked(row, col)?;
        self.cells[idx] = alive;
        Ok(())
    }

    /// Flips the cell at `(row, col)` and returns its new state. Nothing else
    /// changes; in particular no generation advance happens.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool, GridError> {
        let idx = self.checked(row, col)?;
        self.cells[idx] = !self.cells[idx];
        Ok(self.cells[idx])
    }

    /// True iff no cell is alive.
    pub fn is_all_dead(&self) -> bool {
        !self.cells.iter().any(|&alive| alive)
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    // Unchecked accessors for loops that already iterate within bounds.
    pub(crate) fn cell(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.cols + col]
    }

    pub(crate) fn set_cell(&mut self, row: usize, col: usize, alive: bool) {
        self.cells[row * self.cols + col] = alive;
    }
}
