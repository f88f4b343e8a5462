mod controller;
mod grid;
mod rules;

pub use controller::{Simulation, SimulationState, DEFAULT_TICK_INTERVAL};
pub use grid::{Grid, GridError, DEFAULT_FILL_RATE};
pub use rules::{count_live_neighbors, next_generation};
