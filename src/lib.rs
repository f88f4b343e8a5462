mod gui;
mod life;

pub use gui::{App, Config};
pub use life::{
    count_live_neighbors, next_generation, Grid, GridError, Simulation, SimulationState,
    DEFAULT_FILL_RATE, DEFAULT_TICK_INTERVAL,
};
