use super::grid::{Grid, GridError};
use super::rules;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

/// Pause between generations while the simulation is running.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Lifecycle of a [`Simulation`].
///
/// `GameOver` is terminal for the background worker: it is entered when a
/// tick leaves the board empty and only [`Simulation::start`] or
/// [`Simulation::reseed`] moves the simulation out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationState {
    Idle,
    Running,
    GameOver,
}

struct World {
    grid: Grid,
    state: SimulationState,
    generation: u64,
}

struct Worker {
    stop_tx: Sender<()>,
    handle: JoinHandle<()>,
}

/// Owns the board and advances it on a background thread.
///
/// The board lives behind a mutex that is held only for short copies and
/// swaps, never across a generation computation, so the UI thread can
/// always snapshot or edit the board without waiting out a tick.
pub struct Simulation {
    world: Arc<Mutex<World>>,
    interval: Duration,
    worker: Option<Worker>,
}

impl Simulation {
    /// Wraps `grid` in an idle simulation ticking at [`DEFAULT_TICK_INTERVAL`].
    pub fn new(grid: Grid) -> Self {
        Self::with_interval(grid, DEFAULT_TICK_INTERVAL)
    }

    /// Same as [`Simulation::new`] with a custom pause between generations.
    pub fn with_interval(grid: Grid, interval: Duration) -> Self {
        Self {
            world: Arc::new(Mutex::new(World {
                grid,
                state: SimulationState::Idle,
                generation: 0,
            })),
            interval,
            worker: None,
        }
    }

    /// Starts the background loop.
    ///
    /// Does nothing when already running. An empty board goes straight to
    /// `GameOver` without spawning a worker, since no rule can revive it.
    pub fn start(&mut self) {
        {
            let mut world = self.world.lock().unwrap();
            match world.state {
                SimulationState::Running => return,
                SimulationState::Idle | SimulationState::GameOver => {
                    if world.grid.is_all_dead() {
                        world.state = SimulationState::GameOver;
                        return;
                    }
                    world.state = SimulationState::Running;
                }
            }
        }
        self.spawn_worker();
        log::info!("simulation started");
    }

    /// Stops the background loop and waits for it to exit.
    ///
    /// The worker re-checks the state around every tick, so it exits within
    /// one interval even if it is mid-sleep. Does nothing when not running.
    pub fn stop(&mut self) {
        {
            let mut world = self.world.lock().unwrap();
            if world.state != SimulationState::Running {
                return;
            }
            world.state = SimulationState::Idle;
        }
        self.join_worker();
        log::info!("simulation stopped");
    }

    /// Starts when stopped, stops when running.
    pub fn toggle_running(&mut self) {
        if self.state() == SimulationState::Running {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Flips one cell and reports its new state.
    ///
    /// Allowed in every state. While the worker is mid-computation the edit
    /// lands on the live board and is picked up by the next tick. Killing
    /// the last live cell of a stopped board ends the game on the spot.
    pub fn toggle(&self, row: usize, col: usize) -> Result<bool, GridError> {
        let mut world = self.world.lock().unwrap();
        let alive = world.grid.toggle(row, col)?;
        if world.state != SimulationState::Running && world.grid.is_all_dead() {
            world.state = SimulationState::GameOver;
        }
        Ok(alive)
    }

    /// Replaces the board with a fresh random one of the same size.
    ///
    /// Stops the worker first; the new board starts idle at generation zero.
    pub fn reseed(&mut self, seed: Option<u64>, fill_rate: f64) {
        self.stop();
        let mut world = self.world.lock().unwrap();
        world.grid = Grid::random(world.grid.rows(), world.grid.cols(), seed, fill_rate);
        world.generation = 0;
        world.state = SimulationState::Idle;
        log::info!("board reseeded with fill rate {fill_rate}");
    }

    /// Copy of the current board.
    pub fn snapshot(&self) -> Grid {
        self.world.lock().unwrap().grid.clone()
    }

    pub fn state(&self) -> SimulationState {
        self.world.lock().unwrap().state
    }

    /// Number of generations the board has survived since the last reseed.
    pub fn ticks_survived(&self) -> u64 {
        self.world.lock().unwrap().generation
    }

    pub fn rows(&self) -> usize {
        self.world.lock().unwrap().grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.world.lock().unwrap().grid.cols()
    }

    fn spawn_worker(&mut self) {
        // Reap the previous worker if its game already ended.
        self.join_worker();
        let (stop_tx, stop_rx) = mpsc::channel();
        let world = Arc::clone(&self.world);
        let interval = self.interval;
        let handle = std::thread::spawn(move || run_loop(world, stop_rx, interval));
        self.worker = Some(Worker { stop_tx, handle });
    }

    fn join_worker(&mut self) {
        if let Some(worker) = self.worker.take() {
            // The worker may have exited on its own, ignore a closed channel.
            let _ = worker.stop_tx.send(());
            let _ = worker.handle.join();
        }
    }
}

impl Drop for Simulation {
    fn drop(&mut self) {
        {
            let mut world = self.world.lock().unwrap();
            if world.state == SimulationState::Running {
                world.state = SimulationState::Idle;
            }
        }
        self.join_worker();
    }
}

/// Body of the worker thread.
///
/// Each tick copies the board under the lock, computes the next generation
/// with the lock released, then swaps the result back in. The state is
/// checked on both sides of the computation so a stop request never waits
/// longer than one interval plus one generation.
fn run_loop(world: Arc<Mutex<World>>, stop_rx: Receiver<()>, interval: Duration) {
    log::debug!("worker started");
    loop {
        let snapshot = {
            let world = world.lock().unwrap();
            if world.state != SimulationState::Running {
                break;
            }
            world.grid.clone()
        };

        let next = rules::next_generation(&snapshot);

        {
            let mut world = world.lock().unwrap();
            if world.state != SimulationState::Running {
                break;
            }
            world.grid = next;
            world.generation += 1;
            if world.grid.is_all_dead() {
                world.state = SimulationState::GameOver;
                log::info!("game over after {} ticks", world.generation);
                break;
            }
        }

        match stop_rx.recv_timeout(interval) {
            Err(RecvTimeoutError::Timeout) => {}
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
        }
    }
    log::debug!("worker exited");
}
