use crate::config::LifeConfig;
use crate::error::Result;
use crate::model::autoplay::AutoPlay;
use crate::model::cell::Cell;
use crate::model::grid::Grid;
use crate::model::position::Position;
use crate::model::store::GridStore;
use crate::model::view::LifeView;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::{random, SeedableRng};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// A worker thread that evolves the shared store until told to stop
struct Ticker {
    stop: Sender<()>,
    worker: JoinHandle<()>,
}

fn lock(store: &Mutex<GridStore>) -> MutexGuard<'_, GridStore> {
    store.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Ticker {
    /// Steps once per interval until cancelled
    fn spawn(store: Arc<Mutex<GridStore>>, interval: Duration) -> std::io::Result<Ticker> {
        let (stop, stopped) = mpsc::channel::<()>();
        let worker = thread::Builder::new()
            .name("autoplay".to_string())
            .spawn(move || {
                while let Err(RecvTimeoutError::Timeout) = stopped.recv_timeout(interval) {
                    lock(&store).evolve();
                }
            })?;
        Ok(Ticker { stop, worker })
    }

    /// Blocks until the worker has exited. A step that is already running
    /// finishes first; none start afterwards.
    fn cancel(self) {
        // the worker may already be gone if it panicked
        let _ = self.stop.send(());
        if self.worker.join().is_err() {
            warn!("Autoplay worker panicked");
        }
    }
}

/// A native game session: one grid, plus a background ticker while autoplay runs
pub struct Session {
    store: Arc<Mutex<GridStore>>,
    autoplay: AutoPlay<Ticker>,
    rng: StdRng,
}

impl Session {
    pub fn new(config: &LifeConfig) -> Self {
        let seed = config.seed.unwrap_or_else(random::<u64>);
        info!("Seed: {}", seed);
        let mut rng = StdRng::seed_from_u64(seed);
        let store = GridStore::random(config.rows, config.columns, &mut rng);
        Session {
            store: Arc::new(Mutex::new(store)),
            autoplay: AutoPlay::new(config.tick_interval()),
            rng,
        }
    }

    pub fn with_store(store: GridStore, tick_interval: Duration) -> Self {
        Session {
            store: Arc::new(Mutex::new(store)),
            autoplay: AutoPlay::new(tick_interval),
            rng: StdRng::seed_from_u64(random()),
        }
    }

    fn store(&self) -> MutexGuard<'_, GridStore> {
        lock(&self.store)
    }

    /// A copy of the current generation
    pub fn snapshot(&self) -> Grid<Cell> {
        self.store().grid().clone()
    }

    pub fn generation(&self) -> usize {
        self.store().generation()
    }

    pub fn view(&self) -> LifeView {
        LifeView::new(&self.store(), self.is_running())
    }

    pub fn randomize(&mut self) {
        lock(&self.store).randomize(&mut self.rng);
    }

    pub fn clear(&self) {
        self.store().clear();
    }

    pub fn evolve(&self) {
        self.store().evolve();
    }

    pub fn toggle(&self, position: Position) -> Result<()> {
        self.store().toggle(position)
    }

    pub fn paint(&self, position: Position) -> Result<()> {
        self.store().paint(position)
    }

    pub fn is_running(&self) -> bool {
        self.autoplay.is_running()
    }

    /// Steps right away, then once per tick interval until stopped
    pub fn start(&mut self) -> Result<bool> {
        let store = Arc::clone(&self.store);
        Ok(self.autoplay.start_and_tick(
            |interval| Ticker::spawn(Arc::clone(&store), interval),
            || lock(&store).evolve(),
        )?)
    }

    pub fn stop(&mut self) -> bool {
        self.autoplay.stop(Ticker::cancel)
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.stop();
    }
}
