use crate::config::LifeConfig;
use crate::error::LifeError;
use crate::model::autoplay::{timer_millis, AutoPlay};
use crate::model::position::Position;
use crate::model::store::GridStore;
use crate::model::view::LifeView;
use log::info;
use rand::rngs::StdRng;
use rand::{random, SeedableRng};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsError, JsValue};

/// A registered `setInterval` and the callback it calls. The callback must
/// outlive the registration.
struct Interval {
    id: i32,
    _tick: Closure<dyn FnMut()>,
}

impl Interval {
    fn schedule(store: Rc<RefCell<GridStore>>, interval: Duration) -> Result<Interval, LifeError> {
        let millis = timer_millis(interval)?;
        let window = web_sys::window()
            .ok_or_else(|| LifeError::Scheduler("no global window".to_string()))?;
        let tick = Closure::<dyn FnMut()>::new(move || store.borrow_mut().evolve());
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                tick.as_ref().unchecked_ref(),
                millis,
            )
            .map_err(|error| LifeError::Scheduler(format!("{error:?}")))?;
        Ok(Interval { id, _tick: tick })
    }

    /// Clears exactly the interval this handle registered
    fn cancel(self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.id);
        }
    }
}

#[wasm_bindgen]
pub struct Life {
    store: Rc<RefCell<GridStore>>,
    autoplay: AutoPlay<Interval>,
    rng: StdRng,
}

#[wasm_bindgen]
impl Life {
    /// Creates a session with a random grid. `config` is an optional
    /// `LifeConfig` object, missing fields take their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<Life, JsError> {
        let config: LifeConfig = if config.is_undefined() || config.is_null() {
            LifeConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        let seed = config.seed.unwrap_or_else(random::<u64>);
        info!("Seed: {}", seed);
        let mut rng = StdRng::seed_from_u64(seed);
        let store = GridStore::random(config.rows, config.columns, &mut rng);
        Ok(Life {
            store: Rc::new(RefCell::new(store)),
            autoplay: AutoPlay::new(config.tick_interval()),
            rng,
        })
    }

    pub fn randomize(&mut self) {
        self.store.borrow_mut().randomize(&mut self.rng);
    }

    pub fn clear(&mut self) {
        self.store.borrow_mut().clear();
    }

    pub fn evolve(&mut self) {
        self.store.borrow_mut().evolve();
    }

    pub fn toggle(&mut self, row: i32, column: i32) -> Result<(), JsError> {
        Ok(self.store.borrow_mut().toggle(Position::new(row, column))?)
    }

    /// Makes the cell alive, for drawing by dragging over the grid
    pub fn paint(&mut self, row: i32, column: i32) -> Result<(), JsError> {
        Ok(self.store.borrow_mut().paint(Position::new(row, column))?)
    }

    /// Steps right away, then once per tick interval until stopped
    pub fn start(&mut self) -> Result<bool, JsError> {
        let store = Rc::clone(&self.store);
        Ok(self.autoplay.start_and_tick(
            |interval| Interval::schedule(Rc::clone(&store), interval),
            || store.borrow_mut().evolve(),
        )?)
    }

    pub fn stop(&mut self) -> bool {
        self.autoplay.stop(Interval::cancel)
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.autoplay.is_running()
    }

    #[wasm_bindgen(js_name = getView)]
    pub fn get_view(&self) -> Result<JsValue, JsError> {
        let view = LifeView::new(&self.store.borrow(), self.is_running());
        Ok(serde_wasm_bindgen::to_value(&view)?)
    }
}

impl Drop for Life {
    fn drop(&mut self) {
        self.stop();
    }
}
