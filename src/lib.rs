pub mod config;
pub mod error;
pub mod model;
#[cfg(not(target_arch = "wasm32"))]
pub mod session;
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use crate::config::LifeConfig;
pub use crate::error::{LifeError, Result};
pub use crate::model::cell::Cell;
pub use crate::model::engine::step;
pub use crate::model::grid::Grid;
pub use crate::model::position::Position;
pub use crate::model::store::{generate_empty, generate_random, paint, toggle, GridStore};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}
