pub mod autoplay;
pub mod cell;
pub mod engine;
pub mod grid;
pub mod position;
pub mod store;
pub mod view;
