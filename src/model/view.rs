use crate::model::store::GridStore;
use serde::Serialize;
use ts_rs::TS;

/// What a renderer needs to draw one frame
#[derive(Clone, Debug, Eq, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LifeView {
    pub rows: usize,
    pub columns: usize,
    /// Changes whenever a new grid is generated, use it to key cell elements
    pub epoch: u32,
    pub generation: usize,
    pub population: usize,
    pub running: bool,
    pub cells: Vec<Vec<bool>>,
}

impl LifeView {
    pub fn new(store: &GridStore, running: bool) -> Self {
        LifeView {
            rows: store.rows(),
            columns: store.columns(),
            epoch: store.epoch(),
            generation: store.generation(),
            population: store.population(),
            running,
            cells: store.grid().to_bools(),
        }
    }
}
