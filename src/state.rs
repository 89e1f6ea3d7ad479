use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{
    config::Config,
    data::layout::{default_layout, load_layout},
    error::Result,
    logic::forwarder::{DialogflowForwarder, Forwarder},
    models::grid::IrrigationGrid,
};

/// Everything the handlers share, built once in `main`.
pub struct AppState {
    grid: Mutex<IrrigationGrid>,
    forwarder: Arc<dyn Forwarder>,
}

impl AppState {
    pub fn new(grid: IrrigationGrid, forwarder: Arc<dyn Forwarder>) -> Self {
        Self {
            grid: Mutex::new(grid),
            forwarder,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let layout = match &config.layout_file {
            Some(path) => load_layout(path)?,
            None => default_layout(),
        };
        let grid = IrrigationGrid::new(layout)?;
        let forwarder = DialogflowForwarder::new(
            config.dialogflow_url.clone(),
            config.dialogflow_token.clone(),
            config.dialogflow_timeout,
        )?;
        Ok(Self::new(grid, Arc::new(forwarder)))
    }

    /// Locks the grid. A poisoned lock is recovered: each cell write leaves
    /// the grid in a valid state.
    pub fn grid(&self) -> MutexGuard<'_, IrrigationGrid> {
        self.grid.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn forwarder(&self) -> &dyn Forwarder {
        self.forwarder.as_ref()
    }
}
