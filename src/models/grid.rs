use crate::{
    error::{Result, ServiceError},
    models::{
        plant::{PlantCode, PlantTarget},
        Matrix,
    },
};

/// The irrigated bed: a fixed plant layout and the valve state of every cell.
///
/// `plants` is set at construction and never changes; `status` always has the
/// same dimensions.
#[derive(Debug, Clone)]
pub struct IrrigationGrid {
    rows: usize,
    cols: usize,
    plants: Matrix<PlantCode>,
    status: Matrix<bool>,
}

impl IrrigationGrid {
    /// Builds a grid with every valve closed.
    /// Fails if the layout has no cells or its rows differ in length.
    pub fn new(plants: Matrix<PlantCode>) -> Result<Self> {
        let rows = plants.len();
        let cols = plants.first().map(Vec::len).unwrap_or(0);
        if rows == 0 || cols == 0 {
            return Err(ServiceError::layout("layout must have at least one cell"));
        }
        if let Some((row, cells)) = plants.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(ServiceError::layout(format!(
                "row {row} has {} cells, expected {cols}",
                cells.len()
            )));
        }
        let status = vec![vec![false; cols]; rows];
        Ok(Self {
            rows,
            cols,
            plants,
            status,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn plants(&self) -> &Matrix<PlantCode> {
        &self.plants
    }

    /// Snapshot of the valve state.
    pub fn status(&self) -> Matrix<bool> {
        self.status.clone()
    }

    /// Valve state as 0/1, the shape `/get_status` returns.
    pub fn status_bits(&self) -> Matrix<u8> {
        self.status
            .iter()
            .map(|row| row.iter().map(|&on| u8::from(on)).collect())
            .collect()
    }

    /// Sets every cell matched by any of `targets` to `value`.
    pub fn set(&mut self, targets: &[PlantTarget], value: bool) {
        if targets.contains(&PlantTarget::All) {
            self.set_all(value);
            return;
        }
        for (plant_row, status_row) in self.plants.iter().zip(self.status.iter_mut()) {
            for (&code, cell) in plant_row.iter().zip(status_row.iter_mut()) {
                if targets.iter().any(|t| t.matches(code)) {
                    *cell = value;
                }
            }
        }
    }

    pub fn set_all(&mut self, value: bool) {
        for row in &mut self.status {
            row.fill(value);
        }
    }
}
