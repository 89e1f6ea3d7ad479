use std::{fs, path::Path};

use crate::{
    error::Result,
    models::{
        plant::PlantCode::{
            self, Basil as Ba, Beans as Be, Beetroot as Bt, Carrot as Ca, Tomato as To,
        },
        Matrix,
    },
};

/// The bed as planted: 5 rows × 5 columns, row-major.
const DEFAULT_LAYOUT: [[PlantCode; 5]; 5] = [
    [Be, Ba, Ca, Bt, To],
    [To, Bt, Ba, Be, Ca],
    [To, Bt, Be, Ba, Ca],
    [Bt, Ba, To, Be, Ca],
    [Ba, Be, Ca, To, Bt],
];

pub fn default_layout() -> Matrix<PlantCode> {
    DEFAULT_LAYOUT.iter().map(|row| row.to_vec()).collect()
}

/// Reads a layout from a JSON file holding a matrix of two-letter codes,
/// e.g. `[["Ba", "To"], ["Ca", "Be"]]`.
/// Shape is validated when the grid is built.
pub fn load_layout(path: &Path) -> Result<Matrix<PlantCode>> {
    let raw = fs::read_to_string(path)?;
    let layout = serde_json::from_str(&raw)?;
    log::info!("Loaded plant layout from {}", path.display());
    Ok(layout)
}
