use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Plant type occupying a grid cell, serialised as its two-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum PlantCode {
    #[serde(rename = "Ba")]
    Basil,
    #[serde(rename = "Be")]
    Beans,
    #[serde(rename = "Bt")]
    Beetroot,
    #[serde(rename = "Ca")]
    Carrot,
    #[serde(rename = "To")]
    Tomato,
}

impl PlantCode {
    pub const ALL: [PlantCode; 5] = [
        PlantCode::Basil,
        PlantCode::Beans,
        PlantCode::Beetroot,
        PlantCode::Carrot,
        PlantCode::Tomato,
    ];

    pub fn code(self) -> &'static str {
        match self {
            PlantCode::Basil => "Ba",
            PlantCode::Beans => "Be",
            PlantCode::Beetroot => "Bt",
            PlantCode::Carrot => "Ca",
            PlantCode::Tomato => "To",
        }
    }
}

impl fmt::Display for PlantCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// What a spoken plant name refers to: one plant type, or every cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlantTarget {
    Code(PlantCode),
    All,
}

impl PlantTarget {
    /// Resolves a name as the conversational platform sends it.
    /// Matching is case-sensitive, and the agent sends `beetroot` in lowercase.
    pub fn from_name(name: &str) -> Option<Self> {
        let target = match name {
            "Basil" => PlantTarget::Code(PlantCode::Basil),
            "Beans" => PlantTarget::Code(PlantCode::Beans),
            "beetroot" => PlantTarget::Code(PlantCode::Beetroot),
            "Carrot" => PlantTarget::Code(PlantCode::Carrot),
            "Tomato" => PlantTarget::Code(PlantCode::Tomato),
            "all" => PlantTarget::All,
            _ => return None,
        };
        Some(target)
    }

    pub fn matches(self, code: PlantCode) -> bool {
        match self {
            PlantTarget::All => true,
            PlantTarget::Code(c) => c == code,
        }
    }
}
