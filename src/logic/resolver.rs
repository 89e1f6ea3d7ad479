use crate::models::{grid::IrrigationGrid, plant::PlantTarget};

/// Intents the conversational agent routes to the fulfillment webhook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    TurnOnWater,
    TurnOffWater,
    Other(String),
}

impl Intent {
    pub fn from_display_name(name: &str) -> Self {
        match name {
            "TurnOnWater" => Intent::TurnOnWater,
            "TurnOffWater" => Intent::TurnOffWater,
            other => Intent::Other(other.to_string()),
        }
    }
}

/// What a webhook call did to the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Matching cells were switched to `on`.
    Applied {
        on: bool,
        targets: Vec<PlantTarget>,
        message: String,
    },
    /// None of the names mapped to a plant; the grid is untouched.
    Unrecognized { message: String },
    /// The intent is not a watering intent; the grid is untouched.
    UnsupportedIntent { intent: String },
}

impl Resolution {
    /// Text returned to the platform as `fulfillmentText`.
    /// Empty for unsupported intents, so the agent falls back to its own
    /// configured response.
    pub fn into_fulfillment_text(self) -> String {
        match self {
            Resolution::Applied { message, .. } | Resolution::Unrecognized { message } => message,
            Resolution::UnsupportedIntent { .. } => String::new(),
        }
    }
}

/// Translates names to targets, dropping names that match nothing.
/// Order follows `names`; duplicates are kept.
pub fn translate_names(names: &[String]) -> Vec<PlantTarget> {
    names
        .iter()
        .filter_map(|name| PlantTarget::from_name(name))
        .collect()
}

/// Applies a watering intent to the grid.
///
/// `names` are the plant names exactly as sent. Unknown names are ignored as
/// long as at least one name is recognised; messages always echo the names as
/// sent. The whole matched set is written before returning.
pub fn resolve_intent(
    grid: &mut IrrigationGrid,
    intent: &Intent,
    names: &[String],
) -> Resolution {
    let targets = translate_names(names);
    let requested = names.join(", ");

    if targets.is_empty() {
        return Resolution::Unrecognized {
            message: format!("Sorry, I don't recognize {requested}."),
        };
    }

    let on = match intent {
        Intent::TurnOnWater => true,
        Intent::TurnOffWater => false,
        Intent::Other(name) => {
            return Resolution::UnsupportedIntent {
                intent: name.clone(),
            }
        }
    };

    let switch = if on { "on" } else { "off" };
    let message = if targets.contains(&PlantTarget::All) {
        grid.set_all(on);
        format!("Turning {switch} water for all plants.")
    } else {
        grid.set(&targets, on);
        format!("Turning {switch} water for {requested}.")
    };

    Resolution::Applied {
        on,
        targets,
        message,
    }
}
