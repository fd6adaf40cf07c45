use serde::{Deserialize, Serialize};

/// Colours used by the artwork composers.
///
/// Panel artwork is printed or etched as light-on-dark, so `ink` is the
/// visible foreground and `background` fills everything else. Laser layouts
/// use `sheet` for the stock, `cut` for through-holes and `slot` for the
/// vector-cut slot strokes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub background: String,
    pub ink: String,
    pub sheet: String,
    pub cut: String,
    pub slot: String,
}

impl Theme {
    pub fn panel() -> Self {
        Self {
            background: "black".to_string(),
            ink: "white".to_string(),
            sheet: "white".to_string(),
            cut: "black".to_string(),
            slot: "red".to_string(),
        }
    }

    /// Dark-on-light variant for paper proofs.
    pub fn proof() -> Self {
        Self {
            background: "white".to_string(),
            ink: "black".to_string(),
            sheet: "white".to_string(),
            cut: "black".to_string(),
            slot: "red".to_string(),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "panel" | "default" => Some(Self::panel()),
            "proof" | "paper" => Some(Self::proof()),
            _ => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::panel()
    }
}
