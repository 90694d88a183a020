//! The fixed set of selectable model identifiers.

use serde::{Deserialize, Serialize};

/// Models offered by the selector, in display order.
///
/// The identifiers follow the hosted service's OpenAI-compatible surface, so
/// the strum serialization doubles as the wire name.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
pub enum ModelId {
    #[default]
    #[strum(serialize = "gemini-2.5-flash")]
    #[serde(rename = "gemini-2.5-flash")]
    Gemini25Flash,

    #[strum(serialize = "gemini-2.5-pro")]
    #[serde(rename = "gemini-2.5-pro")]
    Gemini25Pro,

    #[strum(serialize = "gemini-2.0-flash")]
    #[serde(rename = "gemini-2.0-flash")]
    Gemini20Flash,

    #[strum(serialize = "gemini-2.0-flash-lite")]
    #[serde(rename = "gemini-2.0-flash-lite")]
    Gemini20FlashLite,
}

impl ModelId {
    /// All selectable models, in selector order.
    pub fn all() -> Vec<ModelId> {
        use strum::IntoEnumIterator;
        ModelId::iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn wire_names_round_trip() {
        for model in ModelId::all() {
            let name = model.to_string();
            assert_eq!(ModelId::from_str(&name).unwrap(), model);
        }
    }

    #[test]
    fn default_model_is_flash() {
        assert_eq!(ModelId::default().to_string(), "gemini-2.5-flash");
    }
}
