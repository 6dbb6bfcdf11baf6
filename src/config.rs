//! Engine configuration
//!
//! Deserialized from a plain JS object on the WASM side; every field has a
//! default so `{}` (or no object at all) gives the Norwegian classroom setup.

use serde::{Deserialize, Serialize};

/// Default cap on decimals produced by long division
pub const DEFAULT_DECIMAL_PLACES: u8 = 2;

/// Language of explanations and error messages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Norwegian Bokmål
    #[default]
    #[serde(alias = "nb", alias = "no")]
    Norwegian,
    #[serde(alias = "en")]
    English,
}

impl Locale {
    /// Separator written between integer and decimal digits
    pub fn decimal_separator(self) -> char {
        match self {
            Locale::Norwegian => ',',
            Locale::English => '.',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    pub locale: Locale,
    /// Long division stops after this many decimals and reports an approximation
    pub max_decimal_places: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            locale: Locale::default(),
            max_decimal_places: DEFAULT_DECIMAL_PLACES,
        }
    }
}

impl EngineConfig {
    pub fn with_locale(locale: Locale) -> Self {
        EngineConfig {
            locale,
            ..EngineConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.locale, Locale::Norwegian);
        assert_eq!(config.max_decimal_places, 2);
        assert_eq!(config.locale.decimal_separator(), ',');
    }

    #[test]
    fn test_partial_object_uses_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"locale":"en"}"#).unwrap();
        assert_eq!(config.locale, Locale::English);
        assert_eq!(config.max_decimal_places, DEFAULT_DECIMAL_PLACES);

        let config: EngineConfig = serde_json::from_str(r#"{"maxDecimalPlaces":4}"#).unwrap();
        assert_eq!(config.locale, Locale::Norwegian);
        assert_eq!(config.max_decimal_places, 4);
    }
}
