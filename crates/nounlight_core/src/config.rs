//! Tunables for the highlight pipeline.
//!
//! Callers may supply them as JSON; missing fields take the defaults below.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

const DEFAULT_MIN_OCCURRENCES: usize = 2;
const DEFAULT_TAB_WIDTH: usize = 4;
const DEFAULT_SATURATION: u8 = 100;
const DEFAULT_LIGHTNESS: u8 = 50;
const MAX_TAB_WIDTH: usize = 16;

/// Highlight pipeline configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Whole-word occurrences needed before a noun counts as repeated.
    pub min_occurrences: usize,
    /// `&nbsp;` entities emitted per tab character.
    pub tab_width: usize,
    /// Saturation percent for generated colors.
    pub saturation: u8,
    /// Base lightness percent for generated colors.
    pub lightness: u8,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            min_occurrences: DEFAULT_MIN_OCCURRENCES,
            tab_width: DEFAULT_TAB_WIDTH,
            saturation: DEFAULT_SATURATION,
            lightness: DEFAULT_LIGHTNESS,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    /// A field is outside its accepted range.
    OutOfRange {
        field: &'static str,
        message: String,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid highlight config: {err}"),
            Self::OutOfRange { field, message } => {
                write!(f, "invalid highlight config field `{field}`: {message}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::OutOfRange { .. } => None,
        }
    }
}

impl HighlightConfig {
    /// Parses and validates a JSON object.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_occurrences < 2 {
            return Err(ConfigError::OutOfRange {
                field: "min_occurrences",
                message: format!("must be at least 2, got {}", self.min_occurrences),
            });
        }
        if self.tab_width > MAX_TAB_WIDTH {
            return Err(ConfigError::OutOfRange {
                field: "tab_width",
                message: format!("must be at most {MAX_TAB_WIDTH}, got {}", self.tab_width),
            });
        }
        if self.saturation > 100 {
            return Err(ConfigError::OutOfRange {
                field: "saturation",
                message: format!("must be a percentage, got {}", self.saturation),
            });
        }
        if !(10..=90).contains(&self.lightness) {
            return Err(ConfigError::OutOfRange {
                field: "lightness",
                message: format!("must be within 10..=90, got {}", self.lightness),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, HighlightConfig};

    #[test]
    fn missing_fields_take_defaults() {
        let config = HighlightConfig::from_json(r#"{"tab_width": 2}"#).unwrap();
        assert_eq!(config.tab_width, 2);
        assert_eq!(config.min_occurrences, 2);
        assert_eq!(config.saturation, 100);
        assert_eq!(config.lightness, 50);
    }

    #[test]
    fn single_occurrence_threshold_is_rejected() {
        let err = HighlightConfig::from_json(r#"{"min_occurrences": 1}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OutOfRange {
                field: "min_occurrences",
                ..
            }
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            HighlightConfig::from_json("{"),
            Err(ConfigError::Parse(_))
        ));
    }
}
