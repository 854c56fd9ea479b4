//! Indicator configuration

use serde::{Deserialize, Serialize};

use indicator_foundation::{CssClasses, DEFAULT_CLASS_PREFIX, TRANSITION_END_EVENT};

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    /// Block class every other class name is derived from
    pub class_prefix: String,
    /// Event the host fires when a CSS transition finishes
    pub transition_event: String,
}

impl IndicatorConfig {
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            class_prefix: prefix.to_string(),
            ..Self::default()
        }
    }

    /// Parse from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.class_prefix.trim().is_empty()
            || self.class_prefix.chars().any(char::is_whitespace)
        {
            return Err(CoreError::Configuration(format!(
                "invalid class prefix {:?}",
                self.class_prefix
            )));
        }
        if self.transition_event.trim().is_empty() {
            return Err(CoreError::Configuration(
                "transition event cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn classes(&self) -> CssClasses {
        CssClasses::with_prefix(&self.class_prefix)
    }
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
            transition_event: TRANSITION_END_EVENT.to_string(),
        }
    }
}
