//! AI configuration handling.
//!
//! Typed view over the JSON config a caller hands to `create_ai`. Standard
//! fields (seed, personality) are extracted; anything else is preserved in
//! `custom` for AI-specific knobs.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::ai::personality::Personality;

/// Standard configuration for AI players.
///
/// Example JSON:
///
/// ```json
/// {"seed": 12345, "personality": "aggressive"}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// Optional RNG seed for deterministic decision jitter. Useful for
    /// testing and replaying games with consistent AI behavior.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Risk temperament; balanced when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personality: Option<Personality>,

    /// AI-specific fields not part of the standard schema.
    #[serde(flatten)]
    pub custom: JsonValue,
}

impl AiConfig {
    /// Create an AiConfig from optional JSON, falling back to an empty
    /// config on malformed input.
    pub fn from_json(config: Option<&JsonValue>) -> Self {
        match config {
            Some(json) => serde_json::from_value(json.clone()).unwrap_or_else(|_| Self::empty()),
            None => Self::empty(),
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn personality(&self) -> Personality {
        self.personality.unwrap_or_default()
    }

    /// Get a custom configuration field by key.
    pub fn get_custom(&self, key: &str) -> Option<&JsonValue> {
        self.custom.get(key)
    }

    pub fn empty() -> Self {
        Self {
            seed: None,
            personality: None,
            custom: JsonValue::Object(serde_json::Map::new()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            personality: None,
            custom: JsonValue::Object(serde_json::Map::new()),
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::empty()
    }
}
