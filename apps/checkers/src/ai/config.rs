//! AI configuration handling.
//!
//! Typed view over the JSON blob an AI is configured with. Only `seed` is
//! read; other keys are ignored.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Configuration for AI players.
///
/// Two players built from the same `seed` make the same choices on the same
/// positions. Without a seed the player draws from OS entropy.
///
/// ```json
/// {"seed": 12345}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl AiConfig {
    /// Build from an optional JSON value. Malformed input yields an empty
    /// config rather than an error.
    pub fn from_json(config: Option<&JsonValue>) -> Self {
        config
            .and_then(|json| serde_json::from_value(json.clone()).ok())
            .unwrap_or_default()
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}
