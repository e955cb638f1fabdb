use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Shown when a generation failure carries no usable `detail`.
pub const GENERIC_GENERATION_ERROR: &str = "Failed to generate image";

/// Error body returned by the backend on any non-2xx response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ApiErrorBody {
    pub fn parse(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Human-readable message carried by `detail`. Validation errors arrive as
    /// a list of objects with a `msg` field.
    pub fn message(&self) -> Option<String> {
        let message = match self.detail.as_ref()? {
            Value::String(text) => text.clone(),
            Value::Array(items) => items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect::<Vec<_>>()
                .join("; "),
            _ => return None,
        };

        if message.trim().is_empty() {
            None
        } else {
            Some(message)
        }
    }
}
