//! Saved-state container chaining.
//!
//! Hosts persist widget state across destroy/recreate cycles in an opaque
//! key-value bundle. A widget contributes its own typed fields and chains
//! them with the host's base blob, which passes through unmodified.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A widget's saved state chained with the host's opaque base state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateBundle {
    /// The widget's own fields.
    widget: serde_json::Value,
    /// The host's base state, treated as an opaque pass-through.
    #[serde(default)]
    base: serde_json::Value,
}

impl StateBundle {
    /// Chain a widget payload with the host's base state.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be serialized.
    pub fn chain<T: Serialize>(
        widget: &T,
        base: serde_json::Value,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            widget: serde_json::to_value(widget)?,
            base,
        })
    }

    /// Recover the widget payload.
    ///
    /// Returns `None` for malformed or foreign bundles; callers fall back
    /// to their default state rather than propagating an error.
    #[must_use]
    pub fn widget<T: DeserializeOwned>(&self) -> Option<T> {
        serde_json::from_value(self.widget.clone()).ok()
    }

    /// The host's base state, unmodified.
    #[must_use]
    pub const fn base(&self) -> &serde_json::Value {
        &self.base
    }

    /// Parse a bundle out of an opaque saved-state value.
    #[must_use]
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }

    /// Render the bundle as an opaque saved-state value.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundle cannot be serialized.
    pub fn into_value(self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Payload {
        is_checked: bool,
    }

    #[test]
    fn test_chain_and_recover() {
        let bundle =
            StateBundle::chain(&Payload { is_checked: true }, json!({"scroll": 42})).unwrap();
        let payload: Payload = bundle.widget().unwrap();
        assert!(payload.is_checked);
        assert_eq!(bundle.base(), &json!({"scroll": 42}));
    }

    #[test]
    fn test_round_trip_through_value() {
        let bundle =
            StateBundle::chain(&Payload { is_checked: false }, json!("host-blob")).unwrap();
        let value = bundle.clone().into_value().unwrap();
        let back = StateBundle::from_value(&value).unwrap();
        assert_eq!(back, bundle);
    }

    #[test]
    fn test_malformed_bundle_is_none() {
        assert!(StateBundle::from_value(&json!(["not", "a", "bundle"])).is_none());
        assert!(StateBundle::from_value(&json!(7)).is_none());
    }

    #[test]
    fn test_foreign_payload_is_none() {
        let bundle = StateBundle::chain(&json!({"other": 1}), json!(null)).unwrap();
        let payload: Option<Payload> = bundle.widget();
        assert!(payload.is_none());
    }

    #[test]
    fn test_base_defaults_to_null() {
        let value = json!({"widget": {"is_checked": true}});
        let bundle = StateBundle::from_value(&value).unwrap();
        assert_eq!(bundle.base(), &serde_json::Value::Null);
    }
}
