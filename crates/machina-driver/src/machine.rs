//! Machine class envelope exchanged with the lifecycle controller

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Credential material handed to a provider alongside a machine class.
///
/// Keys are credential field names (for example `clientID`); the controller
/// decodes the raw secret bytes to UTF-8 before hand-off.
pub type Secret = HashMap<String, String>;

/// Declarative template for a class of machines.
///
/// The `provider_spec` payload is opaque at this layer. Each provider decodes
/// it into its own typed model and rejects classes tagged with a different
/// `provider` kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineClass {
    /// Class name, unique within the controller's scope
    pub name: String,

    /// Provider kind tag (for example "Azure")
    pub provider: String,

    /// Raw provider-specific spec, decoded by the matching provider
    pub provider_spec: serde_json::Value,

    /// Name of the secret holding the credentials for this class
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_name: Option<String>,
}

impl MachineClass {
    pub fn new(
        name: impl Into<String>,
        provider: impl Into<String>,
        provider_spec: serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            provider: provider.into(),
            provider_spec,
            secret_name: None,
        }
    }

    /// Decode the raw provider spec into a provider's typed model
    pub fn decode_spec<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.provider_spec.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_format() {
        let machine_class = MachineClass::new("mc-0", "Azure", json!({"location": "westeurope"}));
        let value = serde_json::to_value(&machine_class).unwrap();
        assert_eq!(value["name"], json!("mc-0"));
        assert_eq!(value["providerSpec"]["location"], json!("westeurope"));
        assert!(value.get("secretName").is_none());
    }

    #[test]
    fn test_decode_spec() {
        #[derive(Deserialize)]
        struct Lite {
            location: String,
        }

        let machine_class = MachineClass::new("mc-0", "Azure", json!({"location": "westeurope"}));
        let lite: Lite = machine_class.decode_spec().unwrap();
        assert_eq!(lite.location, "westeurope");
    }

    #[test]
    fn test_decode_spec_rejects_mismatched_shape() {
        #[derive(Deserialize)]
        struct Lite {
            #[allow(dead_code)]
            location: String,
        }

        let machine_class = MachineClass::new("mc-0", "Azure", json!({"location": 42}));
        assert!(machine_class.decode_spec::<Lite>().is_err());
    }
}
