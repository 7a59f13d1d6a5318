//! Decoding the Azure provider spec out of a machine class

use machina_driver::{MachineClass, Secret};

use crate::error::{AzureError, Result};
use crate::spec::{MachineSetKind, ProviderSpec, SubResource};

/// Provider kind tag identifying Azure machine classes
pub const PROVIDER_AZURE: &str = "Azure";

/// Canonical secret field holding the service principal's client ID
pub const SECRET_CLIENT_ID: &str = "clientID";
/// Canonical secret field holding the service principal's client secret
pub const SECRET_CLIENT_SECRET: &str = "clientSecret";
/// Canonical secret field holding the subscription ID
pub const SECRET_SUBSCRIPTION_ID: &str = "subscriptionID";
/// Canonical secret field holding the tenant ID
pub const SECRET_TENANT_ID: &str = "tenantID";

// Deprecated alternates still accepted in existing secrets
const ALT_SECRET_CLIENT_ID: &str = "azureClientId";
const ALT_SECRET_CLIENT_SECRET: &str = "azureClientSecret";
const ALT_SECRET_SUBSCRIPTION_ID: &str = "azureSubscriptionId";
const ALT_SECRET_TENANT_ID: &str = "azureTenantId";

/// Decode the provider spec embedded in a machine class.
///
/// Classes tagged for another provider are rejected. The deprecated
/// `machineSet` field is normalized into `availability_set` or
/// `virtual_machine_scale_set` according to its kind; the field itself is
/// left in place so callers can still tell it was used.
pub fn decode_provider_spec(machine_class: &MachineClass) -> Result<ProviderSpec> {
    if machine_class.provider != PROVIDER_AZURE {
        return Err(AzureError::UnsupportedProvider(
            machine_class.provider.clone(),
        ));
    }
    let mut spec: ProviderSpec = machine_class.decode_spec()?;
    normalize_machine_set(&mut spec);
    Ok(spec)
}

fn normalize_machine_set(spec: &mut ProviderSpec) {
    let Some(machine_set) = spec.properties.machine_set.clone() else {
        return;
    };
    let sub_resource = SubResource { id: machine_set.id };
    match machine_set.kind {
        MachineSetKind::Vmo => {
            spec.properties.virtual_machine_scale_set = Some(sub_resource);
        }
        MachineSetKind::AvailabilitySet => {
            spec.properties.availability_set = Some(sub_resource);
        }
    }
}

/// Credentials for the Azure API, pulled out of a machine class secret
#[derive(Debug, Clone)]
pub struct ConnectConfig {
    pub subscription_id: String,
    pub tenant_id: String,
    pub client_id: String,
    pub client_secret: String,
}

impl ConnectConfig {
    /// Build a connect config from the secret attached to a machine class.
    ///
    /// Each credential is read from its canonical field, falling back to the
    /// deprecated `azure*` field only when the canonical one is absent.
    /// Values are trimmed; a missing or empty credential is reported under
    /// its canonical field name.
    pub fn from_secret(secret: &Secret) -> Result<Self> {
        Ok(Self {
            subscription_id: extract(secret, SECRET_SUBSCRIPTION_ID, ALT_SECRET_SUBSCRIPTION_ID)?,
            tenant_id: extract(secret, SECRET_TENANT_ID, ALT_SECRET_TENANT_ID)?,
            client_id: extract(secret, SECRET_CLIENT_ID, ALT_SECRET_CLIENT_ID)?,
            client_secret: extract(secret, SECRET_CLIENT_SECRET, ALT_SECRET_CLIENT_SECRET)?,
        })
    }
}

fn extract(secret: &Secret, key: &'static str, alt_key: &'static str) -> Result<String> {
    let value = secret
        .get(key)
        .or_else(|| secret.get(alt_key))
        .map(|value| value.trim())
        .unwrap_or("");
    if value.is_empty() {
        return Err(AzureError::MissingSecret(key));
    }
    Ok(value.to_string())
}
