//! Fixtures for provider tests
//!
//! Builders for the provider spec and machine class shapes the tests need
//! over and over: a worker pool spec with plausible defaults, assembled
//! step by step so individual tests can leave out or override parts.

use std::collections::HashMap;

use machina_driver::MachineClass;

use crate::error::Result;
use crate::machine_class::PROVIDER_AZURE;
use crate::spec::{
    DataDisk, ImageReference, MachineSet, MachineSetKind, ManagedDiskParameters, OsDisk, OsProfile,
    ProviderSpec, StorageProfile, SubResource, SubnetInfo,
};

/// Region used by the default fixtures
pub const LOCATION: &str = "westeurope";

/// Step-wise builder for a test provider spec
#[derive(Debug, Clone)]
pub struct ProviderSpecBuilder {
    cluster_ns: String,
    worker_pool: String,
    spec: ProviderSpec,
}

impl ProviderSpecBuilder {
    pub fn new(
        resource_group: impl Into<String>,
        cluster_ns: impl Into<String>,
        worker_pool: impl Into<String>,
    ) -> Self {
        let spec = ProviderSpec {
            location: LOCATION.to_string(),
            resource_group: resource_group.into(),
            ..ProviderSpec::default()
        };
        Self {
            cluster_ns: cluster_ns.into(),
            worker_pool: worker_pool.into(),
            spec,
        }
    }

    pub fn with_default_hardware_profile(mut self) -> Self {
        self.spec.properties.hardware_profile.vm_size = "Standard_DS2_v2".to_string();
        self
    }

    pub fn with_subnet_info(mut self, vnet_name: impl Into<String>) -> Self {
        self.spec.subnet_info = SubnetInfo {
            vnet_name: vnet_name.into(),
            vnet_resource_group: None,
            subnet_name: format!("{}-nodes", self.cluster_ns),
        };
        self
    }

    pub fn with_default_storage_profile(mut self) -> Self {
        self.spec.properties.storage_profile = StorageProfile {
            image_reference: ImageReference {
                urn: Some("kinvolk:flatcar-container-linux-free:stable-gen2:3815.2.5".to_string()),
                ..ImageReference::default()
            },
            os_disk: OsDisk {
                name: None,
                caching: Some("None".to_string()),
                managed_disk: Some(ManagedDiskParameters {
                    storage_account_type: Some("StandardSSD_LRS".to_string()),
                }),
                disk_size_gb: 50,
                create_option: Some("FromImage".to_string()),
            },
            data_disks: Vec::new(),
        };
        self
    }

    /// Attach one data disk per LUN, all sharing the given name
    pub fn with_data_disks(mut self, name: Option<&str>, luns: &[i32]) -> Self {
        self.spec.properties.storage_profile.data_disks = luns
            .iter()
            .map(|&lun| DataDisk {
                name: name.map(str::to_string),
                lun,
                caching: Some("None".to_string()),
                storage_account_type: Some("StandardSSD_LRS".to_string()),
                disk_size_gb: 20,
            })
            .collect();
        self
    }

    pub fn with_default_os_profile(mut self) -> Self {
        self.spec.properties.os_profile = OsProfile {
            computer_name: None,
            admin_username: "core".to_string(),
            admin_password: None,
            custom_data: Some("#cloud-config".to_string()),
        };
        self
    }

    pub fn with_default_tags(mut self) -> Self {
        let mut tags = HashMap::new();
        tags.insert("Name".to_string(), self.cluster_ns.clone());
        tags.insert(
            format!("kubernetes.io-cluster-{}", self.cluster_ns),
            "1".to_string(),
        );
        tags.insert("kubernetes.io-role-node".to_string(), "1".to_string());
        tags.insert(
            "worker.machina.dev_pool".to_string(),
            self.worker_pool.clone(),
        );
        self.spec.tags = tags;
        self
    }

    pub fn with_zone(mut self, zone: i32) -> Self {
        self.spec.properties.zone = Some(zone);
        self
    }

    pub fn with_machine_set(mut self, id: impl Into<String>, kind: MachineSetKind) -> Self {
        self.spec.properties.machine_set = Some(MachineSet { id: id.into(), kind });
        self
    }

    pub fn with_availability_set(mut self, id: impl Into<String>) -> Self {
        self.spec.properties.availability_set = Some(SubResource { id: id.into() });
        self
    }

    pub fn with_virtual_machine_scale_set(mut self, id: impl Into<String>) -> Self {
        self.spec.properties.virtual_machine_scale_set = Some(SubResource { id: id.into() });
        self
    }

    pub fn build(self) -> ProviderSpec {
        self.spec
    }
}

/// Wrap a provider spec into the machine class envelope a driver receives
pub fn machine_class_for(spec: &ProviderSpec) -> Result<MachineClass> {
    let raw = serde_json::to_value(spec)?;
    Ok(MachineClass::new("test-machine-class", PROVIDER_AZURE, raw))
}
