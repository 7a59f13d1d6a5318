//! Provider spec data model
//!
//! Typed view of the JSON payload a machine class carries for Azure. Field
//! names follow the wire format; decoding is lenient beyond the handful of
//! fields nothing works without, deeper validation being the job of the
//! admission layer upstream.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Azure provider spec embedded in a machine class
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSpec {
    /// Azure region machines are placed in (for example "westeurope")
    pub location: String,

    /// Resource group owning the machines and their dependent resources
    pub resource_group: String,

    /// Network the machines attach to
    pub subnet_info: SubnetInfo,

    pub properties: VirtualMachineProperties,

    /// Tags applied to every created resource
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
}

/// Virtual machine settings within a provider spec
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachineProperties {
    pub hardware_profile: HardwareProfile,

    pub storage_profile: StorageProfile,

    pub os_profile: OsProfile,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_profile: Option<NetworkProfile>,

    /// Availability set the machine joins, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_set: Option<SubResource>,

    /// User-assigned managed identity attached to the machine
    #[serde(rename = "identityID", default, skip_serializing_if = "Option::is_none")]
    pub identity_id: Option<String>,

    /// Availability zone the machine is pinned to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<i32>,

    /// Deprecated grouping field, normalized into `availability_set` or
    /// `virtual_machine_scale_set` during decoding
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub machine_set: Option<MachineSet>,

    /// Scale set the machine joins, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virtual_machine_scale_set: Option<SubResource>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareProfile {
    /// Machine size (for example "Standard_DS2_v2")
    pub vm_size: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageProfile {
    pub image_reference: ImageReference,

    pub os_disk: OsDisk,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data_disks: Vec<DataDisk>,
}

/// Source image for the OS disk; exactly one of these references is expected
/// to be set
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Marketplace image as "publisher:offer:sku:version"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urn: Option<String>,

    #[serde(
        rename = "communityGalleryImageID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub community_gallery_image_id: Option<String>,

    #[serde(
        rename = "sharedGalleryImageID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub shared_gallery_image_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OsDisk {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caching: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub managed_disk: Option<ManagedDiskParameters>,

    #[serde(rename = "diskSizeGB")]
    pub disk_size_gb: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_option: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedDiskParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_account_type: Option<String>,
}

/// Additional disk attached to a machine.
///
/// The logical unit number keeps disks on one machine apart; the optional
/// name additionally ends up in the derived disk resource name. An empty
/// name counts as unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataDisk {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Logical unit number the disk is attached under
    pub lun: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caching: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_account_type: Option<String>,

    #[serde(rename = "diskSizeGB")]
    pub disk_size_gb: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OsProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computer_name: Option<String>,

    pub admin_username: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_password: Option<String>,

    /// Cloud-init payload handed to the machine on first boot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accelerated_networking: Option<bool>,
}

/// Reference to another Azure resource by ID
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubResource {
    pub id: String,
}

/// Subnet a machine's network interface is placed in
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubnetInfo {
    pub vnet_name: String,

    /// Resource group of the virtual network, when it differs from the
    /// machine's resource group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vnet_resource_group: Option<String>,

    pub subnet_name: String,
}

/// Deprecated grouping resource a machine may be placed in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineSet {
    pub id: String,
    pub kind: MachineSetKind,
}

/// Kind discriminator of the deprecated `machineSet` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MachineSetKind {
    #[serde(rename = "vmo")]
    Vmo,
    #[serde(rename = "availabilityset")]
    AvailabilitySet,
}
