//! Deterministic names for resources that hang off a virtual machine
//!
//! A machine's NIC, OS disk, and data disks are named by suffixing the VM
//! name, so every dependent resource can be found again (and orphans swept)
//! given the VM name alone. Stripping the suffix recovers the VM name; a
//! name that does not carry the expected suffix is reported as an error
//! instead of being truncated blindly.

use crate::error::{AzureError, Result};
use crate::spec::DataDisk;

/// Suffix appended to the VM name for its network interface
pub const NIC_SUFFIX: &str = "-nic";

/// Suffix appended to the VM name for its OS disk
pub const OS_DISK_SUFFIX: &str = "-os-disk";

/// Suffix terminating every data disk name
pub const DATA_DISK_SUFFIX: &str = "-data-disk";

/// Scheme prefix of the provider IDs handed to the lifecycle controller
pub const PROVIDER_ID_PREFIX: &str = "azure:///";

/// Name of the network interface attached to the named VM
pub fn nic_name(vm_name: &str) -> String {
    format!("{}{}", vm_name, NIC_SUFFIX)
}

/// Recover the VM name a NIC name was derived from
pub fn vm_name_from_nic_name(nic_name: &str) -> Result<&str> {
    strip_name_suffix(nic_name, NIC_SUFFIX)
}

/// Name of the OS disk attached to the named VM
pub fn os_disk_name(vm_name: &str) -> String {
    format!("{}{}", vm_name, OS_DISK_SUFFIX)
}

/// Recover the VM name an OS disk name was derived from
pub fn vm_name_from_os_disk_name(os_disk_name: &str) -> Result<&str> {
    strip_name_suffix(os_disk_name, OS_DISK_SUFFIX)
}

/// Name of a data disk attached to the named VM.
///
/// The suffix embeds the disk's LUN, and the disk name when one is set, so
/// several data disks on the same VM stay distinct.
pub fn data_disk_name(vm_name: &str, disk: &DataDisk) -> String {
    format!("{}{}", vm_name, data_disk_suffix(disk))
}

/// Suffix for a data disk: `-<lun>-data-disk`, or `-<name>-<lun>-data-disk`
/// when the disk carries a non-empty name
pub fn data_disk_suffix(disk: &DataDisk) -> String {
    match disk.name.as_deref() {
        Some(name) if !name.is_empty() => format!("-{}-{}{}", name, disk.lun, DATA_DISK_SUFFIX),
        _ => format!("-{}{}", disk.lun, DATA_DISK_SUFFIX),
    }
}

/// Provider ID under which a VM is registered with the lifecycle controller
pub fn provider_id(location: &str, vm_name: &str) -> String {
    format!("{}{}/{}", PROVIDER_ID_PREFIX, location, vm_name)
}

/// Recover the VM name from a provider ID
pub fn vm_name_from_provider_id(provider_id: &str) -> Result<&str> {
    let rest = provider_id
        .strip_prefix(PROVIDER_ID_PREFIX)
        .ok_or_else(|| AzureError::MalformedProviderId(provider_id.to_string()))?;
    match rest.rsplit_once('/') {
        Some((_, vm_name)) if !vm_name.is_empty() => Ok(vm_name),
        _ => Err(AzureError::MalformedProviderId(provider_id.to_string())),
    }
}

fn strip_name_suffix<'a>(name: &'a str, suffix: &'static str) -> Result<&'a str> {
    name.strip_suffix(suffix)
        .ok_or_else(|| AzureError::MissingNameSuffix {
            name: name.to_string(),
            suffix,
        })
}
