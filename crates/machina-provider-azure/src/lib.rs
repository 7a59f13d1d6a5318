//! Azure provider utilities for Machina
//!
//! This crate implements the Azure side of the machine driver contract:
//! decoding the provider spec carried by a machine class, deriving the names
//! of the resources that hang off a VM, and classifying Azure API failures
//! into the status taxonomy the lifecycle controller acts on.
//!
//! # Features
//!
//! - Provider spec model and decoding, including normalization of the
//!   deprecated `machineSet` field
//! - Deterministic NIC, OS disk, data disk, and provider ID naming, with
//!   checked recovery of the VM name
//! - Failure classification: not-found detection, diagnostic response
//!   headers, vendor error code mapping
//!
//! # Example
//!
//! ```
//! use machina_provider_azure::names;
//!
//! let nic = names::nic_name("prod-worker-z1-7f9c4");
//! assert_eq!(nic, "prod-worker-z1-7f9c4-nic");
//! assert_eq!(names::vm_name_from_nic_name(&nic).unwrap(), "prod-worker-z1-7f9c4");
//! ```

pub mod api_error;
pub mod diagnostics;
pub mod error;
pub mod machine_class;
pub mod names;
pub mod spec;
pub mod testhelp;

// Re-exports
pub use api_error::ApiErrorResponse;
pub use error::{AzureError, Result};
pub use machine_class::{ConnectConfig, PROVIDER_AZURE, decode_provider_spec};
pub use spec::{
    DataDisk, HardwareProfile, ImageReference, MachineSet, MachineSetKind, ManagedDiskParameters,
    NetworkProfile, OsDisk, OsProfile, ProviderSpec, StorageProfile, SubResource, SubnetInfo,
    VirtualMachineProperties,
};
