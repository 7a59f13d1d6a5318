//! Machina driver contract
//!
//! This crate defines the seam between the machine lifecycle controller and
//! cloud-specific providers: the [`Driver`] trait with its
//! create/delete/status/list operations, the [`MachineClass`] envelope that
//! carries an opaque provider spec, and the [`Code`]/[`Status`] taxonomy
//! providers use to report failures in a form the controller can act on.
//!
//! Provider implementations live in their own crates and only depend on the
//! types defined here.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │          Machine Lifecycle Controller            │
//! │        (reconciles desired machine state)        │
//! └─────────────────┬───────────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────────┐
//! │                machina-driver                    │
//! │  ┌──────────────────────────────────────────┐   │
//! │  │           Driver Contract                 │   │
//! │  │  trait Driver { create/delete/... }       │   │
//! │  └──────────────────────────────────────────┘   │
//! │  ┌──────────────┐  ┌──────────────┐            │
//! │  │ MachineClass │  │ Code/Status  │            │
//! │  └──────────────┘  └──────────────┘            │
//! └───────┬─────────────────────────────────────────┘
//!         │
//! ┌───────▼───────┐
//! │     azure     │
//! │   provider    │
//! └───────────────┘
//! ```

pub mod codes;
pub mod driver;
pub mod machine;
pub mod status;

// Re-exports
pub use codes::{Code, UnknownCode};
pub use driver::{
    CreateMachineRequest, CreateMachineResponse, DeleteMachineRequest, DeleteMachineResponse,
    Driver, GetMachineStatusRequest, GetMachineStatusResponse, ListMachinesRequest,
    ListMachinesResponse,
};
pub use machine::{MachineClass, Secret};
pub use status::{Result, Status};
