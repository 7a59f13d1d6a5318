//! Machine lifecycle driver trait definition

use crate::machine::{MachineClass, Secret};
use crate::status::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// Machine lifecycle driver abstraction.
///
/// Cloud providers implement this trait so the lifecycle controller can
/// create, delete, and inspect machines without knowing vendor details.
/// Operations are stateless between calls; failures are reported as
/// [`Status`](crate::status::Status) values whose code drives the
/// controller's retry decisions.
#[async_trait]
pub trait Driver: Send + Sync {
    /// Provision a new machine from its class
    async fn create_machine(&self, req: CreateMachineRequest) -> Result<CreateMachineResponse>;

    /// Tear down a machine and the resources that hang off it
    async fn delete_machine(&self, req: DeleteMachineRequest) -> Result<DeleteMachineResponse>;

    /// Look up the provider ID and node name of an existing machine
    async fn get_machine_status(
        &self,
        req: GetMachineStatusRequest,
    ) -> Result<GetMachineStatusResponse>;

    /// List all machines belonging to a machine class
    async fn list_machines(&self, req: ListMachinesRequest) -> Result<ListMachinesResponse>;
}

/// Request to provision a machine
#[derive(Debug, Clone)]
pub struct CreateMachineRequest {
    /// Machine object name; doubles as the VM name on the provider side
    pub machine_name: String,

    /// Class the machine is provisioned from
    pub machine_class: MachineClass,

    /// Credentials for the provider API
    pub secret: Secret,
}

/// Response to a successful machine creation
#[derive(Debug, Clone)]
pub struct CreateMachineResponse {
    /// Provider-scoped machine identifier (for example `azure:///westeurope/vm-0`)
    pub provider_id: String,

    /// Node name the machine registers under
    pub node_name: String,

    /// Opaque provider state to be echoed back on later calls
    pub last_known_state: Option<String>,
}

/// Request to tear down a machine
#[derive(Debug, Clone)]
pub struct DeleteMachineRequest {
    pub machine_name: String,
    pub machine_class: MachineClass,
    pub secret: Secret,
}

/// Response to a successful machine deletion
#[derive(Debug, Clone)]
pub struct DeleteMachineResponse {
    /// Opaque provider state at the time of deletion
    pub last_known_state: Option<String>,
}

/// Request to look up a single machine
#[derive(Debug, Clone)]
pub struct GetMachineStatusRequest {
    pub machine_name: String,
    pub machine_class: MachineClass,
    pub secret: Secret,
}

/// Response describing an existing machine
#[derive(Debug, Clone)]
pub struct GetMachineStatusResponse {
    pub provider_id: String,
    pub node_name: String,
}

/// Request to list the machines of a class
#[derive(Debug, Clone)]
pub struct ListMachinesRequest {
    pub machine_class: MachineClass,
    pub secret: Secret,
}

/// Response listing known machines
#[derive(Debug, Clone)]
pub struct ListMachinesResponse {
    /// Machines indexed by provider ID, mapped to their machine names
    pub machine_list: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::Code;
    use crate::status::Status;
    use serde_json::json;
    use std::sync::Mutex;

    /// In-memory driver used to exercise the trait seam
    struct FakeDriver {
        location: String,
        machines: Mutex<HashMap<String, String>>,
    }

    impl FakeDriver {
        fn new(location: &str) -> Self {
            Self {
                location: location.to_string(),
                machines: Mutex::new(HashMap::new()),
            }
        }

        fn provider_id(&self, machine_name: &str) -> String {
            format!("fake:///{}/{}", self.location, machine_name)
        }
    }

    #[async_trait]
    impl Driver for FakeDriver {
        async fn create_machine(&self, req: CreateMachineRequest) -> Result<CreateMachineResponse> {
            let provider_id = self.provider_id(&req.machine_name);
            self.machines
                .lock()
                .unwrap()
                .insert(provider_id.clone(), req.machine_name.clone());
            Ok(CreateMachineResponse {
                provider_id,
                node_name: req.machine_name,
                last_known_state: None,
            })
        }

        async fn delete_machine(&self, req: DeleteMachineRequest) -> Result<DeleteMachineResponse> {
            let provider_id = self.provider_id(&req.machine_name);
            self.machines.lock().unwrap().remove(&provider_id);
            Ok(DeleteMachineResponse {
                last_known_state: None,
            })
        }

        async fn get_machine_status(
            &self,
            req: GetMachineStatusRequest,
        ) -> Result<GetMachineStatusResponse> {
            let provider_id = self.provider_id(&req.machine_name);
            let machines = self.machines.lock().unwrap();
            match machines.get(&provider_id) {
                Some(node_name) => Ok(GetMachineStatusResponse {
                    provider_id: provider_id.clone(),
                    node_name: node_name.clone(),
                }),
                None => Err(Status::not_found(format!(
                    "machine {} not found",
                    req.machine_name
                ))),
            }
        }

        async fn list_machines(&self, _req: ListMachinesRequest) -> Result<ListMachinesResponse> {
            Ok(ListMachinesResponse {
                machine_list: self.machines.lock().unwrap().clone(),
            })
        }
    }

    fn fake_machine_class() -> MachineClass {
        MachineClass::new("test-class", "fake", json!({}))
    }

    fn create_request(machine_name: &str) -> CreateMachineRequest {
        CreateMachineRequest {
            machine_name: machine_name.to_string(),
            machine_class: fake_machine_class(),
            secret: Secret::new(),
        }
    }

    #[tokio::test]
    async fn test_create_then_get_status() {
        let driver = FakeDriver::new("region-0");
        let created = driver.create_machine(create_request("vm-0")).await.unwrap();
        assert_eq!(created.provider_id, "fake:///region-0/vm-0");

        let status = driver
            .get_machine_status(GetMachineStatusRequest {
                machine_name: "vm-0".to_string(),
                machine_class: fake_machine_class(),
                secret: Secret::new(),
            })
            .await
            .unwrap();
        assert_eq!(status.provider_id, created.provider_id);
        assert_eq!(status.node_name, "vm-0");
    }

    #[tokio::test]
    async fn test_get_status_of_unknown_machine() {
        let driver = FakeDriver::new("region-0");
        let err = driver
            .get_machine_status(GetMachineStatusRequest {
                machine_name: "vm-9".to_string(),
                machine_class: fake_machine_class(),
                secret: Secret::new(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, Code::NotFound);
    }

    #[tokio::test]
    async fn test_delete_then_list() {
        let driver = FakeDriver::new("region-0");
        driver.create_machine(create_request("vm-0")).await.unwrap();
        driver.create_machine(create_request("vm-1")).await.unwrap();

        driver
            .delete_machine(DeleteMachineRequest {
                machine_name: "vm-0".to_string(),
                machine_class: fake_machine_class(),
                secret: Secret::new(),
            })
            .await
            .unwrap();

        let listed = driver
            .list_machines(ListMachinesRequest {
                machine_class: fake_machine_class(),
                secret: Secret::new(),
            })
            .await
            .unwrap();
        assert_eq!(listed.machine_list.len(), 1);
        assert_eq!(
            listed.machine_list.get("fake:///region-0/vm-1"),
            Some(&"vm-1".to_string())
        );
    }
}
