//! Boundary between the navigation core and the orchestration engine.

use crate::error::GatewayError;
use crate::model::{ContainerSummary, ServiceRef};

/// Label Docker sets on every service and container deployed by `docker stack deploy`.
pub const STACK_NAMESPACE_LABEL: &str = "com.docker.stack.namespace";

/// The five calls the core makes against the orchestration engine.
/// Every call is synchronous and may fail.
pub trait Gateway {
    /// All services, with their stack label when present.
    fn list_services(&self) -> Result<Vec<ServiceRef>, GatewayError>;

    /// Containers (any state) carrying the given stack label.
    fn list_containers(&self, stack: &str) -> Result<Vec<ContainerSummary>, GatewayError>;

    fn remove_service(&self, service_id: &str) -> Result<(), GatewayError>;

    /// Last `tail` lines of combined stdout/stderr for a service.
    fn service_logs(&self, service_id: &str, tail: usize) -> Result<Vec<u8>, GatewayError>;

    /// Last `tail` lines of combined stdout/stderr for a container.
    fn container_logs(
        &self,
        container_id: &str,
        tail: usize,
        timestamps: bool,
    ) -> Result<Vec<u8>, GatewayError>;
}

impl<G: Gateway + ?Sized> Gateway for &G {
    fn list_services(&self) -> Result<Vec<ServiceRef>, GatewayError> {
        (**self).list_services()
    }

    fn list_containers(&self, stack: &str) -> Result<Vec<ContainerSummary>, GatewayError> {
        (**self).list_containers(stack)
    }

    fn remove_service(&self, service_id: &str) -> Result<(), GatewayError> {
        (**self).remove_service(service_id)
    }

    fn service_logs(&self, service_id: &str, tail: usize) -> Result<Vec<u8>, GatewayError> {
        (**self).service_logs(service_id, tail)
    }

    fn container_logs(
        &self,
        container_id: &str,
        tail: usize,
        timestamps: bool,
    ) -> Result<Vec<u8>, GatewayError> {
        (**self).container_logs(container_id, tail, timestamps)
    }
}

/// In-memory gateway for unit tests. Records every call it receives.
#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::{HashMap, HashSet};

    use super::Gateway;
    use crate::error::GatewayError;
    use crate::model::{ContainerSummary, ServiceRef};

    #[derive(Default)]
    pub struct FakeGateway {
        pub services: RefCell<Vec<ServiceRef>>,
        pub containers: HashMap<String, Vec<ContainerSummary>>,
        pub service_logs: HashMap<String, String>,
        pub container_logs: HashMap<String, String>,
        pub fail_list_services: bool,
        pub fail_containers_for: HashSet<String>,
        pub fail_remove: HashSet<String>,
        pub fail_service_logs: HashSet<String>,
        pub fail_container_logs: HashSet<String>,
        pub calls: RefCell<Vec<String>>,
    }

    pub fn service(id: &str, name: &str, stack: Option<&str>) -> ServiceRef {
        ServiceRef {
            id: id.into(),
            name: name.into(),
            stack: stack.map(str::to_string),
        }
    }

    pub fn container(id: &str, name: &str, state: &str) -> ContainerSummary {
        ContainerSummary {
            id: id.into(),
            name: name.into(),
            image: format!("{}:latest", name),
            state: state.into(),
        }
    }

    impl FakeGateway {
        pub fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        pub fn count(&self, prefix: &str) -> usize {
            self.calls.borrow().iter().filter(|c| c.starts_with(prefix)).count()
        }

        fn record(&self, call: String) {
            self.calls.borrow_mut().push(call);
        }
    }

    impl Gateway for FakeGateway {
        fn list_services(&self) -> Result<Vec<ServiceRef>, GatewayError> {
            self.record("list_services".into());
            if self.fail_list_services {
                return Err(GatewayError::Other("service listing refused".into()));
            }
            Ok(self.services.borrow().clone())
        }

        fn list_containers(&self, stack: &str) -> Result<Vec<ContainerSummary>, GatewayError> {
            self.record(format!("list_containers {}", stack));
            if self.fail_containers_for.contains(stack) {
                return Err(GatewayError::Other("container listing refused".into()));
            }
            Ok(self.containers.get(stack).cloned().unwrap_or_default())
        }

        fn remove_service(&self, service_id: &str) -> Result<(), GatewayError> {
            self.record(format!("remove_service {}", service_id));
            if self.fail_remove.contains(service_id) {
                return Err(GatewayError::Other("removal refused".into()));
            }
            self.services.borrow_mut().retain(|s| s.id != service_id);
            Ok(())
        }

        fn service_logs(&self, service_id: &str, tail: usize) -> Result<Vec<u8>, GatewayError> {
            self.record(format!("service_logs {} {}", service_id, tail));
            if self.fail_service_logs.contains(service_id) {
                return Err(GatewayError::Other("no such service".into()));
            }
            Ok(self.service_logs.get(service_id).cloned().unwrap_or_default().into_bytes())
        }

        fn container_logs(
            &self,
            container_id: &str,
            tail: usize,
            timestamps: bool,
        ) -> Result<Vec<u8>, GatewayError> {
            self.record(format!("container_logs {} {} {}", container_id, tail, timestamps));
            if self.fail_container_logs.contains(container_id) {
                return Err(GatewayError::Other("container gone".into()));
            }
            Ok(self.container_logs.get(container_id).cloned().unwrap_or_default().into_bytes())
        }
    }
}
