use std::collections::HashMap;
use std::sync::Arc;

use bollard::Docker;
use bollard::container::{ListContainersOptions, LogOutput, LogsOptions};
use bollard::models::{ContainerSummary as EngineContainer, Service};
use futures_util::StreamExt;
use tokio::runtime::Runtime;

use crate::error::GatewayError;
use crate::gateway::{Gateway, STACK_NAMESPACE_LABEL};
use crate::model::{ContainerSummary, ServiceRef};
use crate::swarm;

/// Gateway backed by the Docker Engine API (bollard) plus the `docker` CLI
/// for service logs, which the Engine client does not expose.
///
/// Calls block the caller on the owned tokio runtime.
pub struct DockerGateway {
    client: Docker,
    rt: Arc<Runtime>,
}

impl DockerGateway {
    /// Build a client from the environment (`DOCKER_HOST` or the local socket).
    /// Does not contact the daemon.
    pub fn connect(rt: Arc<Runtime>) -> Result<Self, GatewayError> {
        let client = {
            let _guard = rt.enter();
            Docker::connect_with_local_defaults()?
        };
        Ok(Self { client, rt })
    }
}

impl Gateway for DockerGateway {
    fn list_services(&self) -> Result<Vec<ServiceRef>, GatewayError> {
        let services = self.rt.block_on(self.client.list_services::<String>(None))?;
        Ok(services.iter().map(service_to_ref).collect())
    }

    fn list_containers(&self, stack: &str) -> Result<Vec<ContainerSummary>, GatewayError> {
        let mut filters = HashMap::new();
        filters.insert(
            "label".to_string(),
            vec![format!("{}={}", STACK_NAMESPACE_LABEL, stack)],
        );
        let options = ListContainersOptions {
            all: true, // stopped containers feed the "stopped" counter
            filters,
            ..Default::default()
        };

        let summaries = self.rt.block_on(self.client.list_containers(Some(options)))?;
        Ok(summaries.iter().map(summary_to_container).collect())
    }

    fn remove_service(&self, service_id: &str) -> Result<(), GatewayError> {
        self.rt.block_on(self.client.delete_service(service_id))?;
        Ok(())
    }

    fn service_logs(&self, service_id: &str, tail: usize) -> Result<Vec<u8>, GatewayError> {
        swarm::service_logs(service_id, tail)
    }

    fn container_logs(
        &self,
        container_id: &str,
        tail: usize,
        timestamps: bool,
    ) -> Result<Vec<u8>, GatewayError> {
        let options: LogsOptions<String> = LogsOptions {
            stdout: true,
            stderr: true,
            follow: false,
            tail: tail.to_string(),
            timestamps,
            ..Default::default()
        };

        self.rt.block_on(async {
            let mut stream = Box::pin(self.client.logs(container_id, Some(options)));
            let mut buf = Vec::new();
            while let Some(result) = stream.next().await {
                match result? {
                    LogOutput::StdOut { message }
                    | LogOutput::StdErr { message }
                    | LogOutput::Console { message } => buf.extend_from_slice(&message),
                    LogOutput::StdIn { .. } => continue,
                }
            }
            Ok::<_, GatewayError>(buf)
        })
    }
}

// --- Internal helpers ---

fn service_to_ref(s: &Service) -> ServiceRef {
    let id = s.id.clone().unwrap_or_default();
    let spec = s.spec.as_ref();

    let name = spec
        .and_then(|spec| spec.name.clone())
        .unwrap_or_else(|| id.clone());

    let stack = spec
        .and_then(|spec| spec.labels.as_ref())
        .and_then(|labels| labels.get(STACK_NAMESPACE_LABEL))
        .cloned();

    ServiceRef { id, name, stack }
}

fn summary_to_container(s: &EngineContainer) -> ContainerSummary {
    let id = s.id.clone().unwrap_or_default();

    let name = s.names.as_ref()
        .and_then(|n| n.first())
        .map(|n| n.trim_start_matches('/').to_string())
        .unwrap_or_else(|| id.chars().take(12).collect());

    ContainerSummary {
        id,
        name,
        image: s.image.clone().unwrap_or_default(),
        state: s.state.clone().unwrap_or_default(),
    }
}
