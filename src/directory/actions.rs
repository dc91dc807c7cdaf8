use std::fmt::Write as _;

use tracing::{info, warn};

use crate::error::StackError;
use crate::gateway::Gateway;
use crate::model::ServiceRef;

use super::StackDirectory;

/// Lines fetched per service for the stack-level log view.
const STACK_LOG_TAIL: usize = 50;
/// Lines fetched for a single container.
const CONTAINER_LOG_TAIL: usize = 100;

impl<G: Gateway> StackDirectory<G> {
    /// Services carrying the stack label, in listing order.
    fn stack_services(&self, stack: &str) -> Result<Vec<ServiceRef>, StackError> {
        let services = self
            .gateway
            .list_services()
            .map_err(|source| StackError::ListServices {
                stack: stack.to_string(),
                source,
            })?;
        Ok(services
            .into_iter()
            .filter(|s| s.stack.as_deref() == Some(stack))
            .collect())
    }

    /// Remove every service of the stack. Stops at the first failed removal;
    /// services removed before it stay removed.
    pub fn kill_stack(&self, stack: &str) -> Result<(), StackError> {
        let services = self.stack_services(stack)?;
        info!(stack = %stack, services = services.len(), "killing stack");

        for svc in &services {
            self.gateway
                .remove_service(&svc.id)
                .map_err(|source| StackError::RemoveService {
                    service: svc.name.clone(),
                    source,
                })?;
            info!(service = %svc.name, "service removed");
        }
        Ok(())
    }

    /// Kill the stack, then report that bringing it back is not possible from
    /// here. Never returns `Ok`.
    pub fn restart_stack(&self, stack: &str) -> Result<(), StackError> {
        self.kill_stack(stack)
            .map_err(|e| StackError::Kill(Box::new(e)))?;
        Err(StackError::RestartUnsupported)
    }

    /// Concatenated recent logs for every service of the stack. A service
    /// whose logs cannot be fetched gets an inline error line instead.
    pub fn stack_logs(&self, stack: &str) -> Result<String, StackError> {
        let services = self.stack_services(stack)?;
        let mut out = String::new();

        for svc in &services {
            let logs = match self.gateway.service_logs(&svc.id, STACK_LOG_TAIL) {
                Ok(bytes) => bytes,
                Err(e) => {
                    warn!(service = %svc.name, error = %e, "service logs unavailable");
                    let _ = writeln!(out, "Error getting logs for service {}: {}", svc.name, e);
                    continue;
                }
            };

            let _ = writeln!(out, "Logs for service: {}", svc.name);
            out.push_str(&String::from_utf8_lossy(&logs));
            out.push_str("\n---\n");
        }

        Ok(out)
    }

    pub fn container_logs(&self, container_id: &str) -> Result<String, StackError> {
        let bytes = self
            .gateway
            .container_logs(container_id, CONTAINER_LOG_TAIL, true)
            .map_err(|source| StackError::ContainerLogs {
                container: container_id.to_string(),
                source,
            })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::error::StackError;
    use crate::gateway::testing::{FakeGateway, service};

    use super::StackDirectory;

    fn web_gateway() -> FakeGateway {
        let gw = FakeGateway::default();
        *gw.services.borrow_mut() = vec![
            service("s1", "web_api", Some("web")),
            service("s2", "web_worker", Some("web")),
            service("d1", "db_pg", Some("db")),
            service("s3", "web_front", Some("web")),
        ];
        gw
    }

    #[test]
    fn kill_removes_only_matching_services() {
        let gw = web_gateway();
        StackDirectory::new(&gw).kill_stack("web").unwrap();
        assert_eq!(gw.count("remove_service"), 3);
        let left: Vec<String> = gw.services.borrow().iter().map(|s| s.id.clone()).collect();
        assert_eq!(left, vec!["d1".to_string()]);
    }

    #[test]
    fn kill_aborts_at_first_failed_removal() {
        let mut gw = web_gateway();
        gw.fail_remove.insert("s2".into());

        let err = StackDirectory::new(&gw).kill_stack("web").unwrap_err();
        assert!(matches!(&err, StackError::RemoveService { service, .. } if service == "web_worker"));
        assert!(err.to_string().contains("web_worker"));

        let removals: Vec<String> = gw
            .calls()
            .into_iter()
            .filter(|c| c.starts_with("remove_service"))
            .collect();
        assert_eq!(removals, vec!["remove_service s1".to_string(), "remove_service s2".to_string()]);
        // s1 stays removed, s3 never attempted.
        assert!(gw.services.borrow().iter().any(|s| s.id == "s3"));
        assert!(!gw.services.borrow().iter().any(|s| s.id == "s1"));
    }

    #[test]
    fn kill_listing_failure_names_stack() {
        let gw = FakeGateway {
            fail_list_services: true,
            ..Default::default()
        };
        let err = StackDirectory::new(&gw).kill_stack("web").unwrap_err();
        assert_eq!(
            err.to_string(),
            "error listing services for stack web: service listing refused"
        );
    }

    #[test]
    fn restart_always_fails_after_successful_kill() {
        let gw = web_gateway();
        let err = StackDirectory::new(&gw).restart_stack("web").unwrap_err();
        assert!(matches!(err, StackError::RestartUnsupported));
        assert_eq!(
            err.to_string(),
            "full stack restart requires external deployment mechanism"
        );
        assert_eq!(gw.count("remove_service"), 3);
        // Nothing beyond listing and removal was asked of the gateway.
        assert!(gw
            .calls()
            .iter()
            .all(|c| c == "list_services" || c.starts_with("remove_service")));
    }

    #[test]
    fn restart_propagates_kill_failure() {
        let mut gw = web_gateway();
        gw.fail_remove.insert("s1".into());
        let err = StackDirectory::new(&gw).restart_stack("web").unwrap_err();
        assert!(matches!(err, StackError::Kill(_)));
        assert_eq!(
            err.to_string(),
            "error killing stack: error removing service web_api: removal refused"
        );
    }

    #[test]
    fn stack_logs_isolates_per_service_failures() {
        let mut logs = HashMap::new();
        logs.insert("s1".to_string(), "api up".to_string());
        logs.insert("s3".to_string(), "front up".to_string());
        let mut gw = web_gateway();
        gw.service_logs = logs;
        gw.fail_service_logs.insert("s2".into());

        let out = StackDirectory::new(&gw).stack_logs("web").unwrap();
        assert_eq!(
            out,
            "Logs for service: web_api\napi up\n---\n\
             Error getting logs for service web_worker: no such service\n\
             Logs for service: web_front\nfront up\n---\n"
        );
        assert!(gw.calls().contains(&"service_logs s1 50".to_string()));
    }

    #[test]
    fn container_logs_requests_timestamped_tail() {
        let mut gw = FakeGateway::default();
        gw.container_logs.insert("c1".into(), "2024-01-01T00:00:00Z hello\n".into());

        let out = StackDirectory::new(&gw).container_logs("c1").unwrap();
        assert_eq!(out, "2024-01-01T00:00:00Z hello\n");
        assert_eq!(gw.calls(), vec!["container_logs c1 100 true".to_string()]);
    }

    #[test]
    fn container_logs_error_names_container() {
        let mut gw = FakeGateway::default();
        gw.fail_container_logs.insert("c9".into());
        let err = StackDirectory::new(&gw).container_logs("c9").unwrap_err();
        assert_eq!(err.to_string(), "error getting logs for container c9: container gone");
    }
}
