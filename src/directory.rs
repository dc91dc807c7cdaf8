//! Stack discovery and per-stack container counts.

mod actions;

use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::error::{GatewayError, StackError};
use crate::gateway::Gateway;
use crate::model::{
    ContainerLifecycle, ContainerSummary, DirectorySnapshot, StackStats, StatsReport,
};

/// Derives stacks from the service listing and runs stack-level actions
/// against a [`Gateway`].
pub struct StackDirectory<G> {
    gateway: G,
}

impl<G: Gateway> StackDirectory<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Distinct stack names, sorted. Services without a stack label are ignored.
    pub fn list_stacks(&self) -> Result<Vec<String>, GatewayError> {
        let services = self.gateway.list_services()?;
        let names: BTreeSet<String> = services.into_iter().filter_map(|s| s.stack).collect();
        Ok(names.into_iter().collect())
    }

    pub fn list_containers(&self, stack: &str) -> Result<Vec<ContainerSummary>, StackError> {
        self.gateway
            .list_containers(stack)
            .map_err(|source| StackError::ListContainers {
                stack: stack.to_string(),
                source,
            })
    }

    /// Counts for every stack that could be listed. A failing stack is logged
    /// and left out of the report.
    pub fn refresh_all_stats(&self, stacks: &[String]) -> StatsReport {
        let mut report = StatsReport::default();

        for stack in stacks {
            let containers = match self.list_containers(stack) {
                Ok(c) => c,
                Err(e) => {
                    warn!(stack = %stack, error = %e, "skipping stack in stats refresh");
                    continue;
                }
            };

            let stats = compute_stats(&containers);
            report.total_services += stats.total();
            report.active_services += stats.running;
            report.stats.insert(stack.clone(), stats);
        }

        debug!(
            stacks = stacks.len(),
            total = report.total_services,
            active = report.active_services,
            "stats refreshed"
        );
        report
    }

    /// Full directory load: stack listing followed by counts for each stack.
    pub fn load(&self) -> Result<DirectorySnapshot, GatewayError> {
        let stacks = self.list_stacks()?;
        let report = self.refresh_all_stats(&stacks);
        Ok(DirectorySnapshot::new(stacks, report))
    }
}

pub fn compute_stats(containers: &[ContainerSummary]) -> StackStats {
    let mut stats = StackStats::default();
    for c in containers {
        match c.lifecycle() {
            ContainerLifecycle::Running => stats.running += 1,
            ContainerLifecycle::Stopped => stats.stopped += 1,
            ContainerLifecycle::Other => stats.other += 1,
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::gateway::testing::{FakeGateway, container, service};

    fn states(list: &[&str]) -> Vec<ContainerSummary> {
        list.iter()
            .enumerate()
            .map(|(i, s)| container(&format!("c{}", i), "x", s))
            .collect()
    }

    #[test]
    fn compute_stats_classifies_states() {
        let input = states(&["running", "exited", "stopped", "paused", "restarting", "created", ""]);
        let stats = compute_stats(&input);
        assert_eq!(stats.running, 1);
        assert_eq!(stats.stopped, 2);
        assert_eq!(stats.other, 4);
        assert_eq!(stats.total(), input.len());
        assert_eq!(stats.total_memory, None);
        assert_eq!(stats.total_cpu, None);
    }

    #[test]
    fn compute_stats_empty() {
        assert_eq!(compute_stats(&[]), StackStats::default());
    }

    #[test]
    fn list_stacks_dedupes_and_sorts() {
        let gw = FakeGateway::default();
        *gw.services.borrow_mut() = vec![
            service("1", "web_api", Some("web")),
            service("2", "db_pg", Some("db")),
            service("3", "web_front", Some("web")),
            service("4", "loose", None),
        ];
        let dir = StackDirectory::new(&gw);
        assert_eq!(dir.list_stacks().unwrap(), vec!["db".to_string(), "web".to_string()]);
    }

    #[test]
    fn list_stacks_propagates_gateway_error() {
        let gw = FakeGateway {
            fail_list_services: true,
            ..Default::default()
        };
        let err = StackDirectory::new(&gw).list_stacks().unwrap_err();
        assert_eq!(err.to_string(), "service listing refused");
    }

    #[test]
    fn list_containers_wraps_error_with_stack() {
        let gw = FakeGateway {
            fail_containers_for: ["web".to_string()].into(),
            ..Default::default()
        };
        let err = StackDirectory::new(&gw).list_containers("web").unwrap_err();
        assert_eq!(
            err.to_string(),
            "error listing containers for stack web: container listing refused"
        );
    }

    #[test]
    fn refresh_all_stats_skips_failing_stack() {
        let mut containers = HashMap::new();
        containers.insert("web".to_string(), states(&["running", "running", "exited"]));
        containers.insert("db".to_string(), states(&["running"]));
        let gw = FakeGateway {
            containers,
            fail_containers_for: ["db".to_string()].into(),
            ..Default::default()
        };

        let report = StackDirectory::new(&gw)
            .refresh_all_stats(&["db".to_string(), "web".to_string()]);
        assert!(!report.stats.contains_key("db"));
        assert_eq!(report.stats["web"].running, 2);
        assert_eq!(report.total_services, 3);
        assert_eq!(report.active_services, 2);
    }

    #[test]
    fn load_builds_snapshot() {
        let mut containers = HashMap::new();
        containers.insert("web".to_string(), states(&["running", "paused"]));
        let gw = FakeGateway {
            containers,
            ..Default::default()
        };
        *gw.services.borrow_mut() = vec![service("1", "web_api", Some("web"))];

        let snap = StackDirectory::new(&gw).load().unwrap();
        assert_eq!(snap.stacks, vec!["web".to_string()]);
        assert_eq!(snap.stats_for("web").other, 1);
        assert_eq!(snap.total_services, 2);
        assert_eq!(snap.active_services, 1);
    }
}
