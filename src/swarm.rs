use std::process::{Command, Stdio};

use serde::Deserialize;

use crate::error::GatewayError;

/// Swarm state of the local engine, as reported by `docker info`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SwarmClusterInfo {
    pub node_id: String,
    pub is_manager: bool,
    pub managers: u32,
    pub nodes_total: u32,
}

/// Typed struct for docker info Swarm section (avoids serde_json::Value overhead)
#[derive(Deserialize)]
struct DockerInfoSwarm {
    #[serde(rename = "LocalNodeState")]
    #[serde(default)]
    local_node_state: String,
    #[serde(rename = "NodeID")]
    #[serde(default)]
    node_id: String,
    #[serde(rename = "ControlAvailable")]
    #[serde(default)]
    control_available: bool,
    #[serde(rename = "Managers")]
    #[serde(default)]
    managers: u32,
    #[serde(rename = "Nodes")]
    #[serde(default)]
    nodes: u32,
}

#[derive(Deserialize)]
struct DockerInfoPartial {
    #[serde(rename = "Swarm")]
    swarm: Option<DockerInfoSwarm>,
}

/// Detect whether the engine is part of an active swarm by querying `docker info`.
/// Returns None when the CLI is missing, fails, or the node is not in a swarm.
pub fn detect_swarm() -> Option<SwarmClusterInfo> {
    let output = Command::new("docker")
        .args(["info", "--format", "{{json .}}"])
        .stdin(Stdio::null())
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    parse_swarm_info(&String::from_utf8_lossy(&output.stdout))
}

fn parse_swarm_info(text: &str) -> Option<SwarmClusterInfo> {
    let info: DockerInfoPartial = serde_json::from_str(text.trim()).ok()?;
    let swarm = info.swarm?;

    if swarm.local_node_state != "active" {
        return None;
    }

    Some(SwarmClusterInfo {
        node_id: swarm.node_id,
        is_manager: swarm.control_available,
        managers: swarm.managers,
        nodes_total: swarm.nodes,
    })
}

/// Fetch the last `tail` lines of a service's logs via `docker service logs`.
///
/// The CLI replays the service's stdout and stderr on its own two pipes. Both
/// are kept, but as two blocks: every stdout line comes before every stderr
/// line, so the interleaving across the two streams is not preserved.
pub fn service_logs(service_id: &str, tail: usize) -> Result<Vec<u8>, GatewayError> {
    let tail = tail.to_string();
    let output = Command::new("docker")
        .args(["service", "logs", "--no-task-ids", "--tail", &tail, service_id])
        .stdin(Stdio::null())
        .output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(GatewayError::Cli(format!("docker service logs failed: {}", stderr)));
    }

    Ok(stdout_then_stderr(output.stdout, &output.stderr))
}

fn stdout_then_stderr(mut stdout: Vec<u8>, stderr: &[u8]) -> Vec<u8> {
    stdout.extend_from_slice(stderr);
    stdout
}
