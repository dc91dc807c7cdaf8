use std::io;

use thiserror::Error;

/// Failure of a single call against the orchestration engine.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{0}")]
    Docker(#[from] bollard::errors::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The `docker` CLI ran but exited non-zero; holds its trimmed stderr.
    #[error("{0}")]
    Cli(String),

    #[error("{0}")]
    Other(String),
}

/// Stack-level operation failures, wrapped with the stack, service or
/// container they concern.
#[derive(Debug, Error)]
pub enum StackError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("error listing containers for stack {stack}: {source}")]
    ListContainers {
        stack: String,
        #[source]
        source: GatewayError,
    },

    #[error("error listing services for stack {stack}: {source}")]
    ListServices {
        stack: String,
        #[source]
        source: GatewayError,
    },

    #[error("error removing service {service}: {source}")]
    RemoveService {
        service: String,
        #[source]
        source: GatewayError,
    },

    #[error("error killing stack: {0}")]
    Kill(#[source] Box<StackError>),

    #[error("full stack restart requires external deployment mechanism")]
    RestartUnsupported,

    #[error("error getting logs for container {container}: {source}")]
    ContainerLogs {
        container: String,
        #[source]
        source: GatewayError,
    },
}

/// Errors that stop the program before the first frame is drawn.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Unable to start async runtime: {0}")]
    Runtime(#[source] io::Error),

    #[error("Unable to create Docker client: {0}")]
    Connect(#[source] GatewayError),

    #[error("Error listing stacks: {0}")]
    InitialListing(#[source] GatewayError),

    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),
}
