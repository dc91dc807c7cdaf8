// Re-export all model types from submodules.

pub use app::Screen;
pub use docker::{ContainerLifecycle, ContainerSummary};
pub use stack::{DirectorySnapshot, ServiceRef, StackStats, StatsReport};

mod app;
mod docker;
mod stack;
