use std::collections::BTreeMap;

/// A Swarm service as returned by the service listing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServiceRef {
    pub id: String,
    pub name: String,
    // Derived: value of the com.docker.stack.namespace label, if any
    pub stack: Option<String>,
}

/// Container counts for one stack.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StackStats {
    pub running: usize,
    pub stopped: usize,
    pub other: usize,
    // Reserved; never populated.
    pub total_memory: Option<String>,
    pub total_cpu: Option<String>,
}

impl StackStats {
    pub fn total(&self) -> usize {
        self.running + self.stopped + self.other
    }
}

/// Result of refreshing stats for a set of stacks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatsReport {
    pub stats: BTreeMap<String, StackStats>,
    pub total_services: usize,
    pub active_services: usize,
}

/// Everything the stack list screen shows. Replaced as a unit so the screen
/// never mixes an old listing with new counts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DirectorySnapshot {
    pub stacks: Vec<String>,
    pub stats: BTreeMap<String, StackStats>,
    pub total_services: usize,
    pub active_services: usize,
}

impl DirectorySnapshot {
    pub fn new(stacks: Vec<String>, report: StatsReport) -> Self {
        Self {
            stacks,
            stats: report.stats,
            total_services: report.total_services,
            active_services: report.active_services,
        }
    }

    /// Keep the stack listing, swap in freshly computed counts.
    pub fn with_report(&self, report: StatsReport) -> Self {
        Self::new(self.stacks.clone(), report)
    }

    pub fn stats_for(&self, stack: &str) -> StackStats {
        self.stats.get(stack).cloned().unwrap_or_default()
    }
}
