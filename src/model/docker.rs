/// Coarse lifecycle bucket used for the per-stack counters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerLifecycle {
    Running,
    Stopped,
    Other,
}

impl ContainerLifecycle {
    /// Classify a raw Docker state string.
    pub fn classify(state: &str) -> Self {
        match state {
            "running" => ContainerLifecycle::Running,
            "exited" | "stopped" => ContainerLifecycle::Stopped,
            _ => ContainerLifecycle::Other,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContainerSummary {
    pub id: String,    // full ID as reported by the engine
    pub name: String,  // leading '/' stripped
    pub image: String,
    pub state: String, // raw state: "running", "exited", "paused", ...
}

impl ContainerSummary {
    pub fn lifecycle(&self) -> ContainerLifecycle {
        ContainerLifecycle::classify(&self.state)
    }

    /// First 10 characters of the ID, as shown in tables and log titles.
    pub fn short_id(&self) -> &str {
        match self.id.char_indices().nth(10) {
            Some((idx, _)) => &self.id[..idx],
            None => &self.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_buckets() {
        assert_eq!(ContainerLifecycle::classify("running"), ContainerLifecycle::Running);
        assert_eq!(ContainerLifecycle::classify("exited"), ContainerLifecycle::Stopped);
        assert_eq!(ContainerLifecycle::classify("stopped"), ContainerLifecycle::Stopped);
        for other in ["paused", "restarting", "created", "dead", ""] {
            assert_eq!(ContainerLifecycle::classify(other), ContainerLifecycle::Other);
        }
    }

    #[test]
    fn short_id_handles_short_ids() {
        let c = ContainerSummary {
            id: "0123456789abcdef".into(),
            ..Default::default()
        };
        assert_eq!(c.short_id(), "0123456789");

        let c = ContainerSummary {
            id: "abc".into(),
            ..Default::default()
        };
        assert_eq!(c.short_id(), "abc");
    }
}
