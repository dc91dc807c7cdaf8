use crate::model::{ContainerSummary, DirectorySnapshot, Screen};

/// Viewport assumed until the terminal reports its size.
pub const DEFAULT_VIEWPORT: (u16, u16) = (100, 30);

/// Everything the presenter needs to draw a frame. Mutated only by input
/// handling and the gateway results it triggers.
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationState {
    pub screen: Screen,
    pub selected_stack: usize,
    pub selected_container: usize,
    pub directory: DirectorySnapshot,
    pub containers: Vec<ContainerSummary>,
    pub log_output: String,
    pub viewport: (u16, u16), // (width, height)
    pub debug: bool,
}

impl NavigationState {
    pub fn new(directory: DirectorySnapshot, debug: bool) -> Self {
        Self {
            screen: Screen::StackList,
            selected_stack: 0,
            selected_container: 0,
            directory,
            containers: Vec::new(),
            log_output: String::new(),
            viewport: DEFAULT_VIEWPORT,
            debug,
        }
    }

    pub fn stacks(&self) -> &[String] {
        &self.directory.stacks
    }

    pub fn current_stack(&self) -> Option<&str> {
        self.directory.stacks.get(self.selected_stack).map(String::as_str)
    }

    pub fn current_container(&self) -> Option<&ContainerSummary> {
        self.containers.get(self.selected_container)
    }

    /// Swap in a new listing and keep the stack cursor inside it.
    pub fn replace_directory(&mut self, directory: DirectorySnapshot) {
        self.directory = directory;
        self.selected_stack = clamp_index(self.selected_stack, self.directory.stacks.len());
    }

    /// Swap in a new container listing; the cursor always restarts at the top.
    pub fn set_containers(&mut self, containers: Vec<ContainerSummary>) {
        self.containers = containers;
        self.selected_container = 0;
    }
}

/// Largest valid index for a list of `len` items (0 when empty).
pub fn clamp_index(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}

/// Move a cursor one step without wrapping. Returns false if it did not move.
pub fn step_cursor(index: &mut usize, len: usize, down: bool) -> bool {
    let next = if down {
        clamp_index(*index + 1, len)
    } else {
        index.saturating_sub(1)
    };
    let moved = next != *index;
    *index = next;
    moved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StatsReport;

    fn snapshot(stacks: &[&str]) -> DirectorySnapshot {
        DirectorySnapshot::new(
            stacks.iter().map(|s| s.to_string()).collect(),
            StatsReport::default(),
        )
    }

    #[test]
    fn step_cursor_clamps_both_ends() {
        let mut idx = 0;
        assert!(!step_cursor(&mut idx, 3, false));
        assert_eq!(idx, 0);
        assert!(step_cursor(&mut idx, 3, true));
        assert!(step_cursor(&mut idx, 3, true));
        assert!(!step_cursor(&mut idx, 3, true));
        assert_eq!(idx, 2);
    }

    #[test]
    fn step_cursor_on_empty_list_stays_at_zero() {
        let mut idx = 0;
        assert!(!step_cursor(&mut idx, 0, true));
        assert!(!step_cursor(&mut idx, 0, false));
        assert_eq!(idx, 0);
    }

    #[test]
    fn replace_directory_clamps_selection() {
        let mut state = NavigationState::new(snapshot(&["a", "b", "c"]), false);
        state.selected_stack = 2;
        state.replace_directory(snapshot(&["a"]));
        assert_eq!(state.selected_stack, 0);
        assert_eq!(state.current_stack(), Some("a"));

        state.replace_directory(snapshot(&[]));
        assert_eq!(state.selected_stack, 0);
        assert_eq!(state.current_stack(), None);
    }

    #[test]
    fn set_containers_resets_cursor() {
        let mut state = NavigationState::new(snapshot(&["a"]), false);
        state.selected_container = 4;
        state.set_containers(Vec::new());
        assert_eq!(state.selected_container, 0);
        assert!(state.current_container().is_none());
    }
}
