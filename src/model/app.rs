use std::fmt;

/// Screen the navigation core is currently showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    StackList,
    ActionMenu,
    ContainerList,
    ContainerLogs,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::StackList => write!(f, "stack"),
            Screen::ActionMenu => write!(f, "actionMenu"),
            Screen::ContainerList => write!(f, "containerList"),
            Screen::ContainerLogs => write!(f, "containerLogs"),
        }
    }
}
