use crossterm::style::Color;

/// Colors used by the presenter. Passed explicitly into every render call.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub primary: Color,   // header bar, selection
    pub accent: Color,    // log panel
    pub success: Color,   // running
    pub danger: Color,    // stopped, debug overlay
    pub warning: Color,   // other states, status messages
    pub text: Color,
    pub subtext: Color,
    pub highlight: Color, // panel titles
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Rgb { r: 0xFF, g: 0x5F, b: 0x87 },
            accent: Color::Rgb { r: 0xFF, g: 0xAF, b: 0x00 },
            success: Color::Rgb { r: 0x50, g: 0xFA, b: 0x7B },
            danger: Color::Rgb { r: 0xFF, g: 0x55, b: 0x55 },
            warning: Color::Rgb { r: 0xF1, g: 0xFA, b: 0x8C },
            text: Color::Rgb { r: 0xF8, g: 0xF8, b: 0xF2 },
            subtext: Color::Rgb { r: 0xBF, g: 0xBF, b: 0xBF },
            highlight: Color::Rgb { r: 0xBD, g: 0x93, b: 0xF9 },
        }
    }
}

impl Theme {
    /// Color for a raw container state string.
    pub fn state_color(&self, state: &str) -> Color {
        match crate::model::ContainerLifecycle::classify(state) {
            crate::model::ContainerLifecycle::Running => self.success,
            crate::model::ContainerLifecycle::Stopped => self.danger,
            crate::model::ContainerLifecycle::Other => self.warning,
        }
    }
}
