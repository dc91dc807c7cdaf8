use std::io::{self, Write};

use crate::model::ContainerSummary;
use super::Theme;
use super::shared::{safe_truncate, tail_lines, write_at, write_footer, write_rule, write_selectable};

/// Rows taken by the header, rule and footer around the log area.
const CHROME_ROWS: u16 = 8;
const MIN_LOG_ROWS: u16 = 10;
/// First row below the title rule.
const FIRST_LOG_ROW: u16 = 3;

pub fn render_container_logs(
    out: &mut impl Write,
    container: Option<&ContainerSummary>,
    log_output: &str,
    viewport: (u16, u16),
    theme: &Theme,
) -> io::Result<()> {
    let (width, height) = viewport;

    let Some(container) = container else {
        return write_selectable(out, 2, 2, "No container selected", false, theme);
    };

    let title = format!("Logs: {} ({})", container.name, container.short_id());
    write_rule(out, 2, width, &title, theme.accent)?;

    // The footer owns the last row; the tail must fit between it and the rule.
    let visible = height.saturating_sub(FIRST_LOG_ROW + 1);
    let log_rows = height.saturating_sub(CHROME_ROWS).max(MIN_LOG_ROWS).min(visible);
    for (i, line) in tail_lines(log_output, log_rows as usize).into_iter().enumerate() {
        write_at(out, 1, FIRST_LOG_ROW + i as u16, safe_truncate(line, width.saturating_sub(2) as usize))?;
    }

    write_footer(out, viewport, "Press Esc/B to go back to container list", theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(n: usize) -> String {
        (1..=n).map(|i| format!("line{:02}\n", i)).collect()
    }

    fn frame(log: &str, viewport: (u16, u16)) -> String {
        let c = ContainerSummary {
            id: "0123456789abcdef".into(),
            name: "web_api.1".into(),
            image: "nginx".into(),
            state: "running".into(),
        };
        let mut buf = Vec::new();
        render_container_logs(&mut buf, Some(&c), log, viewport, &Theme::default()).unwrap();
        String::from_utf8_lossy(&buf).into_owned()
    }

    #[test]
    fn short_terminal_keeps_newest_lines() {
        let out = frame(&numbered(20), (80, 12));
        assert!(out.contains("line19"));
        assert!(out.contains("line20"));
        assert!(out.contains("line13"));
        assert!(!out.contains("line12"));
    }

    #[test]
    fn tall_terminal_shows_height_minus_chrome() {
        let out = frame(&numbered(40), (80, 30));
        assert!(out.contains("line40"));
        assert!(out.contains("line19"));
        assert!(!out.contains("line18"));
    }

    #[test]
    fn missing_container_message() {
        let mut buf = Vec::new();
        render_container_logs(&mut buf, None, "", (80, 24), &Theme::default()).unwrap();
        assert!(String::from_utf8_lossy(&buf).contains("No container selected"));
    }
}
