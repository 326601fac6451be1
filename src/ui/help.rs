//! Help overlay: key bindings plus the dashboard's current settings.

use std::path::Path;

use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::theme::Theme;
use crate::data::Period;

const BINDINGS: [(&str, &[(&str, &str)]); 3] = [
    (
        "Period",
        &[
            ("1 / 2 / 3", "Show 7D / 30D / 90D trend"),
            ("← / →", "Previous / next period"),
        ],
    ),
    ("Data", &[("r", "Refresh figures"), ("e", "Export CSV")]),
    (
        "General",
        &[
            ("h / ? / F1", "Toggle this help"),
            ("Esc", "Close help"),
            ("q", "Quit"),
        ],
    ),
];

/// Dashboard settings shown at the top of the overlay
#[derive(Debug, Clone, Copy)]
pub struct HelpContext<'a> {
    pub period: Period,
    pub export_dir: &'a Path,
    pub animating: bool,
}

pub struct HelpOverlay<'a> {
    context: HelpContext<'a>,
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    pub fn new(context: HelpContext<'a>, theme: &'a Theme) -> Self {
        HelpOverlay { context, theme }
    }

    fn section(&self, name: &str) -> Line<'static> {
        Line::from(Span::styled(
            format!("  {name}"),
            Style::default()
                .add_modifier(Modifier::BOLD)
                .add_modifier(Modifier::UNDERLINED),
        ))
    }

    fn entry(&self, key: &str, desc: String) -> Line<'static> {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{key:<14}"), Style::default().fg(self.theme.title)),
            Span::raw(desc),
        ])
    }

    /// Overlay body, one entry per line
    fn lines(&self) -> Vec<Line<'static>> {
        let ctx = &self.context;
        let mut lines = vec![
            Line::from(""),
            self.section("Now showing"),
            self.entry("Period", ctx.period.to_string()),
            self.entry("Exports to", ctx.export_dir.display().to_string()),
            self.entry(
                "Counters",
                if ctx.animating { "animating" } else { "settled" }.to_string(),
            ),
            Line::from(""),
        ];

        for (name, bindings) in BINDINGS {
            lines.push(self.section(name));
            lines.extend(
                bindings
                    .iter()
                    .map(|(key, desc)| self.entry(key, desc.to_string())),
            );
            lines.push(Line::from(""));
        }
        lines
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let lines = self.lines();
        let popup_area = popup_rect(60, lines.len() as u16 + 2, area);
        frame.render_widget(Clear, popup_area);

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(" Help ")
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(self.theme.border_style())
                    .title_style(self.theme.title_style())
                    .style(self.theme.surface_style()),
            )
            .wrap(Wrap { trim: false });

        frame.render_widget(paragraph, popup_area);
    }
}

/// Centered popup of `percent_x` width and `height` rows, clipped to `area`
fn popup_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    popup
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_lines_show_current_settings() {
        let theme = Theme::default();
        let overlay = HelpOverlay::new(
            HelpContext {
                period: Period::NinetyDays,
                export_dir: Path::new("/tmp/exports"),
                animating: false,
            },
            &theme,
        );
        let text: Vec<String> = overlay.lines().iter().map(line_text).collect();

        assert!(text.iter().any(|l| l.contains("Period") && l.ends_with("90D")));
        assert!(text.iter().any(|l| l.ends_with("/tmp/exports")));
        assert!(text.iter().any(|l| l.ends_with("settled")));
        assert!(text.iter().any(|l| l.contains("Export CSV")));
    }

    #[test]
    fn test_popup_rect_is_centered_and_clipped() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = popup_rect(60, 20, area);
        assert_eq!((popup.x, popup.y, popup.width, popup.height), (20, 15, 60, 20));

        let short = Rect::new(0, 0, 100, 10);
        assert_eq!(popup_rect(60, 20, short).height, 10);
    }
}
