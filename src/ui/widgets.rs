//! UI widgets for the sales dashboard.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::layout::Card;
use super::theme::Theme;
use crate::dashboard::counters::CounterBoard;
use crate::dashboard::selector::PeriodControl;
use crate::data::growth_rate;

/// Title bar with the period selector and refresh indicator
pub struct Header<'a> {
    controls: &'a [PeriodControl],
    spinner: Option<char>,
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(controls: &'a [PeriodControl], spinner: Option<char>, theme: &'a Theme) -> Self {
        Header {
            controls,
            spinner,
            theme,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(" Sales Dashboard ", self.theme.title_style()),
            Span::raw("  "),
        ];

        for (i, control) in self.controls.iter().enumerate() {
            let style = if control.active {
                self.theme.highlight_style()
            } else {
                self.theme.normal_style()
            };
            spans.push(Span::styled(
                format!("[{}] ", i + 1),
                Style::default().add_modifier(Modifier::DIM),
            ));
            spans.push(Span::styled(format!(" {} ", control.period), style));
            spans.push(Span::raw(" "));
        }

        let refresh = match self.spinner {
            Some(frame_char) => format!("  {frame_char} Refreshing"),
            None => "  [r] Refresh  [e] Export".to_string(),
        };
        spans.push(Span::styled(refresh, self.theme.muted_style()));

        let paragraph = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(self.theme.border_style()),
        );

        frame.render_widget(paragraph, area);
    }
}

/// A single KPI card
pub struct KpiCard<'a> {
    card: Card,
    board: &'a CounterBoard,
    theme: &'a Theme,
}

impl<'a> KpiCard<'a> {
    pub fn new(card: Card, board: &'a CounterBoard, theme: &'a Theme) -> Self {
        KpiCard { card, board, theme }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let (title, value, value_style) = match self.card {
            Card::Counter(id) => (
                id.title(),
                self.board.text(id).unwrap_or("—").to_string(),
                self.theme.value_style(),
            ),
            Card::Growth => {
                let growth = growth_rate();
                (growth.label, growth.value.to_string(), self.theme.positive_style())
            }
        };

        let paragraph = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(value, value_style)),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" {title} "))
                .borders(Borders::ALL)
                .border_style(self.theme.border_style())
                .title_style(self.theme.muted_style()),
        );

        frame.render_widget(paragraph, area);
    }
}

/// Status bar widget
pub struct StatusBar<'a> {
    message: Option<&'a str>,
    error: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(message: Option<&'a str>, error: Option<&'a str>, theme: &'a Theme) -> Self {
        StatusBar {
            message,
            error,
            theme,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let line = if let Some(e) = self.error {
            Line::from(Span::styled(format!("Error: {e}"), self.theme.error_style()))
        } else {
            match self.message {
                Some(m) => Line::from(format!("sales-dashboard: {m} | [h] Help [q] Quit")),
                None => Line::from("sales-dashboard | [h] Help [q] Quit"),
            }
        };

        let paragraph = Paragraph::new(line).block(Block::default().borders(Borders::TOP));

        frame.render_widget(paragraph, area);
    }
}
