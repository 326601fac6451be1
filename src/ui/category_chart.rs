//! Sales-by-category bar chart widget.

use ratatui::{
    layout::{Alignment, Direction, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use super::theme::Theme;
use crate::dashboard::charts::CategoryChartModel;
use crate::format::grouped_integer;

pub struct CategoryChart<'a> {
    model: Option<&'a CategoryChartModel>,
    theme: &'a Theme,
}

impl<'a> CategoryChart<'a> {
    pub fn new(model: Option<&'a CategoryChartModel>, theme: &'a Theme) -> Self {
        CategoryChart { model, theme }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Sales by Category ")
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title_style(self.theme.title_style());

        let Some(model) = self.model else {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            frame.render_widget(
                Paragraph::new("No data available")
                    .style(Style::default().add_modifier(Modifier::DIM))
                    .alignment(Alignment::Center),
                inner,
            );
            return;
        };

        let bars: Vec<Bar> = model
            .bars
            .iter()
            .map(|bar| {
                Bar::default()
                    .value(bar.value)
                    .label(Line::from(bar.label))
                    .text_value(format!(
                        "${} ({:.1}%)",
                        grouped_integer(bar.value as f64),
                        model.share(bar)
                    ))
                    .style(Style::default().fg(bar.color))
                    .value_style(Style::default().fg(self.theme.fg).bg(bar.color))
            })
            .collect();

        let chart = BarChart::default()
            .block(block)
            .direction(Direction::Horizontal)
            .bar_width(1)
            .bar_gap(1)
            .data(BarGroup::default().bars(&bars));

        frame.render_widget(chart, area);
    }
}
