//! Sales trend line chart widget.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use super::theme::Theme;
use crate::dashboard::charts::TrendChartModel;

pub struct TrendChart<'a> {
    model: Option<&'a TrendChartModel>,
    theme: &'a Theme,
}

impl<'a> TrendChart<'a> {
    pub fn new(model: Option<&'a TrendChartModel>, theme: &'a Theme) -> Self {
        TrendChart { model, theme }
    }

    fn block(&self, title: String) -> Block<'a> {
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title_style(self.theme.title_style())
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let Some(model) = self.model else {
            self.render_empty(frame, area);
            return;
        };

        let line = Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(self.theme.trend_line))
            .data(&model.points);

        // Dots on each data point, drawn over the line
        let points = Dataset::default()
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(self.theme.fg))
            .data(&model.points);

        let x_labels: Vec<Span> = model.labels.iter().map(|l| Span::raw(*l)).collect();
        let y_labels: Vec<Span> = model
            .y_labels
            .iter()
            .map(|l| Span::raw(l.as_str()))
            .collect();

        let chart = Chart::new(vec![line, points])
            .block(self.block(format!(" Sales Trend ({}) ", model.period)))
            .x_axis(
                Axis::default()
                    .style(self.theme.muted_style())
                    .bounds(model.x_bounds)
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .style(self.theme.muted_style())
                    .bounds(model.y_bounds)
                    .labels(y_labels),
            );

        frame.render_widget(chart, area);
    }

    fn render_empty(&self, frame: &mut Frame, area: Rect) {
        let block = self.block(" Sales Trend ".to_string());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let message = Paragraph::new("No data available")
            .style(Style::default().add_modifier(Modifier::DIM))
            .alignment(Alignment::Center);

        frame.render_widget(message, inner);
    }
}
