//! Screen layout and the mount points it provides.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::dashboard::Mounts;
use crate::data::CounterId;

/// Minimum body height for the charts to be laid out
const MIN_CHART_HEIGHT: u16 = 8;
/// Minimum terminal width for the category panel beside the trend
const MIN_CATEGORY_WIDTH: u16 = 100;
/// Minimum width for all counter cards plus the growth card
const MIN_FULL_CARDS_WIDTH: u16 = 80;
/// Minimum width for the three counter cards
const MIN_COUNTER_CARDS_WIDTH: u16 = 60;

/// A KPI card position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Card {
    Counter(CounterId),
    Growth,
}

/// Areas for every panel that fits in the terminal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardLayout {
    pub header: Rect,
    pub cards: Vec<(Card, Rect)>,
    pub trend: Option<Rect>,
    pub category: Option<Rect>,
    pub status: Rect,
}

impl DashboardLayout {
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(5), // KPI cards
                Constraint::Min(0),    // Charts
                Constraint::Length(2), // Status bar
            ])
            .split(area);

        let card_kinds: Vec<Card> = if area.width >= MIN_FULL_CARDS_WIDTH {
            vec![
                Card::Counter(CounterId::Revenue),
                Card::Counter(CounterId::Orders),
                Card::Counter(CounterId::Customers),
                Card::Growth,
            ]
        } else if area.width >= MIN_COUNTER_CARDS_WIDTH {
            vec![
                Card::Counter(CounterId::Revenue),
                Card::Counter(CounterId::Orders),
                Card::Counter(CounterId::Customers),
            ]
        } else {
            vec![Card::Counter(CounterId::Revenue)]
        };

        let card_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![
                Constraint::Ratio(1, card_kinds.len() as u32);
                card_kinds.len()
            ])
            .split(rows[1]);
        let cards = card_kinds.into_iter().zip(card_areas.iter().copied()).collect();

        let body = rows[2];
        let (trend, category) = if body.height < MIN_CHART_HEIGHT {
            (None, None)
        } else if area.width >= MIN_CATEGORY_WIDTH {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(body);
            (Some(cols[0]), Some(cols[1]))
        } else {
            (Some(body), None)
        };

        DashboardLayout {
            header: rows[0],
            cards,
            trend,
            category,
            status: rows[3],
        }
    }

    /// Mount points and counter slots provided by this layout
    pub fn mounts(&self) -> Mounts {
        Mounts {
            trend: self.trend.is_some(),
            category: self.category.is_some(),
            cards: self
                .cards
                .iter()
                .filter_map(|(card, _)| match card {
                    Card::Counter(id) => Some(*id),
                    Card::Growth => None,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_terminal_has_everything() {
        let layout = DashboardLayout::compute(Rect::new(0, 0, 140, 40));
        assert_eq!(layout.mounts(), Mounts::all());
        assert_eq!(layout.cards.len(), 4);
    }

    #[test]
    fn test_narrow_terminal_drops_category() {
        let layout = DashboardLayout::compute(Rect::new(0, 0, 90, 40));
        let mounts = layout.mounts();
        assert!(mounts.trend);
        assert!(!mounts.category);
        assert_eq!(mounts.cards.len(), 3);
    }

    #[test]
    fn test_short_terminal_has_no_charts() {
        let layout = DashboardLayout::compute(Rect::new(0, 0, 140, 15));
        let mounts = layout.mounts();
        assert!(!mounts.trend);
        assert!(!mounts.category);
    }

    #[test]
    fn test_tiny_terminal_keeps_revenue_card() {
        let layout = DashboardLayout::compute(Rect::new(0, 0, 40, 30));
        assert_eq!(layout.mounts().cards, vec![CounterId::Revenue]);
    }
}
