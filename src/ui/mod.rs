//! Terminal User Interface components for the sales dashboard.

pub mod category_chart;
mod help;
pub mod layout;
pub mod theme;
pub mod trend_chart;
pub mod widgets;

pub use help::{HelpContext, HelpOverlay};
pub use theme::Theme;
