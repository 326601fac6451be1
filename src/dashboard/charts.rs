//! Chart instances and the registry that owns them.
//!
//! The registry holds at most one live instance per chart slot. Rendering into
//! a slot always disposes the previous instance first, and rendering without a
//! mount point is a no-op that leaves the slot untouched.

use std::str::FromStr;

use ratatui::style::Color;
use tracing::debug;

use crate::data::{category_dataset, trend_dataset, Period, TrendDataset};
use crate::format::currency_tick;

/// Headroom added above the largest trend value
const TREND_Y_PADDING: f64 = 0.10;

/// Chart slots on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartSlot {
    Trend,
    Category,
}

/// A laid-out panel a chart can attach to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountPoint {
    pub slot: ChartSlot,
}

impl MountPoint {
    pub fn new(slot: ChartSlot) -> Self {
        MountPoint { slot }
    }
}

/// Line chart model for a sales trend
#[derive(Debug, Clone, PartialEq)]
pub struct TrendChartModel {
    pub period: Period,
    pub labels: Vec<&'static str>,
    /// (index, value) pairs
    pub points: Vec<(f64, f64)>,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    pub y_labels: Vec<String>,
}

impl TrendChartModel {
    pub fn build(data: &TrendDataset) -> Self {
        let points: Vec<(f64, f64)> = data
            .points()
            .enumerate()
            .map(|(i, p)| (i as f64, p.value))
            .collect();
        let labels = data.points().map(|p| p.label).collect();

        let x_max = (points.len().saturating_sub(1) as f64).max(1.0);

        // Axis always starts at zero
        let mut y_max = data.max_value() * (1.0 + TREND_Y_PADDING);
        if y_max <= 0.0 {
            y_max = 1.0;
        }
        let y_labels = vec![
            currency_tick(0.0),
            currency_tick(y_max / 2.0),
            currency_tick(y_max),
        ];

        TrendChartModel {
            period: data.period,
            labels,
            points,
            x_bounds: [0.0, x_max],
            y_bounds: [0.0, y_max],
            y_labels,
        }
    }
}

/// One bar of the category breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBar {
    pub label: &'static str,
    pub value: u64,
    pub color: Color,
}

/// Bar chart model for the category breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryChartModel {
    pub bars: Vec<CategoryBar>,
    pub total: u64,
}

impl CategoryChartModel {
    pub fn build() -> Self {
        let bars: Vec<CategoryBar> = category_dataset()
            .iter()
            .map(|slice| CategoryBar {
                label: slice.label,
                value: slice.value.round() as u64,
                color: Color::from_str(slice.color).unwrap_or(Color::Gray),
            })
            .collect();
        let total = bars.iter().map(|b| b.value).sum();
        CategoryChartModel { bars, total }
    }

    /// Share of the total for a bar, in percent
    pub fn share(&self, bar: &CategoryBar) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        bar.value as f64 * 100.0 / self.total as f64
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartKind {
    Trend(TrendChartModel),
    Category(CategoryChartModel),
}

/// A chart bound to a mount point
#[derive(Debug, Clone, PartialEq)]
pub struct ChartInstance {
    pub id: u64,
    pub mount: MountPoint,
    pub kind: ChartKind,
}

impl ChartInstance {
    pub fn as_trend(&self) -> Option<&TrendChartModel> {
        match &self.kind {
            ChartKind::Trend(model) => Some(model),
            ChartKind::Category(_) => None,
        }
    }

    pub fn as_category(&self) -> Option<&CategoryChartModel> {
        match &self.kind {
            ChartKind::Category(model) => Some(model),
            ChartKind::Trend(_) => None,
        }
    }
}

/// Owner of the dashboard's chart instances
#[derive(Debug, Default)]
pub struct ChartRegistry {
    trend: Option<ChartInstance>,
    category: Option<ChartInstance>,
    next_id: u64,
    disposed: usize,
}

impl ChartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot_mut(&mut self, slot: ChartSlot) -> &mut Option<ChartInstance> {
        match slot {
            ChartSlot::Trend => &mut self.trend,
            ChartSlot::Category => &mut self.category,
        }
    }

    pub fn get(&self, slot: ChartSlot) -> Option<&ChartInstance> {
        match slot {
            ChartSlot::Trend => self.trend.as_ref(),
            ChartSlot::Category => self.category.as_ref(),
        }
    }

    pub fn trend(&self) -> Option<&TrendChartModel> {
        self.trend.as_ref().and_then(ChartInstance::as_trend)
    }

    pub fn category(&self) -> Option<&CategoryChartModel> {
        self.category.as_ref().and_then(ChartInstance::as_category)
    }

    /// Number of live instances across all slots
    #[allow(dead_code)] // Used in tests
    pub fn live_count(&self) -> usize {
        usize::from(self.trend.is_some()) + usize::from(self.category.is_some())
    }

    /// Number of instances disposed so far
    #[allow(dead_code)] // Used in tests
    pub fn disposed_count(&self) -> usize {
        self.disposed
    }

    /// Dispose the instance in a slot. Returns true if one existed.
    pub fn dispose(&mut self, slot: ChartSlot) -> bool {
        match self.slot_mut(slot).take() {
            Some(instance) => {
                self.disposed += 1;
                debug!(id = instance.id, slot = ?instance.mount.slot, "disposed chart instance");
                true
            }
            None => false,
        }
    }

    fn install(&mut self, mount: MountPoint, kind: ChartKind) -> &ChartInstance {
        self.dispose(mount.slot);

        let id = self.next_id;
        self.next_id += 1;
        debug!(id, slot = ?mount.slot, "created chart instance");

        self.slot_mut(mount.slot)
            .insert(ChartInstance { id, mount, kind })
    }

    /// (Re)build the trend chart for a period.
    ///
    /// Returns `None` without touching the registry when there is no trend
    /// mount point.
    pub fn render_trend(
        &mut self,
        period: Period,
        mount: Option<MountPoint>,
    ) -> Option<&ChartInstance> {
        let mount = mount.filter(|m| m.slot == ChartSlot::Trend)?;
        let model = TrendChartModel::build(trend_dataset(period));
        Some(self.install(mount, ChartKind::Trend(model)))
    }

    /// (Re)build the category chart. Same discipline as [`Self::render_trend`].
    pub fn render_category(&mut self, mount: Option<MountPoint>) -> Option<&ChartInstance> {
        let mount = mount.filter(|m| m.slot == ChartSlot::Category)?;
        Some(self.install(mount, ChartKind::Category(CategoryChartModel::build())))
    }
}
