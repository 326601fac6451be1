//! Data models for the dashboard's fixed datasets.

use std::fmt;
use std::str::FromStr;

use crate::error::DashboardError;

/// Time range selecting which trend dataset is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Period {
    SevenDays,
    #[default]
    ThirtyDays,
    NinetyDays,
}

impl Period {
    /// All periods in selector order
    pub const ALL: [Period; 3] = [Period::SevenDays, Period::ThirtyDays, Period::NinetyDays];

    pub fn label(self) -> &'static str {
        match self {
            Period::SevenDays => "7D",
            Period::ThirtyDays => "30D",
            Period::NinetyDays => "90D",
        }
    }

    /// Next period in selector order, wrapping around
    pub fn next(self) -> Self {
        match self {
            Period::SevenDays => Period::ThirtyDays,
            Period::ThirtyDays => Period::NinetyDays,
            Period::NinetyDays => Period::SevenDays,
        }
    }

    /// Previous period in selector order, wrapping around
    pub fn prev(self) -> Self {
        match self {
            Period::SevenDays => Period::NinetyDays,
            Period::ThirtyDays => Period::SevenDays,
            Period::NinetyDays => Period::ThirtyDays,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Period {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DashboardError::UnknownPeriod(s.to_string()))
    }
}

/// A single labelled point of a trend series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendPoint {
    pub label: &'static str,
    pub value: f64,
}

/// Sales trend for one period
#[derive(Debug, Clone, Copy)]
pub struct TrendDataset {
    pub period: Period,
    pub labels: &'static [&'static str],
    pub values: &'static [f64],
}

impl TrendDataset {
    /// Labels zipped with their values, in display order
    pub fn points(&self) -> impl Iterator<Item = TrendPoint> + '_ {
        self.labels
            .iter()
            .zip(self.values.iter())
            .map(|(&label, &value)| TrendPoint { label, value })
    }

    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }
}

/// One slice of the category breakdown
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategorySlice {
    pub label: &'static str,
    pub value: f64,
    /// Hex color, e.g. "#0d6efd"
    pub color: &'static str,
}

/// Which KPI card a counter drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CounterId {
    Revenue,
    Orders,
    Customers,
}

impl CounterId {
    pub fn title(self) -> &'static str {
        match self {
            CounterId::Revenue => "Total Revenue",
            CounterId::Orders => "Total Orders",
            CounterId::Customers => "Unique Customers",
        }
    }
}

/// How a counter value is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterFormat {
    /// Two decimals with thousands separators
    Currency,
    /// Floored integer with thousands separators
    Integer,
}

/// An animated KPI counter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterSpec {
    pub id: CounterId,
    pub target: f64,
    pub prefix: &'static str,
    pub suffix: &'static str,
    pub format: CounterFormat,
}

/// A label/value row of the CSV export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportRow {
    pub label: &'static str,
    pub value: &'static str,
}
