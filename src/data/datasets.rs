//! Literal figures behind the charts, counters and export.

use super::models::{
    CategorySlice, CounterFormat, CounterId, CounterSpec, ExportRow, Period, TrendDataset,
};

const TREND_7D: TrendDataset = TrendDataset {
    period: Period::SevenDays,
    labels: &["Jan 8", "Jan 9", "Jan 10", "Jan 11", "Jan 12", "Jan 13", "Jan 14"],
    values: &[12500.0, 15200.0, 18300.0, 14800.0, 22100.0, 19500.0, 25300.0],
};

const TREND_30D: TrendDataset = TrendDataset {
    period: Period::ThirtyDays,
    labels: &["Dec 15", "Dec 20", "Dec 25", "Dec 30", "Jan 5", "Jan 10", "Jan 14"],
    values: &[
        285000.0, 320000.0, 298000.0, 445000.0, 398000.0, 425000.0, 487000.0,
    ],
};

const TREND_90D: TrendDataset = TrendDataset {
    period: Period::NinetyDays,
    labels: &["Oct", "Nov", "Dec", "Jan"],
    values: &[1250000.0, 1450000.0, 1680000.0, 1950000.0],
};

const CATEGORIES: [CategorySlice; 5] = [
    CategorySlice { label: "Electronics", value: 145250.0, color: "#0d6efd" },
    CategorySlice { label: "Fashion", value: 89350.0, color: "#6c757d" },
    CategorySlice { label: "Home & Kitchen", value: 52400.0, color: "#28a745" },
    CategorySlice { label: "Office", value: 38750.0, color: "#ffc107" },
    CategorySlice { label: "Sports", value: 24800.0, color: "#dc3545" },
];

const COUNTERS: [CounterSpec; 3] = [
    CounterSpec {
        id: CounterId::Revenue,
        target: 284562.45,
        prefix: "$",
        suffix: "",
        format: CounterFormat::Currency,
    },
    CounterSpec {
        id: CounterId::Orders,
        target: 1247.0,
        prefix: "",
        suffix: "",
        format: CounterFormat::Integer,
    },
    CounterSpec {
        id: CounterId::Customers,
        target: 856.0,
        prefix: "",
        suffix: "",
        format: CounterFormat::Integer,
    },
];

const GROWTH_RATE: ExportRow = ExportRow { label: "Growth Rate", value: "+18.5%" };

const METRICS: [ExportRow; 4] = [
    ExportRow { label: "Total Revenue", value: "$284562.45" },
    ExportRow { label: "Total Orders", value: "1247" },
    ExportRow { label: "Unique Customers", value: "856" },
    GROWTH_RATE,
];

const TOP_PRODUCTS: [ExportRow; 5] = [
    ExportRow { label: "iPhone 15 Pro", value: "$87550" },
    ExportRow { label: "MacBook Air M2", value: "$74322" },
    ExportRow { label: "Samsung TV 55\"", value: "$56880" },
    ExportRow { label: "Wireless Headphones", value: "$39585" },
    ExportRow { label: "Gaming Chair", value: "$26125" },
];

/// Trend series for a period
pub fn trend_dataset(period: Period) -> &'static TrendDataset {
    match period {
        Period::SevenDays => &TREND_7D,
        Period::ThirtyDays => &TREND_30D,
        Period::NinetyDays => &TREND_90D,
    }
}

pub fn category_dataset() -> &'static [CategorySlice] {
    &CATEGORIES
}

pub fn counter_specs() -> &'static [CounterSpec] {
    &COUNTERS
}

/// Headline metric rows, including the static growth rate
pub fn export_metrics() -> &'static [ExportRow] {
    &METRICS
}

/// Static growth figure shown beside the counters
pub fn growth_rate() -> &'static ExportRow {
    &GROWTH_RATE
}

pub fn top_products() -> &'static [ExportRow] {
    &TOP_PRODUCTS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_labels_and_values_match() {
        let expected = [
            (Period::SevenDays, 7),
            (Period::ThirtyDays, 7),
            (Period::NinetyDays, 4),
        ];
        for (period, len) in expected {
            let data = trend_dataset(period);
            assert_eq!(data.period, period);
            assert_eq!(data.labels.len(), len, "labels for {period}");
            assert_eq!(data.values.len(), len, "values for {period}");
            assert_eq!(data.points().count(), len);
        }
    }

    #[test]
    fn test_category_has_five_slices() {
        let slices = category_dataset();
        assert_eq!(slices.len(), 5);
        assert!(slices.iter().all(|s| s.color.starts_with('#') && s.color.len() == 7));
    }

    #[test]
    fn test_counter_targets() {
        let targets: Vec<f64> = counter_specs().iter().map(|c| c.target).collect();
        assert_eq!(targets, vec![284562.45, 1247.0, 856.0]);
        assert_eq!(counter_specs()[0].format, CounterFormat::Currency);
    }

    #[test]
    fn test_growth_rate_is_exported() {
        assert_eq!(growth_rate().value, "+18.5%");
        assert!(export_metrics().contains(growth_rate()));
    }

    #[test]
    fn test_max_value() {
        assert_eq!(trend_dataset(Period::NinetyDays).max_value(), 1950000.0);
    }
}
