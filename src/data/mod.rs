//! Data layer holding the dashboard's fixed figures.
//!
//! Every value shown or exported by the dashboard is a constant defined here;
//! nothing is fetched or persisted.

mod datasets;
mod models;

pub use datasets::{
    category_dataset, counter_specs, export_metrics, growth_rate, top_products, trend_dataset,
};
pub use models::{CounterFormat, CounterId, CounterSpec, ExportRow, Period, TrendDataset};
