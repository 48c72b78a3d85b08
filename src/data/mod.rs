/// Data layer: core types, loading, and aggregation.
///
/// Architecture:
/// ```text
///  historical_automobile_sales.csv (HTTP, fetched once)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  GET + parse → SalesDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ SalesDataset  │  Vec<SalesRecord>, category orders
///   └──────────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  grouped means / sums → chart data
///   └───────────┘
/// ```

pub mod aggregate;
pub mod loader;
pub mod model;
