use serde::{Deserialize, Deserializer};

// ---------------------------------------------------------------------------
// SalesRecord – one row of the source CSV
// ---------------------------------------------------------------------------

/// A single observation from the historical automobile sales dataset.
/// Field renames follow the CSV headers verbatim (note the lowercase
/// `unemployment_rate` in the source file).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SalesRecord {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Month")]
    pub month: String,
    #[serde(rename = "Recession", deserialize_with = "bool_from_int")]
    pub recession: bool,
    #[serde(rename = "Vehicle_Type")]
    pub vehicle_type: String,
    #[serde(rename = "Automobile_Sales")]
    pub automobile_sales: f64,
    #[serde(rename = "Advertising_Expenditure")]
    pub advertising_expenditure: f64,
    #[serde(rename = "unemployment_rate")]
    pub unemployment_rate: f64,
}

/// The recession flag is stored as `0` / `1` in the CSV.
fn bool_from_int<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match u8::deserialize(deserializer)? {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(serde::de::Error::custom(format!(
            "invalid recession flag: {other} (expected 0 or 1)"
        ))),
    }
}

// ---------------------------------------------------------------------------
// SalesDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed category orders.
/// Immutable after construction; every report is recomputed from it.
#[derive(Debug, Clone)]
pub struct SalesDataset {
    /// All observations (rows), in file order.
    pub records: Vec<SalesRecord>,
    /// Vehicle type labels in first-appearance order.
    pub vehicle_types: Vec<String>,
    /// Month labels in first-appearance order (rows are chronological, so
    /// this is calendar order).
    pub months: Vec<String>,
    /// Distinct years present, ascending.
    pub years: Vec<i32>,
}

impl SalesDataset {
    /// Build category indices from the loaded records.
    pub fn from_records(records: Vec<SalesRecord>) -> Self {
        let mut vehicle_types: Vec<String> = Vec::new();
        let mut months: Vec<String> = Vec::new();
        let mut years: Vec<i32> = Vec::new();

        for rec in &records {
            if !vehicle_types.contains(&rec.vehicle_type) {
                vehicle_types.push(rec.vehicle_type.clone());
            }
            if !months.contains(&rec.month) {
                months.push(rec.month.clone());
            }
            if !years.contains(&rec.year) {
                years.push(rec.year);
            }
        }
        years.sort_unstable();

        SalesDataset {
            records,
            vehicle_types,
            months,
            years,
        }
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
