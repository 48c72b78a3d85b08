use std::io::Read;

use anyhow::{Context, Result};
use thiserror::Error;

use super::model::{SalesDataset, SalesRecord};

/// Fixed location of the historical automobile sales dataset.
pub const DATA_URL: &str = "https://cf-courses-data.s3.us.cloud-object-storage.appdomain.cloud/\
     IBMDeveloperSkillsNetwork-DV0101EN-SkillsNetwork/Data%20Files/historical_automobile_sales.csv";

/// Columns the CSV must carry for the dashboard to work.
const REQUIRED_COLUMNS: [&str; 7] = [
    "Year",
    "Month",
    "Recession",
    "Vehicle_Type",
    "Automobile_Sales",
    "Advertising_Expenditure",
    "unemployment_rate",
];

/// Schema-level problems with the fetched CSV.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("CSV is missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("dataset contains no rows")]
    Empty,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Fetch and parse the dataset.  Called once at startup; any failure here is
/// fatal (the dashboard cannot serve without its data).
pub fn fetch_dataset() -> Result<SalesDataset> {
    log::info!("Fetching dataset from {DATA_URL}");
    let response = reqwest::blocking::get(DATA_URL)
        .context("requesting dataset")?
        .error_for_status()
        .context("dataset request rejected")?;
    let body = response.text().context("reading dataset response body")?;
    read_csv(body.as_bytes())
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Parse the dataset from any reader.  Kept separate from the HTTP fetch so
/// it can run against in-memory CSV text.
pub fn read_csv(input: impl Read) -> Result<SalesDataset> {
    let mut reader = csv::Reader::from_reader(input);

    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(DatasetError::MissingColumn(col).into());
        }
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<SalesRecord>().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(record);
    }

    if records.is_empty() {
        return Err(DatasetError::Empty.into());
    }

    Ok(SalesDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
