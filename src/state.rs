use std::ops::RangeInclusive;

// ---------------------------------------------------------------------------
// Selector state
// ---------------------------------------------------------------------------

/// Years offered by the year dropdown.
pub const YEAR_RANGE: RangeInclusive<i32> = 1980..=2023;

/// The report mode chosen in the first dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportType {
    YearlyStatistics,
    RecessionPeriodStatistics,
}

impl ReportType {
    /// All dropdown options, in display order.
    pub const ALL: [ReportType; 2] = [
        ReportType::YearlyStatistics,
        ReportType::RecessionPeriodStatistics,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ReportType::YearlyStatistics => "Yearly Statistics",
            ReportType::RecessionPeriodStatistics => "Recession Period Statistics",
        }
    }
}

/// The full UI state, independent of rendering.  `None` models the
/// placeholder (nothing chosen yet) state of each dropdown.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SelectorState {
    pub report_type: Option<ReportType>,
    pub selected_year: Option<i32>,
}

/// Whether the year dropdown is interactive.  Only yearly statistics use
/// the year; every other mode (including nothing selected) disables it.
pub fn year_selector_enabled(report_type: Option<ReportType>) -> bool {
    matches!(report_type, Some(ReportType::YearlyStatistics))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
