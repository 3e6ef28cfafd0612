//! Company-insights list state.

#[cfg(test)]
#[path = "insights_test.rs"]
mod insights_test;

use crate::net::types::CompanyInsights;

/// Insight cards plus load/error status and the active name filter.
#[derive(Clone, Debug, Default)]
pub struct InsightsState {
    pub items: Vec<CompanyInsights>,
    pub filter: String,
    pub loading: bool,
    pub error: Option<String>,
}
