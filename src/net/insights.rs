//! Company insights service.

#[cfg(test)]
#[path = "insights_test.rs"]
mod insights_test;

use super::client::{ApiClient, ApiError};
use super::endpoints;
use super::types::CompanyInsights;

const COMPANY_INSIGHTS: &str = "company insights data";

/// Fetch company insights, optionally filtered to one company.
///
/// # Errors
///
/// Non-2xx statuses come back described as an insights fetch failure.
pub async fn fetch_company_insights(
    client: &ApiClient,
    company_name: Option<&str>,
) -> Result<Vec<CompanyInsights>, ApiError> {
    client
        .get(
            endpoints::insights::GET_COMPANY_INSIGHTS,
            &insights_query(company_name),
        )
        .await
        .map_err(|e| e.describe(COMPANY_INSIGHTS))
}

fn insights_query(company_name: Option<&str>) -> Vec<(&'static str, String)> {
    match company_name {
        Some(name) => vec![("company_name", name.to_owned())],
        None => Vec::new(),
    }
}
