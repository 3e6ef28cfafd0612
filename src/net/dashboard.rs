//! Placement and company record services.
//!
//! SYSTEM CONTEXT
//! ==============
//! Thin wrappers over [`ApiClient`]: one function per dashboard operation.
//! List retrieval takes caller-supplied filter pairs; no client-side
//! validation is performed beyond what the backend enforces.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use super::client::{ApiClient, ApiError};
use super::endpoints;
use super::types::{ApiMessage, CompanyRecord, PlacementRecord};

const COMPANY_DATA: &str = "company data";

/// Fetch all placement records.
///
/// # Errors
///
/// Propagates [`ApiError`] from the client unchanged.
pub async fn fetch_placement_data(client: &ApiClient) -> Result<Vec<PlacementRecord>, ApiError> {
    client
        .get(endpoints::dashboard::GET_PLACEMENT_DATA, &[])
        .await
}

/// Fetch company records matching the given filter pairs.
///
/// # Errors
///
/// Non-2xx statuses come back described as a company-data fetch failure.
pub async fn fetch_company_data(
    client: &ApiClient,
    filters: &[(&str, String)],
) -> Result<Vec<CompanyRecord>, ApiError> {
    client
        .get(endpoints::dashboard::GET_COMPANY_DATA, filters)
        .await
        .map_err(|e| e.describe(COMPANY_DATA))
}

/// Create a placement record; returns the created resource.
///
/// # Errors
///
/// Propagates [`ApiError`] from the client unchanged.
pub async fn add_placement_record(
    client: &ApiClient,
    record: &PlacementRecord,
) -> Result<PlacementRecord, ApiError> {
    client
        .post(endpoints::dashboard::ADD_PLACEMENT_DATA, record)
        .await
}

/// Create a company record; returns the created resource.
///
/// # Errors
///
/// Propagates [`ApiError`] from the client unchanged.
pub async fn add_company_record(
    client: &ApiClient,
    record: &CompanyRecord,
) -> Result<CompanyRecord, ApiError> {
    client
        .post(endpoints::dashboard::ADD_COMPANY_DATA, record)
        .await
}

/// Delete the placement record identified by `params`.
///
/// # Errors
///
/// Propagates [`ApiError`] from the client unchanged.
pub async fn delete_placement_record(
    client: &ApiClient,
    params: &[(&str, String)],
) -> Result<ApiMessage, ApiError> {
    client
        .delete(endpoints::dashboard::DELETE_PLACEMENT_DATA, params)
        .await
}

/// Delete the company record identified by `params`.
///
/// # Errors
///
/// Propagates [`ApiError`] from the client unchanged.
pub async fn delete_company_record(
    client: &ApiClient,
    params: &[(&str, String)],
) -> Result<ApiMessage, ApiError> {
    client
        .delete(endpoints::dashboard::DELETE_COMPANY_DATA, params)
        .await
}
