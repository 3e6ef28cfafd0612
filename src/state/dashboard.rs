//! Record-list state for the dashboard page.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::types::{CompanyRecord, PlacementRecord, UserProfile};

/// Placement and company lists plus load/error status.
#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    pub placements: Vec<PlacementRecord>,
    pub companies: Vec<CompanyRecord>,
    /// Signed-in user, shown in the toolbar; `None` until the profile loads.
    pub profile: Option<UserProfile>,
    pub loading: bool,
    pub error: Option<String>,
}
