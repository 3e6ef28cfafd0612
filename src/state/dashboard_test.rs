use super::*;

// =============================================================
// DashboardState defaults
// =============================================================

#[test]
fn dashboard_state_default_is_empty_and_idle() {
    let state = DashboardState::default();
    assert!(state.placements.is_empty());
    assert!(state.companies.is_empty());
    assert!(state.profile.is_none());
    assert!(!state.loading);
    assert!(state.error.is_none());
}
