use super::*;

#[test]
fn company_data_failure_is_descriptive() {
    let err = ApiError::Status { status: 500 }.describe(COMPANY_DATA);
    assert_eq!(err.to_string(), "failed to fetch company data: status 500");
}

#[test]
fn company_data_transport_failure_keeps_original_error() {
    let err = ApiError::Transport("dns".to_owned()).describe(COMPANY_DATA);
    assert_eq!(err, ApiError::Transport("dns".to_owned()));
}
