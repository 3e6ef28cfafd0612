use super::*;

#[test]
fn insights_failure_is_descriptive() {
    let err = ApiError::Status { status: 503 }.describe(COMPANY_INSIGHTS);
    assert_eq!(
        err.to_string(),
        "failed to fetch company insights data: status 503"
    );
}

#[test]
fn insights_query_empty_without_filter() {
    assert!(insights_query(None).is_empty());
}

#[test]
fn insights_query_carries_company_name() {
    let query = insights_query(Some("Acme Corp"));
    assert_eq!(query, vec![("company_name", "Acme Corp".to_owned())]);
    assert_eq!(
        crate::net::endpoints::query_string(&query),
        "company_name=Acme+Corp"
    );
}
