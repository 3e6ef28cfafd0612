use super::company_filters;

#[test]
fn empty_department_means_no_filters() {
    assert!(company_filters("").is_empty());
    assert!(company_filters("   ").is_empty());
}

#[test]
fn department_filter_is_trimmed_into_query_pair() {
    let filters = company_filters("  CS ");
    assert_eq!(filters, vec![("department", "CS".to_owned())]);
    assert_eq!(
        crate::net::endpoints::query_string(&filters),
        "department=CS"
    );
}
