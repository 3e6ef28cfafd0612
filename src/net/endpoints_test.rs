use super::*;

// =============================================================
// URL construction
// =============================================================

#[test]
fn api_url_joins_base_and_path() {
    assert_eq!(
        api_url("http://localhost:8000", dashboard::GET_PLACEMENT_DATA),
        "http://localhost:8000/dashboard/get-data"
    );
}

#[test]
fn base_url_falls_back_to_localhost_outside_browser() {
    assert_eq!(base_url(), "http://localhost:8000");
}

#[test]
fn request_url_without_query_has_no_separator() {
    let url = request_url("http://localhost:8000", chatbot::GET_ANSWER, &[]);
    assert_eq!(url, "http://localhost:8000/chatbot/get-chatbot-answer");
}

#[test]
fn request_url_appends_encoded_query() {
    let url = request_url(
        "http://localhost:8000",
        dashboard::GET_COMPANY_DATA,
        &[("department", "CS".to_owned())],
    );
    assert_eq!(
        url,
        "http://localhost:8000/dashboard/get-company-data?department=CS"
    );
    assert!(url.contains("department=CS"));
}

// =============================================================
// Query-string encoding
// =============================================================

#[test]
fn query_string_joins_multiple_pairs() {
    let qs = query_string(&[
        ("department", "CS".to_owned()),
        ("year", "2024".to_owned()),
    ]);
    assert_eq!(qs, "department=CS&year=2024");
}

#[test]
fn query_string_encodes_spaces_as_plus() {
    let qs = query_string(&[("company_name", "Acme Corp".to_owned())]);
    assert_eq!(qs, "company_name=Acme+Corp");
}

#[test]
fn query_string_percent_encodes_reserved_characters() {
    let qs = query_string(&[("query", "avg package?".to_owned())]);
    assert_eq!(qs, "query=avg+package%3F");
}

#[test]
fn query_string_percent_encodes_utf8_bytes() {
    let qs = query_string(&[("q", "caf\u{e9}".to_owned())]);
    assert_eq!(qs, "q=caf%C3%A9");
}
