use super::*;

#[test]
fn query_parameter_is_url_encoded() {
    let url = endpoints::request_url(
        "http://localhost:8000",
        endpoints::chatbot::GET_ANSWER,
        &[("query", "highest package at Acme?".to_owned())],
    );
    assert_eq!(
        url,
        "http://localhost:8000/chatbot/get-chatbot-answer?query=highest+package+at+Acme%3F"
    );
}

#[test]
fn answer_text_resolves_from_either_body_form() {
    let plain: ChatbotAnswer = serde_json::from_str("\"Placements start in August.\"").unwrap();
    let structured: ChatbotAnswer =
        serde_json::from_str(r#"{"answer": "42 companies visited."}"#).unwrap();
    assert_eq!(plain.into_text(), "Placements start in August.");
    assert_eq!(structured.into_text(), "42 companies visited.");
}
