use super::*;

// =============================================================
// ChatbotAnswer forms
// =============================================================

#[test]
fn chatbot_answer_parses_plain_string_body() {
    let answer: ChatbotAnswer =
        serde_json::from_str("\"Placements start in August.\"").unwrap();
    assert_eq!(answer.into_text(), "Placements start in August.");
}

#[test]
fn chatbot_answer_parses_object_body() {
    let answer: ChatbotAnswer =
        serde_json::from_str(r#"{"answer": "42 companies visited."}"#).unwrap();
    assert_eq!(answer.into_text(), "42 companies visited.");
}

#[test]
fn chatbot_answer_rejects_object_without_answer_field() {
    let parsed: Result<ChatbotAnswer, _> = serde_json::from_str(r#"{"reply": "hi"}"#);
    assert!(parsed.is_err());
}

// =============================================================
// Record serialization
// =============================================================

#[test]
fn placement_record_omits_absent_id() {
    let record = PlacementRecord {
        id: None,
        student_name: "A. Student".to_owned(),
        department: "CS".to_owned(),
        company: "Acme".to_owned(),
        role: "SDE".to_owned(),
        package_lpa: 12.5,
        year: 2024,
    };
    let json = serde_json::to_value(&record).unwrap();
    assert!(json.get("id").is_none());
    assert_eq!(json["department"], "CS");
}

#[test]
fn company_record_defaults_missing_roles() {
    let json = r#"{
        "id": "c1",
        "name": "Acme",
        "department": "CS",
        "offers": 7,
        "avg_package_lpa": 10.0,
        "year": 2024
    }"#;
    let record: CompanyRecord = serde_json::from_str(json).unwrap();
    assert!(record.roles_offered.is_empty());
    assert_eq!(record.offers, 7);
}
