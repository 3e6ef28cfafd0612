use super::*;

fn submitted(input: &str) -> (ChatState, Option<String>) {
    let mut state = ChatState::new(0.0);
    state.input = input.to_owned();
    let query = state.submit(1.0);
    (state, query)
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn new_transcript_is_seeded_with_bot_greeting() {
    let state = ChatState::new(0.0);
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].id, 1);
    assert_eq!(state.messages[0].sender, Sender::Bot);
    assert_eq!(state.messages[0].text, GREETING);
    assert!(!state.is_typing);
    assert!(state.input.is_empty());
}

// =============================================================
// Submit transitions
// =============================================================

#[test]
fn submit_appends_exactly_one_user_message() {
    let (state, query) = submitted("When do placements start?");
    assert_eq!(query.as_deref(), Some("When do placements start?"));
    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[1].sender, Sender::User);
    assert_eq!(state.messages[1].text, "When do placements start?");
}

#[test]
fn submit_trims_surrounding_whitespace() {
    let (state, query) = submitted("  hello there  ");
    assert_eq!(query.as_deref(), Some("hello there"));
    assert_eq!(state.messages[1].text, "hello there");
}

#[test]
fn submit_clears_input_and_sets_composing_flag() {
    let (state, _) = submitted("hi");
    assert!(state.input.is_empty());
    assert!(state.is_typing);
}

#[test]
fn empty_submit_leaves_transcript_unchanged() {
    let (state, query) = submitted("");
    assert_eq!(query, None);
    assert_eq!(state.messages.len(), 1);
    assert!(!state.is_typing);
}

#[test]
fn whitespace_only_submit_leaves_transcript_unchanged() {
    let (state, query) = submitted("   \n\t ");
    assert_eq!(query, None);
    assert_eq!(state.messages.len(), 1);
    assert!(!state.is_typing);
}

// =============================================================
// Receive transitions
// =============================================================

#[test]
fn receive_appends_bot_message_and_clears_composing_flag() {
    let (mut state, _) = submitted("question");
    state.receive("Placements start in August.", 2.0);
    assert_eq!(state.messages.len(), 3);
    assert_eq!(state.messages[2].sender, Sender::Bot);
    assert_eq!(state.messages[2].text, "Placements start in August.");
    assert!(!state.is_typing);
}

#[test]
fn full_round_appends_user_then_bot_in_order() {
    let (mut state, query) = submitted("how many companies?");
    state.receive("42 companies visited.", 2.0);

    assert!(query.is_some());
    let senders: Vec<Sender> = state.messages.iter().map(|m| m.sender).collect();
    assert_eq!(senders, vec![Sender::Bot, Sender::User, Sender::Bot]);
}

#[test]
fn message_ids_are_monotonic_transcript_ordinals() {
    let (mut state, _) = submitted("first");
    state.receive("answer", 2.0);
    state.input = "second".to_owned();
    state.submit(3.0);
    state.receive("answer two", 4.0);

    let ids: Vec<u32> = state.messages.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

// =============================================================
// Failure conversion
// =============================================================

#[test]
fn query_failure_maps_to_processing_fallback() {
    let err = ApiError::Transport("connection refused".to_owned());
    assert_eq!(fallback_for(&err), PROCESSING_FALLBACK);

    let err = ApiError::Status { status: 500 };
    assert_eq!(fallback_for(&err), PROCESSING_FALLBACK);
}

#[test]
fn decode_failure_maps_to_knowledge_base_fallback() {
    let err = ApiError::Decode("expected string".to_owned());
    assert_eq!(fallback_for(&err), KNOWLEDGE_BASE_FALLBACK);
}

#[test]
fn failed_round_still_appends_exactly_one_bot_message() {
    let (mut state, _) = submitted("question");
    let err = ApiError::Transport("offline".to_owned());
    state.receive(fallback_for(&err), 2.0);

    assert_eq!(state.messages.len(), 3);
    assert_eq!(state.messages[2].text, PROCESSING_FALLBACK);
    assert!(!state.is_typing);
}
