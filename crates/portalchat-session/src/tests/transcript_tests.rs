use crate::transcript::Transcript;
use portalchat_types::{Message, Role};
use pretty_assertions::assert_eq;

#[test]
fn test_window_over_three_messages() {
    let mut transcript = Transcript::new();
    transcript.append(Role::User, "A");
    transcript.append(Role::Assistant, "B");
    transcript.append(Role::User, "C");

    assert_eq!(
        transcript.recent_window(2),
        &[Message::assistant("B"), Message::user("C")]
    );
}

#[test]
fn test_empty_transcript() {
    let transcript = Transcript::new();
    assert!(transcript.recent_window(5).is_empty());
    assert!(transcript.full_transcript().is_empty());
    assert!(transcript.is_empty());
    assert_eq!(transcript.last(), None);
}

#[test]
fn test_window_larger_than_transcript_returns_everything() {
    let mut transcript = Transcript::new();
    transcript.append(Role::User, "only");
    assert_eq!(transcript.recent_window(10), &[Message::user("only")]);
}

#[test]
fn test_zero_window_is_empty() {
    let mut transcript = Transcript::new();
    transcript.append(Role::User, "A");
    assert!(transcript.recent_window(0).is_empty());
}

#[test]
fn test_append_is_strictly_additive() {
    let mut transcript = Transcript::new();
    transcript.append(Role::User, "first");
    let before = transcript.full_transcript().to_vec();

    let added = transcript.append(Role::Assistant, "second").clone();

    assert_eq!(added, Message::assistant("second"));
    assert_eq!(transcript.len(), before.len() + 1);
    assert_eq!(&transcript.full_transcript()[..before.len()], before.as_slice());
}

#[test]
fn test_empty_content_is_recorded_as_is() {
    let mut transcript = Transcript::new();
    transcript.append(Role::User, "");
    assert_eq!(transcript.full_transcript(), &[Message::user("")]);
}

#[test]
fn test_window_reflects_latest_append() {
    let mut transcript = Transcript::new();
    transcript.append(Role::User, "A");
    assert_eq!(transcript.recent_window(1), &[Message::user("A")]);

    transcript.append(Role::Assistant, "B");
    assert_eq!(transcript.recent_window(1), &[Message::assistant("B")]);
}

#[test]
fn test_serializes_as_plain_message_list() {
    let mut transcript = Transcript::new();
    transcript.append(Role::User, "hi");
    let json = serde_json::to_value(&transcript).unwrap();
    assert_eq!(json, serde_json::json!([{ "role": "user", "content": "hi" }]));
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "system instructions are not transcript entries")]
fn test_system_entries_are_rejected() {
    let mut transcript = Transcript::new();
    transcript.append(Role::System, "be nice");
}
