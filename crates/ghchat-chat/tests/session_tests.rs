use ghchat_chat::{ChatSession, ModelRegistry, TurnOutcome};

// No test here touches the real endpoint; success and error responses
// come from a local mockito stub, and transport-failure tests point
// the session at a local port nothing listens on.
const DEAD_ENDPOINT: &str = "http://127.0.0.1:1/inference/chat/completions";

#[tokio::test]
async fn test_successful_turn_appends_assistant_reply() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/inference/chat/completions")
        .match_header("authorization", "Bearer token")
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
            "id": "chatcmpl-1",
            "model": "openai/gpt-4o",
            "choices": [
                {
                    "index": 0,
                    "message": {"role": "assistant", "content": "Hello there"},
                    "finish_reason": "stop"
                }
            ],
            "usage": {"prompt_tokens": 9, "completion_tokens": 3, "total_tokens": 12}
        }"#,
        )
        .create_async()
        .await;

    let mut session = ChatSession::new("token".to_string());
    session.api_url = format!("{}/inference/chat/completions", server.url());

    match session.submit("Hi").await {
        TurnOutcome::Reply { content, usage } => {
            assert_eq!(content, "Hello there");
            assert_eq!(usage.unwrap().total_tokens, 12);
        }
        other => panic!("expected a reply, got {:?}", other),
    }

    // Exactly one user message and one assistant message, in order,
    // with the assistant message taken verbatim from choices[0]
    assert_eq!(session.messages().len(), 2);
    assert_eq!(session.messages()[0].role, "user");
    assert_eq!(session.messages()[0].content, "Hi");
    assert_eq!(session.messages()[1].role, "assistant");
    assert_eq!(session.messages()[1].content, "Hello there");
    assert!(!session.is_pending());

    // The assistant reply is part of the history sent on the next turn
    let _ = session.submit("again").await;
    let payload: serde_json::Value =
        serde_json::from_str(session.request_json().unwrap()).unwrap();
    assert_eq!(payload["messages"][1]["role"], "assistant");
    assert_eq!(payload["messages"][1]["content"], "Hello there");
}

#[tokio::test]
async fn test_error_body_yields_no_reply_but_is_snapshotted() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/inference/chat/completions")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": {"message": "Bad credentials", "code": "unauthorized"}}"#)
        .create_async()
        .await;

    let mut session = ChatSession::new("token".to_string());
    session.api_url = format!("{}/inference/chat/completions", server.url());

    assert_eq!(session.submit("Hi").await, TurnOutcome::NoReply);
    assert_eq!(session.messages().len(), 1);
    assert_eq!(session.messages()[0].role, "user");
    assert!(!session.is_pending());

    // The error body itself is retained for inspection
    assert!(session.response_json().unwrap().contains("Bad credentials"));
}

#[tokio::test]
async fn test_empty_choices_list_appends_nothing() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/inference/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "chatcmpl-2", "choices": []}"#)
        .create_async()
        .await;

    let mut session = ChatSession::new("token".to_string());
    session.api_url = format!("{}/inference/chat/completions", server.url());

    assert_eq!(session.submit("Hi").await, TurnOutcome::NoReply);
    assert_eq!(session.messages().len(), 1);
}

#[tokio::test]
async fn test_empty_input_is_silently_blocked() {
    let mut session = ChatSession::new("token".to_string());
    assert_eq!(session.submit("   ").await, TurnOutcome::Blocked);
    assert!(session.messages().is_empty());
    assert!(session.request_json().is_none());
}

#[tokio::test]
async fn test_missing_token_blocks_submission() {
    let mut session = ChatSession::new(String::new());
    assert_eq!(session.submit("hello").await, TurnOutcome::Blocked);
    assert!(session.messages().is_empty());
}

#[tokio::test]
async fn test_missing_model_blocks_submission() {
    let mut session = ChatSession::new("token".to_string());
    session.registry = ModelRegistry::new();
    assert_eq!(session.submit("hello").await, TurnOutcome::Blocked);
    assert!(session.messages().is_empty());
}

#[tokio::test]
async fn test_failed_turn_keeps_only_user_message() {
    let mut session = ChatSession::new("token".to_string());
    session.api_url = DEAD_ENDPOINT.to_string();

    let outcome = session.submit("Hi").await;
    assert_eq!(outcome, TurnOutcome::NoReply);

    // Conversation grew by exactly one: the user's own message
    assert_eq!(session.messages().len(), 1);
    assert_eq!(session.messages()[0].role, "user");
    assert_eq!(session.messages()[0].content, "Hi");

    // Failure is recorded as an error object in the response snapshot
    let snapshot = session.response_json().unwrap();
    assert!(snapshot.contains("error"));
}

#[tokio::test]
async fn test_request_snapshot_written_before_call_resolves() {
    let mut session = ChatSession::new("token".to_string());
    session.api_url = DEAD_ENDPOINT.to_string();
    session.system_prompt = "You are terse.".to_string();

    let _ = session.submit("Hi").await;

    let snapshot = session.request_json().unwrap();
    let payload: serde_json::Value = serde_json::from_str(snapshot).unwrap();
    assert_eq!(payload["model"], "openai/gpt-4o");
    assert_eq!(payload["messages"][0]["role"], "system");
    assert_eq!(payload["messages"][0]["content"], "You are terse.");
    assert_eq!(payload["messages"][1]["role"], "user");
    assert_eq!(payload["messages"][1]["content"], "Hi");
}

#[tokio::test]
async fn test_failed_turn_does_not_block_future_submissions() {
    let mut session = ChatSession::new("token".to_string());
    session.api_url = DEAD_ENDPOINT.to_string();

    assert_eq!(session.submit("first").await, TurnOutcome::NoReply);
    assert!(!session.is_pending());

    assert_eq!(session.submit("second").await, TurnOutcome::NoReply);
    assert_eq!(session.messages().len(), 2);
    assert_eq!(session.messages()[1].content, "second");
}

#[tokio::test]
async fn test_input_is_trimmed_before_appending() {
    let mut session = ChatSession::new("token".to_string());
    session.api_url = DEAD_ENDPOINT.to_string();

    let _ = session.submit("  Hi  ").await;
    assert_eq!(session.messages()[0].content, "Hi");
}
