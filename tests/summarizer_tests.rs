// Unit tests for the summary generator
//
// Provider behavior is exercised against a wiremock server standing in for
// the OpenAI chat-completions endpoint.

use meeting_notes_backend::summarizer::{
    build_prompt, Summarizer, MOCK_SUMMARY_NO_KEY, MOCK_SUMMARY_REQUEST_FAILED,
};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_prompt_without_instruction() {
    let prompt = build_prompt("Alice: hello", "");

    assert_eq!(prompt, "Summarize the following transcript:\nAlice: hello");
}

#[test]
fn test_prompt_with_instruction() {
    let prompt = build_prompt("Alice: hello", "Use bullet points");

    assert_eq!(
        prompt,
        "Summarize the following transcript according to the instruction: Use bullet points\n\nTranscript:\nAlice: hello"
    );
}

#[tokio::test]
async fn test_generate_without_api_key_returns_no_key_mock() {
    let summarizer = Summarizer::new(None);

    let summary = summarizer
        .generate("Alice and Bob discussed Q3 budget.", "")
        .await
        .unwrap();

    assert_eq!(summary, MOCK_SUMMARY_NO_KEY);
}

#[tokio::test]
async fn test_empty_api_key_counts_as_absent() {
    let summarizer = Summarizer::new(Some(String::new()));

    let summary = summarizer.generate("standup notes", "").await.unwrap();

    assert_eq!(summary, MOCK_SUMMARY_NO_KEY);
}

#[tokio::test]
async fn test_generate_with_empty_transcript_fails() {
    let without_key = Summarizer::new(None);
    let err = without_key.generate("", "").await.unwrap_err();
    assert_eq!(err.to_string(), "Transcript required");

    // Same input error with a key configured
    let with_key = Summarizer::new(Some("sk-test".to_string()));
    assert!(with_key.generate("", "").await.is_err());
}

#[tokio::test]
async fn test_provider_error_is_swallowed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let summarizer = Summarizer::with_base_url(Some("sk-test".to_string()), server.uri());

    let summary = summarizer.generate("standup notes", "").await.unwrap();

    assert_eq!(summary, MOCK_SUMMARY_REQUEST_FAILED);
}

#[tokio::test]
async fn test_malformed_provider_response_is_swallowed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let summarizer = Summarizer::with_base_url(Some("sk-test".to_string()), server.uri());

    let summary = summarizer.generate("standup notes", "").await.unwrap();

    assert_eq!(summary, MOCK_SUMMARY_REQUEST_FAILED);
}

#[tokio::test]
async fn test_successful_completion_is_trimmed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(serde_json::json!({
            "model": "gpt-4o-mini",
            "temperature": 0.5,
            "max_tokens": 500,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [
                {"message": {"role": "assistant", "content": "  Budget approved. \n"}}
            ]
        })))
        .mount(&server)
        .await;

    let summarizer = Summarizer::with_base_url(Some("sk-test".to_string()), server.uri());

    let summary = summarizer
        .generate("Alice: shall we approve the Q3 budget? Bob: yes.", "")
        .await
        .unwrap();

    assert_eq!(summary, "Budget approved.");
}

#[tokio::test]
async fn test_instruction_is_forwarded_in_prompt() {
    let server = MockServer::start().await;
    let expected_prompt = build_prompt("Alice: hello", "One sentence only");
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(serde_json::json!({
            "messages": [{"role": "user", "content": expected_prompt}],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [
                {"message": {"role": "assistant", "content": "Alice said hello."}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let summarizer = Summarizer::with_base_url(Some("sk-test".to_string()), server.uri());

    let summary = summarizer
        .generate("Alice: hello", "One sentence only")
        .await
        .unwrap();

    assert_eq!(summary, "Alice said hello.");
}
