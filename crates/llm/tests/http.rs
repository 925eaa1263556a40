//! Upstream adapter wire behavior against a mock endpoint.

use concierge_llm::{Completion, Message, Upstream, UpstreamError};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn adapter(server: &MockServer, api_key: &str) -> Upstream {
    Upstream::bearer(
        reqwest::Client::new(),
        api_key,
        format!("{}/chat/completions", server.uri()),
    )
    .unwrap()
}

#[test]
fn bearer_keeps_the_configured_endpoint() {
    let upstream = Upstream::bearer(
        reqwest::Client::new(),
        "test-key",
        "https://example.test/api/v1/chat/completions",
    )
    .unwrap();
    assert_eq!(
        upstream.endpoint(),
        "https://example.test/api/v1/chat/completions"
    );
}

#[tokio::test]
async fn success_returns_first_choice_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({
            "model": "m1",
            "messages": [{"role": "user", "content": "hi"}],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "gen-1",
            "model": "m1",
            "choices": [{
                "message": {"role": "assistant", "content": "hello there"},
                "finish_reason": "stop",
            }],
            "usage": {"prompt_tokens": 12, "completion_tokens": 4, "total_tokens": 16},
        })))
        .expect(1)
        .mount(&server)
        .await;

    let reply = adapter(&server, "test-key")
        .complete("m1", &[Message::user("hi")])
        .await
        .unwrap();

    assert_eq!(reply, "hello there");
}

#[tokio::test]
async fn non_success_status_becomes_status_error_with_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(429)
                .set_body_json(json!({"error": {"message": "rate limited", "code": 429}})),
        )
        .mount(&server)
        .await;

    let err = adapter(&server, "test-key")
        .complete("m1", &[Message::user("hi")])
        .await
        .unwrap_err();

    match err {
        UpstreamError::Status { status, detail } => {
            assert_eq!(status, 429);
            assert_eq!(detail, "rate limited");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn error_envelope_under_200_counts_as_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"error": {"message": "model temporarily offline"}})),
        )
        .mount(&server)
        .await;

    let err = adapter(&server, "test-key")
        .complete("m1", &[Message::user("hi")])
        .await
        .unwrap_err();

    match err {
        UpstreamError::Api(detail) => assert_eq!(detail, "model temporarily offline"),
        other => panic!("expected api error, got {other:?}"),
    }
}

#[tokio::test]
async fn response_without_choices_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "gen-2",
            "choices": [],
        })))
        .mount(&server)
        .await;

    let err = adapter(&server, "test-key")
        .complete("m1", &[Message::user("hi")])
        .await
        .unwrap_err();

    assert!(matches!(err, UpstreamError::Malformed(_)), "got {err:?}");
}

#[tokio::test]
async fn unparseable_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("upstream melted"))
        .mount(&server)
        .await;

    let err = adapter(&server, "test-key")
        .complete("m1", &[Message::user("hi")])
        .await
        .unwrap_err();

    assert!(matches!(err, UpstreamError::Malformed(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    // A dropped `MockServer` returns to wiremock's pool with its listener
    // still bound, so a dead port must come from a listener closed by hand.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let endpoint = format!("http://{}/chat/completions", listener.local_addr().unwrap());
    drop(listener);

    let upstream = Upstream::bearer(reqwest::Client::new(), "test-key", endpoint).unwrap();

    let err = upstream
        .complete("m1", &[Message::user("hi")])
        .await
        .unwrap_err();

    assert!(matches!(err, UpstreamError::Transport(_)), "got {err:?}");
}
