//! HTTP-level tests for the API client, against a mock server.

use quill_api::chat::{ChatRequest, Message};
use quill_api::client::Client;
use quill_api::embedding::EmbeddingRequest;
use quill_api::error::ApiError;
use quill_api::moderation::ModerationRequest;
use quill_api::audio::{SpeechRequest, Voice};

use reqwest::header::HeaderValue;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Client {
    Client::new()
        .with_api_key("sk-test")
        .with_base_url(server.uri())
}

#[tokio::test]
async fn chat_completion_decodes_choices() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({"model": "gpt-4o-mini"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "created": 1715000000,
            "model": "gpt-4o-mini",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "Hello there."},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 5, "completion_tokens": 3, "total_tokens": 8}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = ChatRequest::new("gpt-4o-mini", vec![Message::user("Hello")]);
    let response = client.chat_completion(&request).await.unwrap();

    assert_eq!(response.first_content(), Some("Hello there."));
    assert_eq!(response.choices[0].finish_reason.as_deref(), Some("stop"));
    assert_eq!(response.usage.total_tokens, 8);
}

#[tokio::test]
async fn embedding_batch_preserves_input_order() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/embeddings"))
        .and(body_partial_json(json!({"input": ["first", "second"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "data": [
                {"object": "embedding", "embedding": [1.0, 0.0], "index": 0},
                {"object": "embedding", "embedding": [0.0, 1.0], "index": 1}
            ],
            "model": "text-embedding-3-small",
            "usage": {"prompt_tokens": 2, "total_tokens": 2}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = EmbeddingRequest::new(
        "text-embedding-3-small",
        vec!["first".to_string(), "second".to_string()],
    );
    let response = client.create_embedding(&request).await.unwrap();

    let vectors = response.vectors().unwrap();
    assert_eq!(vectors, vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
}

#[tokio::test]
async fn api_error_carries_status_and_kind() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/embeddings"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {
                "message": "Incorrect API key provided",
                "type": "invalid_request_error",
                "code": "invalid_api_key"
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = EmbeddingRequest::new("text-embedding-3-small", "hello");
    let error = client.create_embedding(&request).await.unwrap_err();

    assert_eq!(error.status(), Some(401));
    assert_eq!(error.kind(), Some("invalid_request_error"));
    match error {
        ApiError::Api { code, .. } => assert_eq!(code.as_deref(), Some("invalid_api_key")),
        other => panic!("expected ApiError::Api, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_api_key_fails_without_request() {
    if std::env::var("OPENAI_API_KEY").is_ok() {
        // An ambient key would give the client credentials.
        return;
    }

    let client = Client::new().with_base_url("http://localhost:9");
    let request = ChatRequest::new("gpt-4o-mini", vec![Message::user("hi")]);
    let error = client.chat_completion(&request).await.unwrap_err();
    assert!(matches!(error, ApiError::MissingApiKey));
}

#[tokio::test]
async fn moderation_decodes_results() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/moderations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "modr-1",
            "model": "omni-moderation-latest",
            "results": [{
                "flagged": true,
                "categories": {"harassment": true},
                "category_scores": {"harassment": 0.91}
            }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .moderate(&ModerationRequest::new("some text"))
        .await
        .unwrap();

    assert!(response.any_flagged());
}

#[tokio::test]
async fn instance_headers_are_forwarded() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/moderations"))
        .and(header("x-request-tag", "quill-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "modr-2",
            "model": "omni-moderation-latest",
            "results": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).with_header("x-request-tag", HeaderValue::from_static("quill-test"));
    client
        .moderate(&ModerationRequest::new("ok text"))
        .await
        .unwrap();
}

#[tokio::test]
async fn text_to_speech_returns_raw_bytes() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/audio/speech"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"RIFFfake-audio".to_vec()))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let audio = client
        .text_to_speech(&SpeechRequest::new("tts-1", "Hello", Voice::Onyx))
        .await
        .unwrap();

    assert_eq!(&audio[..4], b"RIFF");
}

#[tokio::test]
async fn text_to_speech_surfaces_error_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/audio/speech"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {"message": "input too long", "type": "invalid_request_error"}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = client
        .text_to_speech(&SpeechRequest::new("tts-1", "Hello", Voice::Nova))
        .await
        .unwrap_err();

    assert_eq!(error.status(), Some(400));
    assert_eq!(error.kind(), Some("invalid_request_error"));
}
