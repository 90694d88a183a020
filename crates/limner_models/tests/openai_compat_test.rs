//! Tests for the OpenAI-compatible client.
//!
//! The live tests require a `GEMINI_API_KEY` in the environment (a `.env`
//! file is honored) and network access to the hosted endpoint.
//!
//! Run with: cargo test --package limner_models -- --ignored

use limner_core::{CompletionDriver, GenerateRequest, Message, ModelId, Role, SamplingParams};
use limner_models::{ChatResponse, ClientConfig, OpenAICompatibleClient};

#[test]
fn response_with_usage_parses() {
    let body = r#"{
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [
            {
                "index": 0,
                "message": {"role": "assistant", "content": "Hello there."},
                "finish_reason": "stop"
            }
        ],
        "usage": {"prompt_tokens": 4, "completion_tokens": 3, "total_tokens": 7}
    }"#;

    let response: ChatResponse = serde_json::from_str(body).unwrap();
    assert_eq!(response.choices.len(), 1);
    assert_eq!(
        response.choices[0].message.content.as_deref(),
        Some("Hello there.")
    );
    assert_eq!(response.usage.unwrap().total_tokens, Some(7));
}

#[test]
fn response_without_message_content_parses() {
    // Some providers omit the content key entirely on refusals.
    let body = r#"{"choices": [{"index": 0, "message": {"role": "assistant"}}]}"#;

    let response: ChatResponse = serde_json::from_str(body).unwrap();
    assert!(response.choices[0].message.content.is_none());
}

#[tokio::test]
#[ignore] // Requires GEMINI_API_KEY and network access
async fn live_basic_generation() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let client = OpenAICompatibleClient::new(ClientConfig::from_env()?);

    let request = GenerateRequest::builder()
        .model(ModelId::default())
        .messages(vec![
            Message::new(Role::System, "You are a helpful assistant."),
            Message::new(Role::User, "Say hello in one short sentence."),
        ])
        .build()?;

    let response = CompletionDriver::generate(&client, &request).await?;
    assert!(!response.is_empty());
    println!("Response: {}", response.text());
    Ok(())
}

#[tokio::test]
#[ignore] // Requires network access
async fn live_bad_credential_is_an_api_error() -> anyhow::Result<()> {
    let client = OpenAICompatibleClient::new(ClientConfig::new(
        "invalid-key",
        limner_models::DEFAULT_BASE_URL,
    ));

    let request = GenerateRequest::builder()
        .model(ModelId::default())
        .messages(vec![Message::new(Role::User, "Hi")])
        .sampling(SamplingParams::builder().temperature(0.0).build()?)
        .build()?;

    let result = CompletionDriver::generate(&client, &request).await;
    assert!(result.is_err());
    Ok(())
}
