//! Conversions between Limner's request model and the OpenAI wire format.

use crate::openai_compat::{ChatMessage, ChatRequest, ChatResponse, OpenAICompatError};
use limner_core::{GenerateRequest, GenerateResponse};

/// Converts a GenerateRequest to the OpenAI chat request shape.
///
/// Unset sampling fields stay unset; the wire payload carries exactly the
/// collected values.
pub fn to_chat_request(req: &GenerateRequest) -> Result<ChatRequest, OpenAICompatError> {
    let messages: Vec<ChatMessage> = req
        .messages()
        .iter()
        .map(|msg| ChatMessage {
            role: msg.role().as_str().to_string(),
            content: msg.content().clone(),
        })
        .collect();

    if messages.is_empty() {
        return Err(OpenAICompatError::InvalidRequest(
            "Request carries no messages".to_string(),
        ));
    }

    let mut builder = ChatRequest::builder();
    builder.model(req.model().to_string()).messages(messages);

    if let Some(temperature) = req.sampling().temperature() {
        builder.temperature(Some(*temperature));
    }
    if let Some(top_p) = req.sampling().top_p() {
        builder.top_p(Some(*top_p));
    }
    if let Some(top_k) = req.sampling().top_k() {
        builder.top_k(Some(*top_k));
    }

    builder
        .build()
        .map_err(|e| OpenAICompatError::Builder(format!("Failed to build request: {}", e)))
}

/// Converts an OpenAI chat response to a GenerateResponse.
///
/// Absent or null content reads back as empty text, which the lifecycle
/// treats as the empty-response condition rather than an error.
pub fn from_chat_response(response: &ChatResponse) -> Result<GenerateResponse, OpenAICompatError> {
    let content = response
        .choices
        .first()
        .ok_or_else(|| OpenAICompatError::ResponseParsing("No choices in response".to_string()))?
        .message
        .content
        .clone()
        .unwrap_or_default();

    Ok(GenerateResponse::new(content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use limner_core::{Message, ModelId, Role, SamplingParams};
    use serde_json::json;

    fn request_with_sampling() -> GenerateRequest {
        GenerateRequest::builder()
            .model(ModelId::default())
            .messages(vec![Message::new(Role::User, "Hello")])
            .sampling(
                SamplingParams::builder()
                    .temperature(0.9)
                    .top_p(0.95)
                    .top_k(40)
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn payload_carries_exactly_the_collected_fields() {
        let chat_request = to_chat_request(&request_with_sampling()).unwrap();
        let payload = serde_json::to_value(&chat_request).unwrap();

        assert_eq!(
            payload,
            json!({
                "model": "gemini-2.5-flash",
                "messages": [{"role": "user", "content": "Hello"}],
                "temperature": 0.9,
                "top_p": 0.95,
                "top_k": 40
            })
        );
    }

    #[test]
    fn unset_sampling_fields_are_absent_from_payload() {
        let request = GenerateRequest::builder()
            .model(ModelId::Gemini25Pro)
            .messages(vec![
                Message::new(Role::System, "You are a helpful assistant."),
                Message::new(Role::User, "Hi"),
            ])
            .build()
            .unwrap();

        let payload = serde_json::to_value(to_chat_request(&request).unwrap()).unwrap();
        let object = payload.as_object().unwrap();

        assert_eq!(object.len(), 2);
        assert!(object.contains_key("model"));
        assert!(object.contains_key("messages"));
        assert_eq!(payload["messages"][0]["role"], "system");
    }

    #[test]
    fn empty_message_list_is_rejected() {
        let request = GenerateRequest::builder()
            .model(ModelId::default())
            .messages(Vec::new())
            .build()
            .unwrap();

        assert!(matches!(
            to_chat_request(&request),
            Err(OpenAICompatError::InvalidRequest(_))
        ));
    }

    #[test]
    fn first_choice_text_becomes_the_response() {
        let response: ChatResponse = serde_json::from_value(json!({
            "choices": [{"message": {"role": "assistant", "content": "# Hi"}}]
        }))
        .unwrap();

        let generated = from_chat_response(&response).unwrap();
        assert_eq!(generated.text(), "# Hi");
    }

    #[test]
    fn null_content_reads_back_as_empty_text() {
        let response: ChatResponse = serde_json::from_value(json!({
            "choices": [{"message": {"role": "assistant", "content": null}}]
        }))
        .unwrap();

        assert!(from_chat_response(&response).unwrap().is_empty());
    }

    #[test]
    fn missing_choices_is_a_parse_error() {
        let response: ChatResponse = serde_json::from_value(json!({"choices": []})).unwrap();

        assert!(matches!(
            from_chat_response(&response),
            Err(OpenAICompatError::ResponseParsing(_))
        ));
    }
}
