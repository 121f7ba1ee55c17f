//! Prompt conversion for the chat endpoint

use crate::error::LlmError;
use crate::types::{ChatMessage, ContentPart, MessageRole};
use serde_json::{Value, json};

pub(crate) fn convert_to_openrouter_chat_messages(
    prompt: &[ChatMessage],
) -> Result<Vec<Value>, LlmError> {
    prompt.iter().map(convert_message).collect()
}

fn convert_message(message: &ChatMessage) -> Result<Value, LlmError> {
    match message.role {
        MessageRole::System => Ok(json!({"role": "system", "content": message.text()})),
        MessageRole::User => Ok(json!({"role": "user", "content": user_content(&message.content)?})),
        MessageRole::Assistant => Ok(assistant_message(&message.content)),
        MessageRole::Tool => {
            let id = message.tool_call_id.as_deref().ok_or_else(|| {
                LlmError::InvalidInput("tool message is missing tool_call_id".to_string())
            })?;
            Ok(json!({"role": "tool", "tool_call_id": id, "content": message.text()}))
        }
    }
}

/// A single text part collapses to a plain string.
fn user_content(parts: &[ContentPart]) -> Result<Value, LlmError> {
    if let [ContentPart::Text { text }] = parts {
        return Ok(json!(text));
    }
    parts
        .iter()
        .map(|part| match part {
            ContentPart::Text { text } => Ok(json!({"type": "text", "text": text})),
            ContentPart::Image { url, .. } => {
                Ok(json!({"type": "image_url", "image_url": {"url": url}}))
            }
            ContentPart::Reasoning { .. } | ContentPart::ToolCall { .. } => Err(
                LlmError::InvalidInput("user messages may only contain text and images".into()),
            ),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Value::Array)
}

fn assistant_message(parts: &[ContentPart]) -> Value {
    let mut text = String::new();
    let mut reasoning = String::new();
    let mut tool_calls = Vec::new();

    for part in parts {
        match part {
            ContentPart::Text { text: t } => text.push_str(t),
            ContentPart::Reasoning { text: r } => reasoning.push_str(r),
            ContentPart::ToolCall {
                id,
                name,
                arguments,
            } => tool_calls.push(json!({
                "id": id,
                "type": "function",
                "function": {"name": name, "arguments": arguments}
            })),
            // Images are dropped from assistant turns.
            ContentPart::Image { .. } => {}
        }
    }

    let mut msg = json!({"role": "assistant", "content": text});
    if !reasoning.is_empty() {
        msg["reasoning"] = json!(reasoning);
    }
    if !tool_calls.is_empty() {
        msg["tool_calls"] = Value::Array(tool_calls);
    }
    msg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_text_user_part_is_a_string() {
        let out = convert_to_openrouter_chat_messages(&[ChatMessage::user("Hello")]).unwrap();
        assert_eq!(out, vec![json!({"role": "user", "content": "Hello"})]);
    }

    #[test]
    fn multi_part_user_message_is_an_array() {
        let msg = ChatMessage::user_with_parts(vec![
            ContentPart::text("What is this?"),
            ContentPart::image_url("https://example.com/cat.png"),
        ]);
        let out = convert_to_openrouter_chat_messages(&[msg]).unwrap();
        assert_eq!(
            out[0]["content"],
            json!([
                {"type": "text", "text": "What is this?"},
                {"type": "image_url", "image_url": {"url": "https://example.com/cat.png"}}
            ])
        );
    }

    #[test]
    fn assistant_reasoning_and_tool_calls_are_kept() {
        let msg = ChatMessage {
            role: MessageRole::Assistant,
            content: vec![
                ContentPart::Reasoning {
                    text: "thinking".into(),
                },
                ContentPart::text("answer"),
                ContentPart::ToolCall {
                    id: "call_1".into(),
                    name: "lookup".into(),
                    arguments: "{}".into(),
                },
            ],
            tool_call_id: None,
        };
        let out = convert_to_openrouter_chat_messages(&[msg]).unwrap();
        assert_eq!(out[0]["content"], "answer");
        assert_eq!(out[0]["reasoning"], "thinking");
        assert_eq!(out[0]["tool_calls"][0]["function"]["name"], "lookup");
    }

    #[test]
    fn tool_messages_need_an_id() {
        let ok = convert_to_openrouter_chat_messages(&[ChatMessage::tool("call_1", "42")]).unwrap();
        assert_eq!(ok[0], json!({"role": "tool", "tool_call_id": "call_1", "content": "42"}));

        let mut broken = ChatMessage::tool("x", "42");
        broken.tool_call_id = None;
        assert!(matches!(
            convert_to_openrouter_chat_messages(&[broken]),
            Err(LlmError::InvalidInput(_))
        ));
    }
}
