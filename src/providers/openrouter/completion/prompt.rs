//! Chat prompt to plain completion prompt

use crate::error::LlmError;
use crate::types::{ChatMessage, ContentPart, MessageRole};

pub(crate) const USER_TURN_STOP: &str = "\nuser:";

/// Prompt text plus the stop sequences it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CompletionPrompt {
    pub prompt: String,
    pub stop_sequences: Vec<String>,
}

/// A lone user text message is passed through unchanged. Anything else is
/// rendered as `user:` / `assistant:` turns ending in an open assistant turn.
pub(crate) fn convert_to_completion_prompt(
    prompt: &[ChatMessage],
) -> Result<CompletionPrompt, LlmError> {
    if let [only] = prompt
        && only.role == MessageRole::User
        && let [ContentPart::Text { text }] = only.content.as_slice()
    {
        return Ok(CompletionPrompt {
            prompt: text.clone(),
            stop_sequences: Vec::new(),
        });
    }

    let mut rest = prompt;
    let mut text = String::new();

    if let Some((first, tail)) = prompt.split_first()
        && first.role == MessageRole::System
    {
        text.push_str(&first.text());
        text.push_str("\n\n");
        rest = tail;
    }

    for message in rest {
        match message.role {
            MessageRole::System => {
                return Err(LlmError::InvalidInput(
                    "system messages are only supported at the start of a completion prompt"
                        .to_string(),
                ));
            }
            MessageRole::User => {
                let mut turn = String::new();
                for part in &message.content {
                    match part {
                        ContentPart::Text { text } => turn.push_str(text),
                        _ => {
                            return Err(LlmError::InvalidInput(
                                "completion prompts only support text in user messages"
                                    .to_string(),
                            ));
                        }
                    }
                }
                text.push_str(&format!("user:\n{turn}\n\n"));
            }
            MessageRole::Assistant => {
                let mut turn = String::new();
                for part in &message.content {
                    match part {
                        ContentPart::Text { text } => turn.push_str(text),
                        ContentPart::Reasoning { .. } => {}
                        _ => {
                            return Err(LlmError::InvalidInput(
                                "completion prompts do not support tool calls or images"
                                    .to_string(),
                            ));
                        }
                    }
                }
                text.push_str(&format!("assistant:\n{turn}\n\n"));
            }
            MessageRole::Tool => {
                return Err(LlmError::InvalidInput(
                    "tool messages are not supported by completion models".to_string(),
                ));
            }
        }
    }

    text.push_str("assistant:\n");

    Ok(CompletionPrompt {
        prompt: text,
        stop_sequences: vec![USER_TURN_STOP.to_string()],
    })
}
