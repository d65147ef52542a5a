//! Chat message history shapes
//!
//! The router only reads history. Two historical layouts for tool calls are
//! accepted: nested `parts[]` entries of type `tool-invocation`, and the
//! legacy flat `toolInvocations[]` field. Annotations are kept as raw JSON
//! because only the `resumeAction` signal is ever inspected.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
    Tool,
    #[serde(other)]
    Other,
}

/// Lifecycle state of a tool invocation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolInvocationState {
    PartialCall,
    #[default]
    Call,
    Result,
}

/// A tool call recorded in message history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolInvocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
    pub tool_name: String,
    #[serde(default)]
    pub state: ToolInvocationState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
}

impl ToolInvocation {
    /// Create a pending call with no args
    pub fn new(tool_name: impl Into<String>) -> Self {
        Self {
            tool_call_id: None,
            tool_name: tool_name.into(),
            state: ToolInvocationState::Call,
            args: None,
            result: None,
        }
    }

    /// Set args and return self for chaining
    pub fn with_args(mut self, args: Value) -> Self {
        self.args = Some(args);
        self
    }

    /// Attach a result, marking the invocation complete
    pub fn with_result(mut self, result: Value) -> Self {
        self.result = Some(result);
        self.state = ToolInvocationState::Result;
        self
    }

    /// The `body` field of the tool result, if any
    pub fn result_body(&self) -> Option<&Value> {
        self.result.as_ref().and_then(|result| result.get("body"))
    }
}

/// One entry of the `parts[]` array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MessagePart {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(rename = "tool-invocation", rename_all = "camelCase")]
    ToolInvocation { tool_invocation: ToolInvocation },
    #[serde(other)]
    Other,
}

/// A chat message as persisted by the chat layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub role: ChatRole,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parts: Vec<MessagePart>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_invocations: Vec<ToolInvocation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Value>,
}

impl ChatMessage {
    /// Create a message with the given role and text content
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            id: None,
            role,
            content: content.into(),
            parts: Vec::new(),
            tool_invocations: Vec::new(),
            annotations: Vec::new(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }

    /// Append a `tool-invocation` part and return self for chaining
    pub fn with_tool_invocation(mut self, invocation: ToolInvocation) -> Self {
        self.parts.push(MessagePart::ToolInvocation {
            tool_invocation: invocation,
        });
        self
    }

    /// Append to the legacy `toolInvocations` field and return self for chaining
    pub fn with_legacy_tool_invocation(mut self, invocation: ToolInvocation) -> Self {
        self.tool_invocations.push(invocation);
        self
    }

    /// Append an annotation and return self for chaining
    pub fn with_annotation(mut self, annotation: Value) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Text of the message: `content` when present, else the joined text parts
    pub fn text(&self) -> String {
        if !self.content.trim().is_empty() {
            return self.content.clone();
        }
        self.parts
            .iter()
            .filter_map(|part| match part {
                MessagePart::Text { text } => Some(text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
