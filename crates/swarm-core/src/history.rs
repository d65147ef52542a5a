//! Message history normalization
//!
//! The only place that knows about the two historical tool-invocation
//! layouts. Everything downstream works on `&ToolInvocation`.

use swarm_types::{ChatMessage, ChatRole, MessagePart, ToolInvocation};

/// Tool invocations of a message, oldest first.
///
/// Messages carrying `tool-invocation` parts use those; otherwise the legacy
/// flat `toolInvocations` field is read.
pub fn extract_tool_invocations(message: &ChatMessage) -> Vec<&ToolInvocation> {
    let from_parts: Vec<&ToolInvocation> = message
        .parts
        .iter()
        .filter_map(|part| match part {
            MessagePart::ToolInvocation { tool_invocation } => Some(tool_invocation),
            _ => None,
        })
        .collect();

    if from_parts.is_empty() {
        message.tool_invocations.iter().collect()
    } else {
        from_parts
    }
}

/// All tool invocations, newest message first and newest invocation first
/// within each message
pub fn invocations_newest_first(
    messages: &[ChatMessage],
) -> impl Iterator<Item = &ToolInvocation> + '_ {
    messages
        .iter()
        .rev()
        .flat_map(|message| extract_tool_invocations(message).into_iter().rev())
}

/// Text of the newest user message, empty when there is none
pub fn latest_user_text(messages: &[ChatMessage]) -> String {
    messages
        .iter()
        .rev()
        .find(|message| message.role == ChatRole::User)
        .map(ChatMessage::text)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts_take_precedence_over_legacy_field() {
        let message = ChatMessage::assistant("")
            .with_tool_invocation(ToolInvocation::new("lending-solana_lend"))
            .with_legacy_tool_invocation(ToolInvocation::new("staking-solana_stake"));
        let names: Vec<&str> = extract_tool_invocations(&message)
            .into_iter()
            .map(|inv| inv.tool_name.as_str())
            .collect();
        assert_eq!(names, vec!["lending-solana_lend"]);
    }

    #[test]
    fn test_newest_first_ordering() {
        let messages = vec![
            ChatMessage::assistant("")
                .with_legacy_tool_invocation(ToolInvocation::new("a-first"))
                .with_legacy_tool_invocation(ToolInvocation::new("a-second")),
            ChatMessage::user("ok"),
            ChatMessage::assistant("")
                .with_tool_invocation(ToolInvocation::new("b-first"))
                .with_tool_invocation(ToolInvocation::new("b-second")),
        ];
        let names: Vec<&str> = invocations_newest_first(&messages)
            .map(|inv| inv.tool_name.as_str())
            .collect();
        assert_eq!(names, vec!["b-second", "b-first", "a-second", "a-first"]);
    }

    #[test]
    fn test_latest_user_text() {
        let messages = vec![
            ChatMessage::user("first"),
            ChatMessage::assistant("reply"),
            ChatMessage::user("second"),
            ChatMessage::assistant("another reply"),
        ];
        assert_eq!(latest_user_text(&messages), "second");
        assert_eq!(latest_user_text(&[]), "");
    }
}
