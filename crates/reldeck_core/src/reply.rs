//! Chat reply parsing. The backend returns `result` as a string that is
//! usually JSON (block array or legacy object) but can be plain prose; the
//! parse failure policy is to fall back to rendering the raw text.

use serde_json::Value;

use crate::block::ContentBlock;
use crate::normalize::blocks_from_value;

/// A parsed assistant reply: either canonical blocks with their follow-up
/// suggestions pulled out, or the raw text when the payload is not block
/// structured.
#[derive(Debug, Clone)]
pub enum ChatReply {
    Blocks {
        blocks: Vec<ContentBlock>,
        follow_ups: Vec<String>,
    },
    Text(String),
}

pub fn parse_reply(raw: &str) -> ChatReply {
    let Ok(value) = serde_json::from_str::<Value>(raw) else {
        return ChatReply::Text(raw.to_string());
    };

    match &value {
        Value::Array(_) => split_follow_ups(blocks_from_value(&value)),
        Value::Object(map) if map.get("type").and_then(Value::as_str) == Some("combined") => {
            split_follow_ups(blocks_from_value(&value))
        }
        _ => ChatReply::Text(raw.to_string()),
    }
}

// Follow-up queries render outside the block stack, so they are filtered
// out of the sequence here.
fn split_follow_ups(blocks: Vec<ContentBlock>) -> ChatReply {
    let mut follow_ups = Vec::new();
    let blocks = blocks
        .into_iter()
        .filter_map(|block| match block {
            ContentBlock::FollowUpQueries { queries } => {
                follow_ups.extend(queries);
                None
            }
            other => Some(other),
        })
        .collect();
    ChatReply::Blocks { blocks, follow_ups }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_block_array() {
        let raw = r#"[{"type":"heading","text":"Results"},{"type":"paragraph","text":"ok"}]"#;
        let ChatReply::Blocks { blocks, follow_ups } = parse_reply(raw) else {
            panic!("expected blocks");
        };
        assert_eq!(blocks.len(), 2);
        assert!(follow_ups.is_empty());
    }

    #[test]
    fn test_parse_extracts_follow_ups() {
        let raw = r#"[
            {"type":"paragraph","text":"Revenue is up."},
            {"type":"follow_up_queries","queries":["Show by store","Compare to last year"]}
        ]"#;
        let ChatReply::Blocks { blocks, follow_ups } = parse_reply(raw) else {
            panic!("expected blocks");
        };
        assert_eq!(blocks.len(), 1);
        assert_eq!(follow_ups.len(), 2);
        assert_eq!(follow_ups[0], "Show by store");
    }

    #[test]
    fn test_parse_legacy_combined() {
        let raw = r#"{"type":"combined","title":"Overview","content":{"paragraph":"note"}}"#;
        let ChatReply::Blocks { blocks, .. } = parse_reply(raw) else {
            panic!("expected blocks");
        };
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn test_parse_non_json_falls_back_to_text() {
        let raw = "I could not find any data for that period.";
        let ChatReply::Text(text) = parse_reply(raw) else {
            panic!("expected text");
        };
        assert_eq!(text, raw);
    }

    #[test]
    fn test_parse_non_combined_object_falls_back_to_text() {
        let raw = r#"{"type":"single_value","content":{"value":1}}"#;
        assert!(matches!(parse_reply(raw), ChatReply::Text(_)));
    }

    #[test]
    fn test_parse_scalar_json_falls_back_to_text() {
        assert!(matches!(parse_reply("42"), ChatReply::Text(_)));
        assert!(matches!(parse_reply("\"just a string\""), ChatReply::Text(_)));
    }
}
