use serde::{Deserialize, Serialize};

/// Events flowing from the query runtime into the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatEvent {
    /// Raw reply payload for one query, as returned by the backend.
    Reply { result: String },

    Status { message: String },

    Error { message: String },
}

impl ChatEvent {
    pub fn reply(result: impl Into<String>) -> Self {
        ChatEvent::Reply {
            result: result.into(),
        }
    }

    pub fn status(message: impl Into<String>) -> Self {
        ChatEvent::Status {
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        ChatEvent::Error {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_event() {
        let event = ChatEvent::reply(r#"[{"type":"paragraph","text":"hi"}]"#);
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"reply"#));
    }

    #[test]
    fn test_status_event() {
        let event = ChatEvent::status("querying...");
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"status"#));
        assert!(json.contains("querying..."));
    }

    #[test]
    fn test_event_roundtrip() {
        let event = ChatEvent::error("timed out");
        let json = serde_json::to_string(&event).unwrap();
        let decoded: ChatEvent = serde_json::from_str(&json).unwrap();
        if let ChatEvent::Error { message } = decoded {
            assert_eq!(message, "timed out");
        } else {
            panic!("expected error variant");
        }
    }
}
