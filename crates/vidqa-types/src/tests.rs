#[cfg(test)]
mod tests {
    use crate::api::*;
    use crate::error::*;
    use crate::event::*;
    use crate::message::*;
    use crate::session::*;

    // ─── Message Tests ───────────────────────────────────────

    #[test]
    fn test_message_user() {
        let msg = Message::user("Hello");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "Hello");
        assert!(msg.sources.is_empty());
        assert!(!msg.timestamp.is_empty());
    }

    #[test]
    fn test_message_assistant() {
        let msg = Message::assistant("I can help");
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(msg.content, "I can help");
        assert!(msg.sources.is_empty());
    }

    #[test]
    fn test_message_assistant_with_sources() {
        let citation = Citation {
            video_title: "How Companies Fool You!".to_string(),
            video_url: "https://youtube.com/watch?v=abc".to_string(),
            start_time: 18.56,
            end_time: 19.52,
        };
        let msg = Message::assistant_with_sources("answer", vec![citation]);
        assert_eq!(msg.sources.len(), 1);
        assert_eq!(msg.sources[0].video_title, "How Companies Fool You!");
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            r#""assistant""#
        );
    }

    #[test]
    fn test_role_deserialization() {
        let role: Role = serde_json::from_str(r#""user""#).unwrap();
        assert_eq!(role, Role::User);
        let role: Role = serde_json::from_str(r#""assistant""#).unwrap();
        assert_eq!(role, Role::Assistant);
    }

    #[test]
    fn test_message_serialization_roundtrip() {
        let msg = Message::user("test input");
        let json = serde_json::to_string(&msg).unwrap();
        let deserialized: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.role, Role::User);
        assert_eq!(deserialized.content, "test input");
    }

    #[test]
    fn test_message_empty_sources_not_serialized() {
        let msg = Message::user("hi");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(!json.contains("sources"));
    }

    #[test]
    fn test_message_sources_default_on_load() {
        // Payloads written by older variants carry no sources field
        let json = r#"{"role":"user","content":"hi","timestamp":"2026-01-01T00:00:00Z"}"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert!(msg.sources.is_empty());
    }

    // ─── Citation Tests ──────────────────────────────────────

    #[test]
    fn test_deep_link_with_existing_query() {
        let citation = Citation {
            video_title: "t".to_string(),
            video_url: "https://x/v?id=1".to_string(),
            start_time: 1.5,
            end_time: 2.0,
        };
        assert_eq!(citation.deep_link(), "https://x/v?id=1&t=90s");
    }

    #[test]
    fn test_deep_link_without_query() {
        let citation = Citation {
            video_title: "t".to_string(),
            video_url: "https://x/v".to_string(),
            start_time: 2.0,
            end_time: 3.0,
        };
        assert_eq!(citation.deep_link(), "https://x/v?t=120s");
    }

    #[test]
    fn test_deep_link_floors_fractional_seconds() {
        let citation = Citation {
            video_title: "t".to_string(),
            video_url: "https://x/v".to_string(),
            start_time: 1.999,
            end_time: 2.5,
        };
        // 1.999 min = 119.94 s, floored
        assert_eq!(citation.deep_link(), "https://x/v?t=119s");
    }

    #[test]
    fn test_citation_range_label() {
        let citation = Citation {
            video_title: "t".to_string(),
            video_url: "https://x/v".to_string(),
            start_time: 1.5,
            end_time: 2.0,
        };
        assert_eq!(citation.range_label(), "[1.50 – 2.00 min]");
    }

    #[test]
    fn test_citation_serialization_roundtrip() {
        let citation = Citation {
            video_title: "title".to_string(),
            video_url: "https://x/v".to_string(),
            start_time: 0.0,
            end_time: 1.25,
        };
        let json = serde_json::to_string(&citation).unwrap();
        let deserialized: Citation = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, citation);
    }

    // ─── Session Tests ───────────────────────────────────────

    #[test]
    fn test_session_new() {
        let session = ChatSession::new();
        assert!(!session.id.is_empty());
        assert_eq!(session.title, DEFAULT_TITLE);
        assert!(session.messages.is_empty());
        assert!(!session.created_at.is_empty());
        assert!(!session.title_edited);
    }

    #[test]
    fn test_session_ids_unique() {
        let a = ChatSession::new();
        let b = ChatSession::new();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_session_loads_without_title_edited() {
        // Field added after the first persisted format
        let json = r#"{"id":"1","title":"New Chat","messages":[],"created_at":"2026-01-01T00:00:00Z"}"#;
        let session: ChatSession = serde_json::from_str(json).unwrap();
        assert!(!session.title_edited);
    }

    #[test]
    fn test_derive_title_short_message() {
        assert_eq!(derive_title("Hello"), "Hello");
    }

    #[test]
    fn test_derive_title_truncates_long_message() {
        let question = "What is shrinkflation and why does it matter to consumers?";
        assert_eq!(derive_title(question), "What is shrinkflation and why ...");
    }

    #[test]
    fn test_derive_title_exactly_thirty_chars() {
        let msg = "a".repeat(30);
        assert_eq!(derive_title(&msg), msg);
    }

    #[test]
    fn test_derive_title_respects_char_boundaries() {
        let msg = "é".repeat(40);
        let title = derive_title(&msg);
        assert_eq!(title.chars().count(), 33); // 30 chars + "..."
    }

    // ─── Event Tests ─────────────────────────────────────────

    #[test]
    fn test_chat_event_serialization() {
        let event = ChatEvent::QueryFailed {
            session_id: "s1".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("QueryFailed"));
        assert!(json.contains("s1"));
    }

    #[test]
    fn test_chat_event_answer_received() {
        let event = ChatEvent::AnswerReceived {
            session_id: "s1".to_string(),
            answer: "Hello world".to_string(),
            sources: vec![],
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("Hello world"));
    }

    // ─── API Wire Tests ──────────────────────────────────────

    #[test]
    fn test_query_answer_deserialization() {
        let json = r#"{
            "answer": "<p>Drip pricing hides charges.</p>",
            "sources": [{
                "video_title": "How Companies Fool You!",
                "video_url": "https://youtube.com/watch?v=abc",
                "start_time": 18.56,
                "end_time": 19.52
            }]
        }"#;
        let parsed: QueryAnswer = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.sources.len(), 1);
        assert!(parsed.answer.contains("Drip pricing"));
    }

    #[test]
    fn test_query_answer_without_sources() {
        let json = r#"{"answer": "no evidence"}"#;
        let parsed: QueryAnswer = serde_json::from_str(json).unwrap();
        assert!(parsed.sources.is_empty());
    }

    #[test]
    fn test_query_answer_ignores_extra_fields() {
        // The backend echoes the question; the client does not use it
        let json = r#"{"answer": "a", "sources": [], "question": "q"}"#;
        let parsed: QueryAnswer = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.answer, "a");
    }

    #[test]
    fn test_user_profile_display_name() {
        let profile = UserProfile {
            name: Some("Asha".to_string()),
            email: Some("asha@example.com".to_string()),
        };
        assert_eq!(profile.display_name(), "Asha");

        let profile = UserProfile {
            name: None,
            email: Some("asha@example.com".to_string()),
        };
        assert_eq!(profile.display_name(), "asha@example.com");

        let profile = UserProfile { name: None, email: None };
        assert_eq!(profile.display_name(), "Signed in");
    }

    #[test]
    fn test_index_stats_deserialization() {
        let json = r#"{"total_videos": 12, "total_chunks": 3400}"#;
        let stats: IndexStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_videos, 12);
        assert_eq!(stats.total_chunks, 3400);
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        assert_eq!(
            ChatError::Network("unreachable".to_string()).to_string(),
            "Network error: unreachable"
        );
        assert_eq!(ChatError::Timeout(30000).to_string(), "Timeout after 30000ms");
        assert_eq!(ChatError::Unauthenticated.to_string(), "Not authenticated");
    }

    #[test]
    fn test_error_backend_display() {
        let err = ChatError::Backend {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Backend error: HTTP 500: boom");
    }

    #[test]
    fn test_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{{bad}}").unwrap_err();
        let err: ChatError = serde_err.into();
        assert!(matches!(err, ChatError::Serialization(_)));
    }

    #[test]
    fn test_error_clone() {
        let err = ChatError::Storage("quota".to_string());
        assert_eq!(err.clone().to_string(), err.to_string());
    }
}
