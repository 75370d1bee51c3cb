//! Shared types between frontend and backend
//!
//! These types are used by both:
//! - the Habitat API service (native Rust)
//! - Dioxus components (WASM)
//!
//! Serializable with serde for JSON over HTTP

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Identifiers
// ============================================================================

/// Identifier for one conversation session.
///
/// Minted on the client the first time a visitor lands without one, then
/// carried only in the page URL. Opening the same URL in two tabs resumes
/// the same session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

/// Identifier for a notebook, a user's collection of source documents.
/// Always minted server-side; the frontend only ever adopts one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NotebookId(pub String);

impl NotebookId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Chat
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Sender {
    User,
    Assistant,
    System,
}

/// One rendered chat message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    pub pending: bool,
}

// ============================================================================
// Notebook sources
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Document,
    Link,
    Note,
}

/// A source document inside a notebook.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceDocument {
    pub id: String,
    pub title: String,
    pub kind: SourceKind,
    pub added_at: DateTime<Utc>,
}

// ============================================================================
// Permits
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum PermitStatus {
    Pending,
    Approved,
    Denied,
}

/// A proposed action awaiting user approval, scoped to one session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Permit {
    pub id: String,
    pub description: String,
    pub status: PermitStatus,
    pub requested_at: DateTime<Utc>,
}

// ============================================================================
// Session history
// ============================================================================

/// Summary row for the history drawer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionSummary {
    pub id: SessionId,
    pub title: String,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_generation() {
        let id1 = SessionId::new();
        let id2 = SessionId::new();
        assert_ne!(id1, id2);
        assert_eq!(id1.0.len(), 36); // UUID length
    }

    #[test]
    fn test_chat_message_serialization() {
        let message = ChatMessage {
            id: "msg_123".to_string(),
            text: "Hello".to_string(),
            sender: Sender::User,
            timestamp: Utc::now(),
            pending: false,
        };

        let json = serde_json::to_string(&message).unwrap();
        let deserialized: ChatMessage = serde_json::from_str(&json).unwrap();

        assert_eq!(message, deserialized);
    }

    #[test]
    fn test_source_kind_serialization() {
        let kind = SourceKind::Document;
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, "\"document\"");
    }

    #[test]
    fn test_permit_status_roundtrip() {
        let permit = Permit {
            id: "permit_1".to_string(),
            description: "Send the drafted email".to_string(),
            status: PermitStatus::Pending,
            requested_at: Utc::now(),
        };

        let json = serde_json::to_string(&permit).unwrap();
        assert!(json.contains("\"pending\""));

        let deserialized: Permit = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.status, PermitStatus::Pending);
    }
}
