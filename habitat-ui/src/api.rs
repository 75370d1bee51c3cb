use chrono::{DateTime, Utc};
use gloo_net::http::Request;
use habitat_types::{
    ChatMessage, NotebookId, Permit, Sender, SessionId, SessionSummary, SourceDocument,
};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Get the API base URL based on current environment
/// - In development (localhost): use http://localhost:8080
/// - In production: use same origin (API serves static files)
fn get_api_base() -> String {
    // Get the current hostname from the browser
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();

    // If running on localhost, point to the API server on port 8080
    if hostname == "localhost" || hostname == "127.0.0.1" {
        "http://localhost:8080".to_string()
    } else {
        // In production, use same origin
        "".to_string()
    }
}

/// Lazy-static equivalent for WASM - computed at first use
static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

/// Get the cached API base URL
pub fn api_base() -> &'static str {
    API_BASE_CACHE.get_or_init(get_api_base).as_str()
}

// ============================================================================
// Notebook
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct DefaultNotebookResponse {
    pub success: bool,
    pub notebook_id: String,
}

/// Resolve the signed-in user's default notebook. The backend keys this off
/// the ambient auth cookie, so no arguments are needed.
pub async fn get_default_notebook() -> Result<NotebookId, String> {
    let url = format!("{}/notebooks/default", api_base());

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: DefaultNotebookResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))?;

    if !data.success {
        return Err("API returned success=false".to_string());
    }

    Ok(NotebookId(data.notebook_id))
}

// ============================================================================
// Sessions
// ============================================================================

#[derive(Debug, Serialize)]
pub struct CreateSessionRequest {
    pub notebook_id: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateSessionResponse {
    pub success: bool,
    pub session_id: String,
    pub message: String,
}

pub async fn create_session(notebook_id: &str) -> Result<SessionId, String> {
    let url = format!("{}/sessions", api_base());

    let request = CreateSessionRequest {
        notebook_id: notebook_id.to_string(),
    };

    let response = Request::post(&url)
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: CreateSessionResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))?;

    if !data.success {
        return Err(format!("API error: {}", data.message));
    }

    Ok(SessionId(data.session_id))
}

#[derive(Debug, Deserialize)]
pub struct RecentSessionsResponse {
    pub success: bool,
    pub sessions: Vec<ApiSessionSummary>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSessionSummary {
    pub id: String,
    pub title: String,
    pub updated_at: DateTime<Utc>,
}

pub async fn fetch_recent_sessions() -> Result<Vec<SessionSummary>, String> {
    let url = format!("{}/sessions/recent", api_base());

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: RecentSessionsResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))?;

    if !data.success {
        return Err("API returned success=false".to_string());
    }

    let sessions = data
        .sessions
        .into_iter()
        .map(|s| SessionSummary {
            id: SessionId(s.id),
            title: s.title,
            updated_at: s.updated_at,
        })
        .collect();

    Ok(sessions)
}

// ============================================================================
// Chat
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct GetMessagesResponse {
    pub success: bool,
    pub messages: Vec<ApiMessage>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiMessage {
    pub id: String,
    pub text: String,
    pub sender: String,
    pub timestamp: DateTime<Utc>,
    pub pending: bool,
}

pub async fn fetch_messages(session_id: &str) -> Result<Vec<ChatMessage>, String> {
    let url = format!("{}/chat/{}/messages", api_base(), session_id);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: GetMessagesResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))?;

    if !data.success {
        return Err("API returned success=false".to_string());
    }

    let messages = data
        .messages
        .into_iter()
        .map(|m| ChatMessage {
            id: m.id,
            text: m.text,
            sender: match m.sender.as_str() {
                "User" => Sender::User,
                "System" => Sender::System,
                _ => Sender::Assistant,
            },
            timestamp: m.timestamp,
            pending: m.pending,
        })
        .collect();

    Ok(messages)
}

#[derive(Debug, Deserialize)]
pub struct ClearChatsResponse {
    pub success: bool,
}

/// Delete all chat history for the signed-in user. Fire-and-forget from the
/// UI's point of view; the caller only reports completion.
pub async fn clear_chat_history() -> Result<(), String> {
    let url = format!("{}/chats/clear", api_base());

    let response = Request::post(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: ClearChatsResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))?;

    if !data.success {
        return Err("API returned success=false".to_string());
    }

    Ok(())
}

// ============================================================================
// Sources
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct GetSourcesResponse {
    pub success: bool,
    pub sources: Vec<SourceDocument>,
}

pub async fn fetch_sources(notebook_id: &str) -> Result<Vec<SourceDocument>, String> {
    let url = format!("{}/notebooks/{}/sources", api_base(), notebook_id);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: GetSourcesResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))?;

    if !data.success {
        return Err("API returned success=false".to_string());
    }

    Ok(data.sources)
}

// ============================================================================
// Permits
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct GetPermitsResponse {
    pub success: bool,
    pub permits: Vec<Permit>,
}

pub async fn fetch_permits(session_id: &str) -> Result<Vec<Permit>, String> {
    let url = format!("{}/sessions/{}/permits", api_base(), session_id);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: GetPermitsResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))?;

    if !data.success {
        return Err("API returned success=false".to_string());
    }

    Ok(data.permits)
}
