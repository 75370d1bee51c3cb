//! Auth context.
//!
//! The shell never performs sign-in itself; it observes a single
//! `{ user, loading }` cell provided at the page root and populated once by
//! probing `/auth/me`. Everything downstream gates on `loading` being false
//! and treats an absent user as "stay idle", not as an error.

use dioxus::prelude::*;
use gloo_net::http::Request;
use serde::Deserialize;

use crate::api::api_base;

#[derive(Clone, Debug, PartialEq)]
pub struct AuthUser {
    pub user_id: String,
    pub username: String,
}

/// The externally-owned auth cell. `loading` starts true and flips false
/// exactly once, after the `/auth/me` probe settles either way.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthContext {
    pub user: Option<AuthUser>,
    pub loading: bool,
}

impl Default for AuthContext {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthContext {
    /// The identity the notebook resolver should key off, when one is ready.
    pub fn ready_identity(&self) -> Option<&str> {
        if self.loading {
            return None;
        }
        self.user.as_ref().map(|u| u.user_id.as_str())
    }
}

#[derive(Deserialize)]
struct MeResponse {
    authenticated: bool,
    user_id: Option<String>,
    username: Option<String>,
}

/// Probe /auth/me once and settle the context signal.
/// Called at startup from HomePage so the rest of the page knows whether
/// there's a signed-in user without blocking render.
pub async fn probe_auth(mut auth: Signal<AuthContext>) {
    let url = format!("{}/auth/me", api_base());

    let user = match Request::get(&url).send().await {
        Ok(resp) if resp.ok() => match resp.json::<MeResponse>().await {
            Ok(me) if me.authenticated => Some(AuthUser {
                user_id: me.user_id.unwrap_or_default(),
                username: me.username.unwrap_or_default(),
            }),
            Ok(_) => None,
            Err(e) => {
                dioxus_logger::tracing::warn!("Failed to parse /auth/me response: {}", e);
                None
            }
        },
        _ => None,
    };

    auth.set(AuthContext {
        user,
        loading: false,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_absent_while_loading() {
        let auth = AuthContext {
            user: Some(AuthUser {
                user_id: "u-1".to_string(),
                username: "ada".to_string(),
            }),
            loading: true,
        };
        assert_eq!(auth.ready_identity(), None);
    }

    #[test]
    fn identity_absent_when_signed_out() {
        let auth = AuthContext {
            user: None,
            loading: false,
        };
        assert_eq!(auth.ready_identity(), None);
    }

    #[test]
    fn identity_present_once_loaded() {
        let auth = AuthContext {
            user: Some(AuthUser {
                user_id: "u-1".to_string(),
                username: "ada".to_string(),
            }),
            loading: false,
        };
        assert_eq!(auth.ready_identity(), Some("u-1"));
    }
}
