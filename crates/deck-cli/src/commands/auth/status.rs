use chrono::Utc;
use deck_auth::refresh::{Freshness, freshness};
use deck_auth::token_store;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    user_id: Option<String>,
    email: Option<String>,
    display_name: Option<String>,
    initials: Option<String>,
    expires_at: Option<String>,
    token_source: Option<&'static str>,
    note: Option<&'static str>,
}

/// Reports the stored session without contacting the identity service.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = match token_store::load() {
        Some((session, source)) => {
            let state = freshness(&session, Utc::now());
            let note = match state {
                Freshness::Valid => None,
                Freshness::NeedsRefresh => Some("session expires soon; it refreshes on next use"),
                Freshness::Expired => Some("session expired; run 'deck auth login'"),
            };
            AuthStatusResponse {
                authenticated: state != Freshness::Expired,
                user_id: Some(session.user.id.clone()),
                email: session.user.email.clone(),
                display_name: Some(session.user.display_name()),
                initials: Some(session.user.initials()),
                expires_at: Some(session.expires_at.to_rfc3339()),
                token_source: Some(source.as_str()),
                note,
            }
        }
        None => AuthStatusResponse {
            authenticated: false,
            user_id: None,
            email: None,
            display_name: None,
            initials: None,
            expires_at: None,
            token_source: None,
            note: Some("not signed in"),
        },
    };

    output(&status, flags.format)
}
