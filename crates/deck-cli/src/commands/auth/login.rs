use deck_auth::{Session, token_store};
use deck_config::DeckConfig;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::commands::shared::input::read_password;
use crate::context::auth_client;
use crate::output::output;

#[derive(Serialize)]
pub(super) struct SessionResponse {
    authenticated: bool,
    user_id: String,
    email: Option<String>,
    display_name: String,
    expires_at: String,
}

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        Self {
            authenticated: true,
            user_id: session.user.id.clone(),
            email: session.user.email.clone(),
            display_name: session.user.display_name(),
            expires_at: session.expires_at.to_rfc3339(),
        }
    }
}

pub async fn handle(args: &AuthLoginArgs, flags: &GlobalFlags, config: &DeckConfig) -> anyhow::Result<()> {
    let client = auth_client(config)?;
    let password = read_password(args.password.as_deref())?;

    let session = client.sign_in_with_password(args.email.trim(), &password).await?;
    token_store::store(&session)?;
    tracing::info!(user_id = %session.owner_id(), "signed in");

    output(&SessionResponse::from(&session), flags.format)
}
