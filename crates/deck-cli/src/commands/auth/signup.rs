use deck_auth::{SignUpOutcome, token_store};
use deck_config::DeckConfig;
use serde::Serialize;

use super::login::SessionResponse;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthSignupArgs;
use crate::commands::shared::input::read_password;
use crate::context::auth_client;
use crate::output::output;

#[derive(Serialize)]
struct ConfirmationResponse {
    authenticated: bool,
    user_id: String,
    email: Option<String>,
    note: &'static str,
}

pub async fn handle(args: &AuthSignupArgs, flags: &GlobalFlags, config: &DeckConfig) -> anyhow::Result<()> {
    let client = auth_client(config)?;
    let password = read_password(args.password.as_deref())?;

    match client
        .sign_up(args.email.trim(), &password, args.name.as_deref())
        .await?
    {
        SignUpOutcome::SignedIn(session) => {
            token_store::store(&session)?;
            output(&SessionResponse::from(&session), flags.format)
        }
        SignUpOutcome::ConfirmationRequired(user) => output(
            &ConfirmationResponse {
                authenticated: false,
                user_id: user.id,
                email: user.email,
                note: "Check your email to confirm the account, then run 'deck auth login'.",
            },
            flags.format,
        ),
    }
}
