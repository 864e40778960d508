use deck_auth::token_store;
use deck_config::DeckConfig;
use deck_core::identity::UserProfile;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthProfileArgs;
use crate::context::auth_client;
use crate::output::output;

#[derive(Serialize)]
struct ProfileResponse {
    #[serde(flatten)]
    profile: UserProfile,
    greeting_name: String,
    initials: String,
}

pub async fn handle(args: &AuthProfileArgs, flags: &GlobalFlags, config: &DeckConfig) -> anyhow::Result<()> {
    let client = auth_client(config)?;
    let mut session = deck_auth::resolve_and_refresh(&client)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Not signed in. Run 'deck auth login' first."))?;

    let profile = match args.name.as_deref().map(str::trim) {
        Some("") => anyhow::bail!("--name cannot be empty"),
        Some(name) => client.update_profile(&session.access_token, name).await?,
        None => client.get_user(&session.access_token).await?,
    };

    if profile != session.user {
        session.user = profile.clone();
        token_store::store(&session)?;
    }

    output(
        &ProfileResponse {
            greeting_name: profile.first_name(),
            initials: profile.initials(),
            profile,
        },
        flags.format,
    )
}
