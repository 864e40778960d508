use deck_auth::token_store;
use deck_config::DeckConfig;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::auth_client;
use crate::output::output;

#[derive(Serialize)]
struct LogoutResponse {
    logged_out: bool,
}

pub async fn handle(flags: &GlobalFlags, config: &DeckConfig) -> anyhow::Result<()> {
    match auth_client(config) {
        Ok(client) => deck_auth::logout(&client).await?,
        // No backend configured: nothing to revoke, only local credentials.
        Err(_) => token_store::delete()?,
    }

    output(&LogoutResponse { logged_out: true }, flags.format)
}
