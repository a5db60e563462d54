use crate::cli::actions::Action;
use crate::store;
use anyhow::Result;

/// Handle the server action
pub async fn handle(action: Action) -> Result<()> {
    match action {
        Action::Server {
            port,
            dsn,
            session_token_name,
        } => store::new(port, dsn, session_token_name).await?,
    }

    Ok(())
}
