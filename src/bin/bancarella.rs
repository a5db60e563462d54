use anyhow::Result;
use bancarella::cli::{actions, actions::Action, start};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse arguments, initialize logging and return the action to run
    let action = start()?;

    match action {
        Action::Server { .. } => actions::server::handle(action).await?,
    }

    Ok(())
}
