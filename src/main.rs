use egas_server::{Server, ServerState, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, data directory, logging)
    let config = setup_environment()?;

    tracing::info!("E-Gas server starting...");

    // 2. Initialize server state (database, JWT)
    let state = ServerState::initialize(&config).await;

    // 3. Run the HTTP server until ctrl-c
    let server = Server::with_state(config, state);
    server.run().await?;

    Ok(())
}
