use attendance_server::{Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, config, logging)
    let (config, _log_guard) = setup_environment()?;

    print_banner();
    tracing::info!("Attendance server starting...");

    // 2. State (work dir, database, services)
    let state = ServerState::initialize(&config).await.map_err(|e| {
        tracing::error!("Failed to initialize server state: {}", e);
        anyhow::anyhow!(e)
    })?;

    // 3. HTTP server
    let server = Server::new(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}
