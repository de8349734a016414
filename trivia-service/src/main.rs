use trivia_service::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    init_tracing(&config)?;

    #[cfg(feature = "database")]
    if let Some(database) = config.database.clone() {
        let store = PgStore::connect(&database).await?;
        return run(config, store).await;
    }

    #[cfg(not(feature = "database"))]
    if config.database.is_some() {
        tracing::warn!("[database] is configured but the `database` feature is disabled");
    }

    tracing::warn!("No database configured, questions are kept in memory and lost on restart");
    run(config, MemoryStore::seeded()).await
}

async fn run<S: TriviaStore>(config: Config, store: S) -> Result<()> {
    tracing::info!(backend = store.backend(), "Storage ready");
    let state = AppState::new(config.clone(), store);
    Server::new(config).serve(router(state)).await
}
