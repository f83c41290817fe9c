use anyhow::Context;
use database::schema::connect_and_prepare;
use log::info;
use server::{app, config::Config, utils::shutdown::shutdown_signal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env()?;

    // Nothing is served until the reservations table exists
    let db = connect_and_prepare(&config.database_url, config.db_init)
        .await
        .context("database did not become ready")?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!("Running axum on http://{}", config.bind_addr);

    axum::serve(listener, app(db.clone()))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await?;
    info!("Database pool closed");

    Ok(())
}
