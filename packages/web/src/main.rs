use anyhow::Context as _;
use paws_api::db;
use paws_web::settings::Settings;
use paws_web::{app, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::new().context("loading settings")?;

    let pool = db::connect(&settings.database.url())
        .await
        .context("opening database")?;
    db::ensure_schema(&pool).await.context("creating schema")?;
    db::seed_defaults(&pool).await;

    let state = AppState::new(pool).context("compiling templates")?;
    let router = app(state, settings.session.secret.as_bytes())?;

    let addr = settings.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!(%addr, "Paws Rescue Center listening");
    axum::serve(listener, router).await?;
    Ok(())
}
