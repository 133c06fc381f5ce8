use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use warden::{
    api::routes::create_router, auth::token::TokenCodec, cli::Cli, db::UserStore,
    utils::config::Config, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.env_file {
        dotenvy::from_path(path)
            .with_context(|| format!("failed to load env file {}", path.display()))?;
    }

    let default_filter = if cli.verbose {
        "debug,tower_http=debug"
    } else {
        "info,tower_http=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!("cannot load config: {e}"))?;
    let addr = format!("{}:{}", config.server.host, config.server.port);

    // An invalid key size is fatal: the server must not start serving
    // traffic without a usable codec.
    let codec = Arc::new(TokenCodec::new(config.auth.token_secret.as_bytes())?);

    let state = AppState {
        config: Arc::new(config),
        users: Arc::new(UserStore::new()),
        codec: codec.clone(),
    };

    let app = create_router(codec).with_state(state);

    #[cfg(feature = "swagger-ui")]
    let app = app.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui").url(
            "/api-docs/openapi.json",
            <warden::api::ApiDoc as utoipa::OpenApi>::openapi(),
        ),
    );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Warden server listening on http://{addr}");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
