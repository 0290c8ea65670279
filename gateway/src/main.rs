use anyhow::Result;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use site_registry::CityRegistry;

mod config;
mod routes;

use config::GatewayConfig;
use routes::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "scout_gateway=debug,info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = GatewayConfig::from_env()?;

    let registry = CityRegistry::for_variant(config.variant)?;
    tracing::info!(
        "   Loaded {} registry: {} cities, {} factors",
        registry.variant(),
        registry.len(),
        registry.factor_kinds().count()
    );

    let state = AppState::new(registry, &config.smr_model);

    let api_routes = routes::api_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Static file serving for the map page (if present)
    let app = if config.ui_path.exists() {
        tracing::info!("   Serving UI from {}", config.ui_path.display());
        api_routes.fallback_service(ServeDir::new(&config.ui_path))
    } else {
        tracing::warn!(
            "   UI directory {} not found - API only",
            config.ui_path.display()
        );
        api_routes
    };

    let addr = config.addr();
    tracing::info!("Site Scout gateway starting on {}", addr);
    tracing::info!("   SMR model: {}", config.smr_model);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
