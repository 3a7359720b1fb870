//! AlgoClub - Application Entry Point
//!
//! This is the main entry point for the AlgoClub server.

use std::net::SocketAddr;

use axum::Router;
use redis::Client as RedisClient;
use tokio::net::TcpListener;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use algoclub::{
    config::CONFIG,
    constants::API_BASE_PATH,
    db,
    handlers,
    state::AppState,
    tasks::RefreshScheduler,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting AlgoClub server...");

    // Initialize database connection pool
    tracing::info!("Connecting to database...");
    let db_pool = db::create_pool(&CONFIG.database).await?;

    // Run database migrations
    tracing::info!("Running database migrations...");
    db::run_migrations(&db_pool).await?;
    db::verify_schema(&db_pool).await?;

    // Initialize Redis connection
    tracing::info!("Connecting to Redis...");
    let redis_client = RedisClient::open(CONFIG.redis.url.as_str())?;
    let redis_conn = redis::aio::ConnectionManager::new(redis_client).await?;

    // Create application state
    let state = AppState::new(db_pool.clone(), redis_conn, CONFIG.clone());

    // Start the periodic refresh scheduler; kept alive for the lifetime
    // of the server
    let _scheduler = if CONFIG.scheduler.enabled {
        tracing::info!("Starting refresh scheduler...");
        let mut scheduler = RefreshScheduler::new(
            CONFIG.scheduler.clone(),
            db_pool,
            state.task_queue().clone(),
        )
        .await?;
        scheduler.setup_jobs().await?;
        scheduler.start().await?;
        Some(scheduler)
    } else {
        tracing::info!("Refresh scheduler disabled");
        None
    };

    // Build the router
    let app = Router::new()
        .nest(API_BASE_PATH, handlers::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start the server
    let addr = SocketAddr::new(
        CONFIG.server.host.parse()?,
        CONFIG.server.port,
    );
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
