use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use splitlog::config::Config;
use splitlog::handlers::{auth, records};
use splitlog::middleware::SessionContext;
use splitlog::repositories::{RecordRepository, SessionRepository, UserRepository};
use splitlog::{db, migrations, routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "splitlog=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    tracing::info!("Connecting to database: {}", config.database_url);

    // Create database pool
    let pool = db::create_pool(&config.database_url)?;

    // Run migrations
    migrations::run_migrations(&pool)?;

    // Create repositories
    let user_repo = UserRepository::new(pool.clone());
    let session_repo = SessionRepository::new(pool.clone());
    let record_repo = RecordRepository::new(pool.clone());

    // Sweep sessions left over from before the last shutdown
    let removed = session_repo.cleanup_expired().await?;
    if removed > 0 {
        tracing::info!("Removed {} expired sessions", removed);
    }

    // Create handler states
    let records_state = records::RecordsState {
        record_repo: record_repo.clone(),
    };
    let auth_state = auth::AuthState {
        user_repo: user_repo.clone(),
        session_repo: session_repo.clone(),
    };
    let session_ctx = SessionContext::new(user_repo, session_repo);

    // Build router
    let app = routes::create_router(records_state, auth_state, session_ctx);

    // Start server
    let addr = config.server_addr();
    tracing::info!("Starting server at http://{}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", error);
        return;
    }
    tracing::info!("Shutting down");
}
