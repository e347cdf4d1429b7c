//! Arena Engine - Main entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use arena_engine::infrastructure::persistence::InMemoryCharacterRepo;
use arena_engine::infrastructure::ports::RandomPort;
use arena_engine::infrastructure::random::{SeededRandom, SystemRandom};
use arena_engine::{api, App, AppConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the binary may be started from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "arena_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Arena Engine");

    let config = AppConfig::from_env();

    let random: Arc<dyn RandomPort> = match config.battle_seed {
        Some(seed) => {
            tracing::info!(seed, "BATTLE_SEED configured, battles are reproducible");
            Arc::new(SeededRandom::new(seed))
        }
        None => Arc::new(SystemRandom::new()),
    };

    let app = Arc::new(App::new(Arc::new(InMemoryCharacterRepo::new()), random));
    let router = api::router(app, &config);

    // Start server
    let addr: SocketAddr = config.bind_address().parse()?;
    tracing::info!(prefix = %config.api_prefix, "Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
