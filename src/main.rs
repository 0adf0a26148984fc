use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use coachsmart::infrastructure::AppState;
use coachsmart::{config, db, seed, server};

#[tokio::main]
async fn main() {
    // Load configuration
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coachsmart=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = config::Config::from_env();

    // Initialize database
    let db = match db::init_db(&config.database_url).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to initialize database: {}", e);
            std::process::exit(1);
        }
    };

    // Challenge catalog, only populated on first start
    if let Err(e) = seed::seed_challenges(&db).await {
        tracing::error!("Failed to seed challenge catalog: {}", e);
    }

    let state = AppState::new(db, config);

    if let Err(e) = server::serve(state).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
