use std::sync::Arc;
use tokio::signal;
use tracing::info;

use game_persistence::{connection::connect_and_migrate, repositories::WordRepository};
use game_server::{config::Config, create_routes, game_service::GameService, word_list};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Gallows server...");

    let config = Config::new();

    // Initialize database connection and run migrations
    let db = match connect_and_migrate().await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to connect to database and run migrations: {}", e);
            std::process::exit(1);
        }
    };

    // Top up the word pool from the configured word list
    info!("Loading words from {}", config.words_file);
    let words = match word_list::load_words(&config.words_file) {
        Ok(words) => words,
        Err(e) => {
            tracing::error!("Failed to read word file '{}': {}", config.words_file, e);
            tracing::error!("The server requires a word list to hand out games.");
            tracing::error!("Set WORDS_FILE to point at a file with one word per line.");
            std::process::exit(1);
        }
    };
    if let Err(e) = WordRepository::seed(&db, &words).await {
        tracing::error!("Failed to seed words: {}", e);
        std::process::exit(1);
    }

    let game_service = Arc::new(GameService::new(db));
    let routes = create_routes(game_service);

    info!("Server starting on {}:{}", config.host, config.port);

    let addr = (
        config.host.parse::<std::net::IpAddr>().expect("Invalid HOST"),
        config.port,
    );

    let (addr, server) = warp::serve(routes).bind_with_graceful_shutdown(addr, async {
        // Wait for SIGINT (Ctrl+C) or SIGTERM
        #[cfg(unix)]
        {
            let mut sigint = signal::unix::signal(signal::unix::SignalKind::interrupt()).unwrap();
            let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate()).unwrap();

            tokio::select! {
                _ = sigint.recv() => {
                    info!("Received SIGINT, shutting down gracefully...");
                }
                _ = sigterm.recv() => {
                    info!("Received SIGTERM, shutting down gracefully...");
                }
            }
        }

        #[cfg(not(unix))]
        {
            signal::ctrl_c().await.expect("Failed to listen for ctrl+c");
            info!("Received Ctrl+C, shutting down gracefully...");
        }
    });

    info!(
        "Server started successfully on {}. Press Ctrl+C to stop.",
        addr
    );
    server.await;
    info!("Server shutdown complete.");
}
