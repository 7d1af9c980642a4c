//! Gamebook API server entry point.

use axum::Router;
use gamebook_api::config::AppConfig;
use gamebook_api::error::AppError;
use gamebook_api::handler::StoryHandler;
use gamebook_api::routes;
use gamebook_api::state::AppState;
use gamebook_story::{DecodeError, Story, StoryFormat, story_digest};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Gamebook server");

    let config = AppConfig::from_env()?;

    // Load the story once; it is read-only from here on.
    let bytes = std::fs::read(&config.story_file).map_err(DecodeError::from)?;
    let story = Story::load(&bytes, StoryFormat::from_path(&config.story_file))?;
    let digest = story_digest(&bytes);
    tracing::info!(
        story_file = %config.story_file.display(),
        chapters = story.len(),
        story_digest = %digest,
        "Loaded story"
    );
    tracing::debug!(keys = ?story.keys(), "Story chapters");

    let story_handler = StoryHandler::new(story, config.handler_options());
    let app: Router = routes::app(AppState::new(story_handler, digest))
        .layer(TraceLayer::new_for_http());

    // Start server.
    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
