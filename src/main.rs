use log::info;
use tokio::net::TcpListener;

use recipe_search::api::{create_router, AppState};
use recipe_search::{AppConfig, RecipeSearch};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::load()?;
    let server_addr = config.server.socket_addr()?;
    info!(
        "Classifier: {} ({})",
        config.classifier.provider,
        config.classifier.model.as_deref().unwrap_or("provider default")
    );

    let search = RecipeSearch::builder().config(config).build()?;
    let app = create_router(AppState::new(search));

    let listener = TcpListener::bind(server_addr).await?;
    info!("Listening on {}", server_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
