pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod render;

pub use client::{RecipeClient, RecipeClientBuilder};
pub use config::ClientConfig;
pub use error::ClientError;
pub use model::{DownloadOutcome, Recipe, ServiceStatus};
pub use render::{HtmlRenderer, RenderResults, TextRenderer};

/// Fetch suggestions for a comma-separated ingredient query using the
/// configured service address.
///
/// Builds a one-shot client from [`ClientConfig::load`]; use [`RecipeClient`]
/// directly to reuse the readiness check across queries.
pub async fn suggest_recipes(ingredients: &str) -> Result<Vec<Recipe>, ClientError> {
    let config = ClientConfig::load()?;
    let client = RecipeClient::new(&config)?;
    client.suggest(ingredients).await
}

/// Fetch suggestions and render them as recipe-card HTML
pub async fn suggest_recipes_html(ingredients: &str) -> Result<String, ClientError> {
    let recipes = suggest_recipes(ingredients).await?;
    Ok(HtmlRenderer.render(&recipes))
}
