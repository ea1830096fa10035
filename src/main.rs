use std::env;
use std::process::ExitCode;

use log::debug;

use smartcook_client::{
    ClientConfig, HtmlRenderer, RecipeClient, RenderResults, TextRenderer,
};

const USAGE: &str = "Usage: smartcook [OPTIONS] <ingredients>...

Suggest recipes for the ingredients you have. Arguments are joined into one
comma-separated query, e.g.: smartcook eggs flour milk

Options:
  --text    Print a terminal listing instead of recipe-card HTML
  --check   Only check service readiness and print its status
  -h, --help";

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let mut text_output = false;
    let mut check_only = false;
    let mut ingredients: Vec<String> = Vec::new();
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--text" => text_output = true,
            "--check" => check_only = true,
            "--help" | "-h" => {
                println!("{USAGE}");
                return ExitCode::SUCCESS;
            }
            _ => ingredients.push(arg),
        }
    }

    match run(text_output, check_only, &ingredients).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

async fn run(text_output: bool, check_only: bool, ingredients: &[String]) -> Result<(), String> {
    let config = ClientConfig::load().map_err(|err| err.to_string())?;
    let client = RecipeClient::new(&config).map_err(|err| err.to_string())?;

    if check_only {
        let status = client.health().await.map_err(|err| err.to_string())?;
        println!(
            "{} (status: {}, models loaded: {})",
            if status.is_ready() { "ready" } else { "not ready" },
            status.status,
            status.models_loaded
        );
        return Ok(());
    }

    // Reject empty queries locally; the service never sees them
    let query = build_query(ingredients).ok_or_else(|| {
        format!("Please provide at least one ingredient.\n\n{USAGE}")
    })?;
    debug!("querying with: {query}");

    let recipes = client.suggest(&query).await.map_err(|err| err.to_string())?;

    let output = if text_output {
        TextRenderer.render(&recipes)
    } else {
        HtmlRenderer.render(&recipes)
    };
    print!("{output}");
    Ok(())
}

/// Join the ingredient arguments into one comma-separated query.
/// Returns `None` when nothing but whitespace was given.
fn build_query(ingredients: &[String]) -> Option<String> {
    let parts: Vec<&str> = ingredients
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}
