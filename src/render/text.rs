use crate::model::Recipe;
use crate::render::{non_blank, RenderResults};

const DIRECTIONS_PREVIEW_CHARS: usize = 200;

/// Renders suggestions as a plain-text listing for the terminal.
pub struct TextRenderer;

impl RenderResults for TextRenderer {
    fn render(&self, recipes: &[Recipe]) -> String {
        if recipes.is_empty() {
            return "No matching recipes found. Try different ingredients.\n".to_string();
        }

        let mut out = String::new();
        for (i, recipe) in recipes.iter().enumerate() {
            out.push_str(&format!(
                "{}. {} ({}% match)\n",
                i + 1,
                recipe.title,
                recipe.match_percent()
            ));
            if !recipe.used_ingredients.is_empty() {
                out.push_str("   You have:\n");
                for ingredient in &recipe.used_ingredients {
                    out.push_str(&format!("     + {ingredient}\n"));
                }
            }
            if !recipe.missing_ingredients.is_empty() {
                out.push_str("   Need to buy:\n");
                for ingredient in &recipe.missing_ingredients {
                    out.push_str(&format!("     - {ingredient}\n"));
                }
            }
            if let Some(directions) = non_blank(&recipe.directions) {
                out.push_str(&format!(
                    "   Directions: {}\n",
                    preview(directions, DIRECTIONS_PREVIEW_CHARS)
                ));
            }
            if let Some(link) = non_blank(&recipe.link) {
                out.push_str(&format!("   More info: {link}\n"));
            }
            out.push('\n');
        }
        out
    }
}

/// First `limit` characters, with an ellipsis when the text was cut.
/// Counted in characters, not bytes, so multi-byte input never splits.
fn preview(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        text.to_string()
    } else {
        let cut: String = text.chars().take(limit).collect();
        format!("{cut}...")
    }
}
