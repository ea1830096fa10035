use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::model::Recipe;
use crate::render::{non_blank, RenderResults};

/// Renders suggestions as an HTML fragment of recipe cards.
///
/// Every dynamic string is escaped; the service's dataset contains scraped
/// titles and directions that cannot be trusted as markup.
pub struct HtmlRenderer;

impl RenderResults for HtmlRenderer {
    fn render(&self, recipes: &[Recipe]) -> String {
        if recipes.is_empty() {
            return concat!(
                r#"<p class="no-results">"#,
                "No matching recipes found. Try different ingredients.",
                "</p>\n"
            )
            .to_string();
        }

        let mut out = String::new();
        for recipe in recipes {
            out.push_str("<div class=\"recipe-card\">\n");
            out.push_str(&format!("  <h3>{}</h3>\n", encode_text(&recipe.title)));
            out.push_str(&format!(
                "  <p class=\"match\">{}% match</p>\n",
                recipe.match_percent()
            ));
            push_ingredient_list(&mut out, "have", "You have", &recipe.used_ingredients);
            push_ingredient_list(&mut out, "missing", "Need to buy", &recipe.missing_ingredients);
            if let Some(directions) = non_blank(&recipe.directions) {
                out.push_str(&format!(
                    "  <p class=\"directions\">{}</p>\n",
                    encode_text(directions)
                ));
            }
            if let Some(link) = non_blank(&recipe.link) {
                out.push_str(&format!(
                    "  <a href=\"{}\" target=\"_blank\" rel=\"noopener\">Full recipe</a>\n",
                    encode_double_quoted_attribute(link)
                ));
            }
            out.push_str("</div>\n");
        }
        out
    }
}

fn push_ingredient_list(out: &mut String, class: &str, label: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push_str(&format!("  <p class=\"{class}-label\">{label}:</p>\n"));
    out.push_str(&format!("  <ul class=\"{class}\">\n"));
    for item in items {
        out.push_str(&format!("    <li>{}</li>\n", encode_text(item)));
    }
    out.push_str("  </ul>\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(title: &str, score: i64) -> Recipe {
        Recipe {
            title: title.to_string(),
            match_score: score,
            used_ingredients: Vec::new(),
            missing_ingredients: Vec::new(),
            directions: None,
            link: None,
        }
    }

    #[test]
    fn test_empty_results_render_placeholder() {
        let markup = HtmlRenderer.render(&[]);
        assert!(markup.contains("No matching recipes found"));
        assert!(!markup.contains("recipe-card"));
    }

    #[test]
    fn test_full_card() {
        let mut pancakes = recipe("Pancakes", 87);
        pancakes.used_ingredients = vec!["egg".to_string(), "flour".to_string()];
        pancakes.missing_ingredients = vec!["sugar".to_string()];
        pancakes.directions = Some("Mix and fry.".to_string());
        pancakes.link = Some("https://example.com/pancakes".to_string());

        let markup = HtmlRenderer.render(&[pancakes]);

        assert!(markup.contains("<h3>Pancakes</h3>"));
        assert!(markup.contains("87% match"));
        assert!(markup.contains("<li>egg</li>"));
        assert!(markup.contains("<li>flour</li>"));
        assert!(markup.contains("<li>sugar</li>"));
        assert!(markup.contains("You have:"));
        assert!(markup.contains("Need to buy:"));
        assert!(markup.contains("Mix and fry."));
        assert!(markup.contains(r#"href="https://example.com/pancakes""#));
        assert!(markup.contains(r#"target="_blank" rel="noopener""#));
    }

    #[test]
    fn test_optional_blocks_are_omitted() {
        let mut toast = recipe("Toast", 100);
        toast.used_ingredients = vec!["bread".to_string()];

        let markup = HtmlRenderer.render(&[toast]);

        assert!(markup.contains("<h3>Toast</h3>"));
        assert!(markup.contains("100% match"));
        assert!(markup.contains("<li>bread</li>"));
        assert!(!markup.contains("directions"));
        assert!(!markup.contains("<a href"));
        assert!(!markup.contains("Need to buy"));
    }

    #[test]
    fn test_blank_directions_count_as_absent() {
        let mut toast = recipe("Toast", 50);
        toast.directions = Some("   ".to_string());
        toast.link = Some(String::new());

        let markup = HtmlRenderer.render(&[toast]);

        assert!(!markup.contains("directions"));
        assert!(!markup.contains("<a href"));
    }

    #[test]
    fn test_out_of_range_score_displays_clamped() {
        let markup = HtmlRenderer.render(&[recipe("Mystery Stew", 140)]);
        assert!(markup.contains("100% match"));
        assert!(!markup.contains("140"));
    }

    #[test]
    fn test_markup_in_fields_is_escaped() {
        let mut sneaky = recipe("<script>alert(1)</script>", 10);
        sneaky.used_ingredients = vec!["salt & pepper".to_string()];

        let markup = HtmlRenderer.render(&[sneaky]);

        assert!(!markup.contains("<script>"));
        assert!(markup.contains("&lt;script&gt;"));
        assert!(markup.contains("salt &amp; pepper"));
    }

    #[test]
    fn test_one_card_per_result() {
        let markup = HtmlRenderer.render(&[recipe("A", 10), recipe("B", 20)]);
        assert_eq!(markup.matches("recipe-card").count(), 2);
    }
}
