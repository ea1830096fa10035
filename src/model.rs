use serde::{Deserialize, Serialize};

/// Health report returned by the service
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceStatus {
    pub status: String,
    pub models_loaded: bool,
    #[serde(default)]
    pub models_count: Option<u64>,
}

impl ServiceStatus {
    /// True when the service can answer suggestion queries
    pub fn is_ready(&self) -> bool {
        self.status == "ok" && self.models_loaded
    }
}

/// Outcome of the one-shot model provisioning action
#[derive(Debug, Clone, Deserialize)]
pub struct DownloadOutcome {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SuggestResponse {
    pub recipes: Vec<Recipe>,
}

/// One recipe suggestion as returned by the service.
///
/// `title` and `match` are required; everything else may be missing or empty
/// depending on the dataset row the suggestion came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    #[serde(rename = "match")]
    pub match_score: i64,
    #[serde(default)]
    pub used_ingredients: Vec<String>,
    #[serde(default)]
    pub missing_ingredients: Vec<String>,
    #[serde(default)]
    pub directions: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

impl Recipe {
    /// Match score clamped to a displayable percentage.
    ///
    /// The server computes the score, but it is not trusted to stay in range.
    pub fn match_percent(&self) -> u8 {
        self.match_score.clamp(0, 100) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_ready() {
        let status: ServiceStatus =
            serde_json::from_str(r#"{"status": "ok", "models_loaded": true, "models_count": 4}"#)
                .unwrap();
        assert!(status.is_ready());
        assert_eq!(status.models_count, Some(4));
    }

    #[test]
    fn test_status_needs_models() {
        let status: ServiceStatus =
            serde_json::from_str(r#"{"status": "needs_models", "models_loaded": false}"#).unwrap();
        assert!(!status.is_ready());
        assert_eq!(status.models_count, None);
    }

    #[test]
    fn test_recipe_full() {
        let recipe: Recipe = serde_json::from_str(
            r#"{
                "title": "Pancakes",
                "match": 87,
                "used_ingredients": ["egg", "flour"],
                "missing_ingredients": ["sugar"],
                "directions": "Mix and fry.",
                "link": "https://example.com/pancakes"
            }"#,
        )
        .unwrap();

        assert_eq!(recipe.title, "Pancakes");
        assert_eq!(recipe.match_percent(), 87);
        assert_eq!(recipe.used_ingredients, vec!["egg", "flour"]);
        assert_eq!(recipe.missing_ingredients, vec!["sugar"]);
        assert_eq!(recipe.directions.as_deref(), Some("Mix and fry."));
    }

    #[test]
    fn test_recipe_minimal() {
        // Only title and match are required
        let recipe: Recipe =
            serde_json::from_str(r#"{"title": "Toast", "match": 100}"#).unwrap();
        assert!(recipe.used_ingredients.is_empty());
        assert!(recipe.missing_ingredients.is_empty());
        assert!(recipe.directions.is_none());
        assert!(recipe.link.is_none());
    }

    #[test]
    fn test_recipe_missing_title_is_rejected() {
        let result = serde_json::from_str::<Recipe>(r#"{"match": 50}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_match_percent_clamps_out_of_range_scores() {
        let high: Recipe = serde_json::from_str(r#"{"title": "A", "match": 140}"#).unwrap();
        let low: Recipe = serde_json::from_str(r#"{"title": "B", "match": -3}"#).unwrap();
        assert_eq!(high.match_percent(), 100);
        assert_eq!(low.match_percent(), 0);
    }
}
