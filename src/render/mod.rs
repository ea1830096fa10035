mod html;
mod text;

pub use html::HtmlRenderer;
pub use text::TextRenderer;

use crate::model::Recipe;

/// Pure rendering of recipe suggestions.
///
/// Implementations take the result list and nothing else; the same input
/// always yields the same output. This keeps the rendering logic testable
/// without a running service.
pub trait RenderResults {
    fn render(&self, recipes: &[Recipe]) -> String;
}

/// Optional fields arrive either as missing keys or as empty strings,
/// depending on the dataset row; both mean absent.
pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
