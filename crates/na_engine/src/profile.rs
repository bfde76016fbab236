use std::collections::HashMap;

use na_core::{Category, ViewRecord};

const TOP_CATEGORIES: usize = 5;
const TOP_KEYWORDS: usize = 20;

/// Per-user affinity weights derived from view history. Rebuilt on every
/// request and never shared across users.
#[derive(Debug, Clone, Default)]
pub struct PreferenceProfile {
    pub category_weights: HashMap<Category, f64>,
    pub keyword_weights: HashMap<String, f64>,
    pub top_categories: Vec<Category>,
    pub top_keywords: Vec<String>,
}

impl PreferenceProfile {
    /// True when there is no personalization signal at all.
    pub fn is_empty(&self) -> bool {
        self.category_weights.is_empty() && self.keyword_weights.is_empty()
    }
}

/// Reduce a view history (newest first, caller-capped) into a preference
/// profile. Each view contributes `max(1, minutes read)` so an instant
/// bounce still counts once.
pub fn build_preference_profile(views: &[ViewRecord]) -> PreferenceProfile {
    let mut category_weights: HashMap<Category, f64> = HashMap::new();
    let mut keyword_weights: HashMap<String, f64> = HashMap::new();

    for view in views {
        let weight = (view.reading_time_seconds as f64 / 60.0).max(1.0);
        *category_weights.entry(view.category).or_insert(0.0) += weight;
        for keyword in &view.keywords {
            *keyword_weights.entry(keyword.to_lowercase()).or_insert(0.0) += weight;
        }
    }

    let mut ranked_categories: Vec<(Category, f64)> =
        category_weights.iter().map(|(c, w)| (*c, *w)).collect();
    ranked_categories.sort_by(|a, b| {
        b.1.total_cmp(&a.1)
            .then_with(|| a.0.as_str().cmp(b.0.as_str()))
    });
    let top_categories = ranked_categories
        .into_iter()
        .take(TOP_CATEGORIES)
        .map(|(c, _)| c)
        .collect();

    let mut ranked_keywords: Vec<(String, f64)> = keyword_weights
        .iter()
        .map(|(k, w)| (k.clone(), *w))
        .collect();
    ranked_keywords.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    let top_keywords = ranked_keywords
        .into_iter()
        .take(TOP_KEYWORDS)
        .map(|(k, _)| k)
        .collect();

    PreferenceProfile {
        category_weights,
        keyword_weights,
        top_categories,
        top_keywords,
    }
}
