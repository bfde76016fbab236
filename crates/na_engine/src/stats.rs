use std::collections::HashMap;

use na_core::{Category, ViewRecord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingStats {
    pub total_views: usize,
    pub total_reading_seconds: u64,
    pub category_counts: Vec<CategoryCount>,
}

/// Summarize a user's view history: how much they read and in which
/// categories. Categories are ranked by view count, label ascending on ties.
pub fn reading_stats(views: &[ViewRecord]) -> ReadingStats {
    let total_reading_seconds = views
        .iter()
        .map(|v| v.reading_time_seconds as u64)
        .sum();

    let mut counts: HashMap<Category, usize> = HashMap::new();
    for view in views {
        *counts.entry(view.category).or_insert(0) += 1;
    }
    let mut category_counts: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(category, count)| CategoryCount { category, count })
        .collect();
    category_counts.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.category.as_str().cmp(b.category.as_str()))
    });

    ReadingStats {
        total_views: views.len(),
        total_reading_seconds,
        category_counts,
    }
}
