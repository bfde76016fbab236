use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use na_core::Article;

use crate::profile::PreferenceProfile;

const FRESH_BOOST: f64 = 1.2;
const RECENT_BOOST: f64 = 1.1;
const BREAKING_BOOST: f64 = 1.5;

fn score(article: &Article, profile: &PreferenceProfile, now: DateTime<Utc>) -> f64 {
    let mut score = profile
        .category_weights
        .get(&article.category)
        .copied()
        .unwrap_or(0.0)
        * 2.0;

    for keyword in &article.keywords {
        if let Some(weight) = profile.keyword_weights.get(&keyword.to_lowercase()) {
            score += weight;
        }
    }

    let age = now.signed_duration_since(article.published_at);
    if age < Duration::hours(24) {
        score *= FRESH_BOOST;
    } else if age < Duration::hours(72) {
        score *= RECENT_BOOST;
    }

    if article.is_breaking {
        score *= BREAKING_BOOST;
    }

    score
}

/// Rank unseen articles against a preference profile. Candidates in the
/// viewed set and candidates with no signal (score 0) are dropped, so an
/// empty profile yields an empty list rather than an arbitrary fallback.
///
/// `now` is an explicit input so repeat calls with identical arguments are
/// byte-identical. Ordering is total: score descending, then more recent
/// `published_at`, then id.
pub fn recommend(
    articles: &[Article],
    profile: &PreferenceProfile,
    viewed: &HashSet<String>,
    now: DateTime<Utc>,
    limit: usize,
) -> Vec<Article> {
    let mut scored: Vec<(f64, &Article)> = articles
        .iter()
        .filter(|article| !viewed.contains(&article.id))
        .map(|article| (score(article, profile, now), article))
        .filter(|(score, _)| *score > 0.0)
        .collect();

    scored.sort_by(|a, b| {
        b.0.total_cmp(&a.0)
            .then_with(|| b.1.published_at.cmp(&a.1.published_at))
            .then_with(|| a.1.id.cmp(&b.1.id))
    });

    scored
        .into_iter()
        .take(limit)
        .map(|(_, article)| article.clone())
        .collect()
}
