use std::collections::{BTreeSet, HashMap};

use na_core::{Article, Sentiment};
use serde::{Deserialize, Serialize};

pub const MAX_COMPARED: usize = 4;
const MAX_COMMON_KEYWORDS: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub distinct_sources: usize,
    pub mean_sentiment: f64,
    pub positive_count: usize,
    pub negative_count: usize,
    pub common_keywords: Vec<KeywordCount>,
}

/// A user-curated selection of up to four articles for side-by-side
/// comparison. Session-scoped UI state: the caller owns it, nothing is
/// persisted.
#[derive(Debug, Clone, Default)]
pub struct ComparisonSet {
    selected: Vec<Article>,
}

impl ComparisonSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn articles(&self) -> &[Article] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Add an article. Duplicates and additions beyond the cap of four are
    /// silently ignored.
    pub fn add(&mut self, article: Article) {
        if self.selected.iter().any(|a| a.id == article.id) {
            return;
        }
        if self.selected.len() >= MAX_COMPARED {
            return;
        }
        self.selected.push(article);
    }

    /// Remove by id; removing a non-member is a no-op.
    pub fn remove(&mut self, id: &str) {
        self.selected.retain(|a| a.id != id);
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn summary(&self) -> ComparisonSummary {
        aggregate_comparison(&self.selected)
    }
}

/// Aggregate statistics over a comparison selection, computed on demand.
pub fn aggregate_comparison(articles: &[Article]) -> ComparisonSummary {
    let distinct_sources = articles
        .iter()
        .map(|a| a.source.as_str())
        .collect::<BTreeSet<_>>()
        .len();

    let mean_sentiment = if articles.is_empty() {
        0.0
    } else {
        articles.iter().map(|a| a.sentiment_score).sum::<f64>() / articles.len() as f64
    };

    let positive_count = articles
        .iter()
        .filter(|a| a.sentiment == Sentiment::Positive)
        .count();
    let negative_count = articles
        .iter()
        .filter(|a| a.sentiment == Sentiment::Negative)
        .count();

    let mut counts: HashMap<String, usize> = HashMap::new();
    for article in articles {
        for keyword in &article.keywords {
            *counts.entry(keyword.to_lowercase()).or_insert(0) += 1;
        }
    }
    let mut common_keywords: Vec<KeywordCount> = counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(keyword, count)| KeywordCount { keyword, count })
        .collect();
    common_keywords.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.keyword.cmp(&b.keyword))
    });
    common_keywords.truncate(MAX_COMMON_KEYWORDS);

    ComparisonSummary {
        distinct_sources,
        mean_sentiment,
        positive_count,
        negative_count,
        common_keywords,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use na_core::Category;

    fn article(id: &str, source: &str, sentiment: Sentiment, score: f64, keywords: &[&str]) -> Article {
        Article {
            id: id.to_string(),
            title: format!("Article {}", id),
            summary: String::new(),
            source: source.to_string(),
            category: Category::World,
            sentiment,
            sentiment_score: score,
            published_at: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
            is_breaking: false,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            image_url: None,
            url: None,
        }
    }

    #[test]
    fn summary_over_two_articles() {
        let summary = aggregate_comparison(&[
            article("a", "A", Sentiment::Positive, 0.8, &[]),
            article("b", "B", Sentiment::Negative, 0.4, &[]),
        ]);
        assert_eq!(summary.distinct_sources, 2);
        assert!((summary.mean_sentiment - 0.6).abs() < 1e-9);
        assert_eq!(summary.positive_count, 1);
        assert_eq!(summary.negative_count, 1);
    }

    #[test]
    fn common_keywords_require_two_occurrences() {
        let summary = aggregate_comparison(&[
            article("a", "A", Sentiment::Neutral, 0.5, &["AI", "chips"]),
            article("b", "B", Sentiment::Neutral, 0.5, &["ai"]),
        ]);
        assert_eq!(summary.common_keywords.len(), 1);
        assert_eq!(summary.common_keywords[0].keyword, "ai");
        assert_eq!(summary.common_keywords[0].count, 2);
    }

    #[test]
    fn empty_selection_summarizes_to_zeros() {
        let summary = aggregate_comparison(&[]);
        assert_eq!(summary.distinct_sources, 0);
        assert_eq!(summary.mean_sentiment, 0.0);
        assert!(summary.common_keywords.is_empty());
    }

    #[test]
    fn fifth_addition_is_ignored() {
        let mut set = ComparisonSet::new();
        for i in 0..5 {
            set.add(article(&format!("a{}", i), "A", Sentiment::Neutral, 0.5, &[]));
        }
        assert_eq!(set.len(), 4);
        assert!(set.articles().iter().all(|a| a.id != "a4"));
    }

    #[test]
    fn duplicate_addition_is_ignored() {
        let mut set = ComparisonSet::new();
        set.add(article("a", "A", Sentiment::Neutral, 0.5, &[]));
        set.add(article("a", "A", Sentiment::Neutral, 0.5, &[]));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn remove_and_clear() {
        let mut set = ComparisonSet::new();
        set.add(article("a", "A", Sentiment::Neutral, 0.5, &[]));
        set.remove("missing");
        assert_eq!(set.len(), 1);
        set.remove("a");
        assert!(set.is_empty());
        set.add(article("b", "B", Sentiment::Neutral, 0.5, &[]));
        set.clear();
        assert!(set.is_empty());
    }
}
