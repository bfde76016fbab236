use std::collections::HashMap;

use na_core::{Article, Category, Sentiment};
use serde::{Deserialize, Serialize};

use crate::compare::KeywordCount;
use crate::stats::CategoryCount;

const TOP_TREND_KEYWORDS: usize = 15;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentCount {
    pub sentiment: Sentiment,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendSummary {
    pub category_counts: Vec<CategoryCount>,
    pub sentiment_counts: Vec<SentimentCount>,
    pub top_keywords: Vec<KeywordCount>,
}

/// Corpus-level distributions for the trends view: article counts per
/// category and sentiment, and the most frequent keywords overall.
pub fn corpus_trends(articles: &[Article]) -> TrendSummary {
    let mut category_map: HashMap<Category, usize> = HashMap::new();
    let mut sentiment_map: HashMap<Sentiment, usize> = HashMap::new();
    let mut keyword_map: HashMap<String, usize> = HashMap::new();

    for article in articles {
        *category_map.entry(article.category).or_insert(0) += 1;
        *sentiment_map.entry(article.sentiment).or_insert(0) += 1;
        for keyword in &article.keywords {
            *keyword_map.entry(keyword.to_lowercase()).or_insert(0) += 1;
        }
    }

    let mut category_counts: Vec<CategoryCount> = category_map
        .into_iter()
        .map(|(category, count)| CategoryCount { category, count })
        .collect();
    category_counts.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.category.as_str().cmp(b.category.as_str()))
    });

    let mut sentiment_counts: Vec<SentimentCount> = sentiment_map
        .into_iter()
        .map(|(sentiment, count)| SentimentCount { sentiment, count })
        .collect();
    sentiment_counts.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.sentiment.as_str().cmp(b.sentiment.as_str()))
    });

    let mut top_keywords: Vec<KeywordCount> = keyword_map
        .into_iter()
        .map(|(keyword, count)| KeywordCount { keyword, count })
        .collect();
    top_keywords.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.keyword.cmp(&b.keyword))
    });
    top_keywords.truncate(TOP_TREND_KEYWORDS);

    TrendSummary {
        category_counts,
        sentiment_counts,
        top_keywords,
    }
}
