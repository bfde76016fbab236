use std::collections::BTreeSet;

use na_core::Article;

const SAME_CATEGORY: u32 = 5;
const PER_SHARED_KEYWORD: u32 = 2;
const SAME_SENTIMENT: u32 = 1;

const CLUSTER_SHARED_KEYWORD: u32 = 3;
const CLUSTER_SAME_CATEGORY: u32 = 2;
const CLUSTER_SCORE_FLOOR: u32 = 2;
const CLUSTER_FAN_OUT: usize = 5;

fn keyword_set(article: &Article) -> BTreeSet<String> {
    article.keywords.iter().map(|k| k.to_lowercase()).collect()
}

fn title_tokens(title: &str) -> BTreeSet<String> {
    title
        .to_lowercase()
        .split_whitespace()
        .filter(|token| token.chars().count() > 3)
        .map(str::to_string)
        .collect()
}

fn rank(mut scored: Vec<(u32, &Article)>, limit: usize) -> Vec<Article> {
    scored.sort_by(|a, b| {
        b.0.cmp(&a.0)
            .then_with(|| b.1.published_at.cmp(&a.1.published_at))
            .then_with(|| a.1.id.cmp(&b.1.id))
    });
    scored
        .into_iter()
        .take(limit)
        .map(|(_, article)| article.clone())
        .collect()
}

fn content_score(reference: &Article, reference_keywords: &BTreeSet<String>, candidate: &Article) -> u32 {
    let mut score = 0;
    if candidate.category == reference.category {
        score += SAME_CATEGORY;
    }
    let shared = keyword_set(candidate)
        .intersection(reference_keywords)
        .count() as u32;
    score += shared * PER_SHARED_KEYWORD;
    if candidate.sentiment == reference.sentiment {
        score += SAME_SENTIMENT;
    }
    score
}

/// Content-based "similar to this article" ranking: same category, shared
/// keywords (counted once each) and matching sentiment. Candidates with no
/// overlap at all are dropped. An unknown `reference_id` yields an empty
/// list.
pub fn find_similar(articles: &[Article], reference_id: &str, limit: usize) -> Vec<Article> {
    let Some(reference) = articles.iter().find(|a| a.id == reference_id) else {
        return Vec::new();
    };
    let reference_keywords = keyword_set(reference);

    let scored: Vec<(u32, &Article)> = articles
        .iter()
        .filter(|candidate| candidate.id != reference.id)
        .map(|candidate| (content_score(reference, &reference_keywords, candidate), candidate))
        .filter(|(score, _)| *score > 0)
        .collect();

    rank(scored, limit)
}

/// Candidate matches for topic clustering: keyword overlap weighted over
/// title-token overlap, with a category bonus. Stricter than
/// [`find_similar`]: candidates below a score of 2 are dropped and the
/// fan-out is fixed at 5. The two scorers use different weight constants
/// and stay separate operations.
pub fn clustering_candidates(articles: &[Article], reference: &Article) -> Vec<Article> {
    let reference_keywords = keyword_set(reference);
    let reference_tokens = title_tokens(&reference.title);

    let scored: Vec<(u32, &Article)> = articles
        .iter()
        .filter(|candidate| candidate.id != reference.id)
        .map(|candidate| {
            let shared_keywords = keyword_set(candidate)
                .intersection(&reference_keywords)
                .count() as u32;
            let shared_tokens = title_tokens(&candidate.title)
                .intersection(&reference_tokens)
                .count() as u32;
            let category_bonus = if candidate.category == reference.category {
                CLUSTER_SAME_CATEGORY
            } else {
                0
            };
            let score = shared_keywords * CLUSTER_SHARED_KEYWORD + shared_tokens + category_bonus;
            (score, candidate)
        })
        .filter(|(score, _)| *score >= CLUSTER_SCORE_FLOOR)
        .collect();

    rank(scored, CLUSTER_FAN_OUT)
}
