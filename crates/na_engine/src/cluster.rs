use std::collections::{HashMap, HashSet};

use na_core::Article;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::similar::clustering_candidates;

const MAX_GROUPS: usize = 10;
const MAX_GROUP_ARTICLES: usize = 4;
const MAX_GROUP_KEYWORDS: usize = 5;

/// A topic group produced by [`cluster_topics`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonGroup {
    pub topic: String,
    pub keywords: Vec<String>,
    pub news: Vec<Article>,
}

/// Partition the corpus into topic groups with a greedy single pass.
///
/// The corpus is scanned most-recent-first; each unused article seeds a
/// group from its clustering candidates, and everything pulled into a group
/// is unavailable to later seeds. The result is scan-order dependent, not a
/// globally optimal clustering: two articles that would pair well can land
/// in different groups depending on what was seen first. That is the
/// contract, and the recency ordering of the scan is part of it.
///
/// Articles with no match never form a group of one, so every group holds
/// between 2 and 4 articles, and at most 10 groups are returned.
pub fn cluster_topics(articles: &[Article]) -> Vec<ComparisonGroup> {
    let mut sorted: Vec<&Article> = articles.iter().collect();
    sorted.sort_by(|a, b| {
        b.published_at
            .cmp(&a.published_at)
            .then_with(|| a.id.cmp(&b.id))
    });

    let mut used: HashSet<String> = HashSet::new();
    let mut groups: Vec<ComparisonGroup> = Vec::new();

    for seed in sorted {
        if groups.len() == MAX_GROUPS {
            break;
        }
        if used.contains(&seed.id) {
            continue;
        }

        let matches: Vec<Article> = clustering_candidates(articles, seed)
            .into_iter()
            .filter(|candidate| !used.contains(&candidate.id))
            .collect();
        if matches.is_empty() {
            continue;
        }

        let mut members = Vec::with_capacity(1 + matches.len());
        members.push(seed.clone());
        members.extend(matches);
        for member in &members {
            used.insert(member.id.clone());
        }

        // Representative keywords are pooled over every pulled-in member,
        // including ones the 4-article truncation below drops.
        let mut counts: HashMap<String, usize> = HashMap::new();
        for member in &members {
            for keyword in &member.keywords {
                *counts.entry(keyword.to_lowercase()).or_insert(0) += 1;
            }
        }
        let mut common: Vec<(String, usize)> =
            counts.into_iter().filter(|(_, count)| *count > 1).collect();
        common.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        let keywords: Vec<String> = common
            .into_iter()
            .take(MAX_GROUP_KEYWORDS)
            .map(|(keyword, _)| keyword)
            .collect();

        let topic = match keywords.first() {
            Some(keyword) => capitalize(keyword),
            None => seed
                .title
                .split_whitespace()
                .take(3)
                .collect::<Vec<_>>()
                .join(" "),
        };

        members.truncate(MAX_GROUP_ARTICLES);
        groups.push(ComparisonGroup {
            topic,
            keywords,
            news: members,
        });
    }

    debug!(
        "clustering produced {} groups from {} articles",
        groups.len(),
        articles.len()
    );
    groups
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use na_core::{Category, Sentiment};

    fn article(
        id: &str,
        title: &str,
        category: Category,
        keywords: &[&str],
        age_hours: i64,
    ) -> Article {
        Article {
            id: id.to_string(),
            title: title.to_string(),
            summary: String::new(),
            source: "wire".to_string(),
            category,
            sentiment: Sentiment::Neutral,
            sentiment_score: 0.5,
            published_at: Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap()
                - Duration::hours(age_hours),
            is_breaking: false,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            image_url: None,
            url: None,
        }
    }

    #[test]
    fn shared_keywords_form_one_group_and_loners_stay_out() {
        let corpus = vec![
            article("a", "Rate cut expected", Category::Economy, &["rates", "cenbank"], 1),
            article("b", "Markets await decision", Category::Economy, &["rates", "cenbank"], 2),
            article("c", "Quake drill held", Category::Health, &["earthquake"], 3),
        ];
        let groups = cluster_topics(&corpus);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].news.len(), 2);
        assert!(groups[0].news.iter().all(|n| n.id != "c"));
    }

    #[test]
    fn groups_partition_the_corpus() {
        let mut corpus = Vec::new();
        for i in 0..4 {
            corpus.push(article(
                &format!("econ{}", i),
                "Budget vote nears",
                Category::Economy,
                &["budget"],
                i,
            ));
            corpus.push(article(
                &format!("sport{}", i),
                "Derby ends level",
                Category::Sports,
                &["derby"],
                i,
            ));
        }
        let groups = cluster_topics(&corpus);
        let mut seen = HashSet::new();
        for group in &groups {
            assert!(group.news.len() >= 2 && group.news.len() <= MAX_GROUP_ARTICLES);
            for member in &group.news {
                assert!(seen.insert(member.id.clone()), "article in two groups");
            }
        }
    }

    #[test]
    fn group_count_is_capped_at_ten() {
        // eleven isolated pairs, one per category
        let categories = [
            Category::Politics,
            Category::Economy,
            Category::Technology,
            Category::Sports,
            Category::Health,
            Category::World,
            Category::Entertainment,
            Category::Education,
            Category::Science,
            Category::Environment,
            Category::Automotive,
        ];
        let mut corpus = Vec::new();
        for (i, category) in categories.iter().enumerate() {
            for j in 0..2 {
                corpus.push(article(
                    &format!("p{}-{}", i, j),
                    &format!("Pairstory{} unfolds", i),
                    *category,
                    &[&format!("pair{}", i)],
                    (i * 2 + j) as i64,
                ));
            }
        }
        let groups = cluster_topics(&corpus);
        assert_eq!(groups.len(), 10);
    }

    #[test]
    fn topic_comes_from_the_most_common_keyword() {
        let corpus = vec![
            article("a", "Rate cut expected", Category::Economy, &["rates"], 1),
            article("b", "Markets await decision", Category::Economy, &["rates"], 2),
        ];
        let groups = cluster_topics(&corpus);
        assert_eq!(groups[0].topic, "Rates");
        assert_eq!(groups[0].keywords, vec!["rates"]);
    }

    #[test]
    fn topic_falls_back_to_seed_title_words() {
        // grouped on title tokens only, so no keyword occurs twice
        let corpus = vec![
            article("a", "Harbor bridge reopens after storm", Category::World, &["infra"], 1),
            article("b", "Storm damage closes harbor bridge", Category::World, &["weather"], 2),
        ];
        let groups = cluster_topics(&corpus);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].topic, "Harbor bridge reopens");
        assert!(groups[0].keywords.is_empty());
    }

    #[test]
    fn keywords_pool_across_members_dropped_by_truncation() {
        // seed plus five matches; the last two matches rank lowest but still
        // contribute their shared keyword to the group
        let mut corpus = vec![article(
            "seed",
            "Chip plant announced",
            Category::Technology,
            &["chips", "fab"],
            0,
        )];
        for i in 0..3 {
            corpus.push(article(
                &format!("strong{}", i),
                "Another chip plant",
                Category::Technology,
                &["chips", "fab"],
                (i + 1) as i64,
            ));
        }
        for i in 0..2 {
            corpus.push(article(
                &format!("tail{}", i),
                "Supplier reacts",
                Category::Technology,
                &["chips", "rare"],
                (i + 4) as i64,
            ));
        }
        let groups = cluster_topics(&corpus);
        assert_eq!(groups.len(), 1);
        let group = &groups[0];
        assert_eq!(group.news.len(), MAX_GROUP_ARTICLES);
        assert!(group.news.iter().all(|n| !n.id.starts_with("tail")));
        assert!(group.keywords.contains(&"rare".to_string()));
    }

    #[test]
    fn repeat_calls_are_byte_identical() {
        let corpus = vec![
            article("a", "Rate cut expected", Category::Economy, &["rates"], 1),
            article("b", "Markets await decision", Category::Economy, &["rates"], 2),
            article("c", "Derby ends level", Category::Sports, &["derby"], 3),
            article("d", "Derby replay set", Category::Sports, &["derby"], 4),
        ];
        let first = cluster_topics(&corpus);
        let second = cluster_topics(&corpus);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn empty_corpus_yields_no_groups() {
        assert!(cluster_topics(&[]).is_empty());
    }
}
