//! Scoring, grouping and aggregation over an in-memory article corpus.
//!
//! Every operation here is a pure, synchronous function of its inputs: the
//! caller materializes the corpus and view history (however it likes) and
//! gets a freshly computed result back. Nothing is cached or retained
//! between calls.

pub mod cluster;
pub mod compare;
pub mod profile;
pub mod recommend;
pub mod similar;
pub mod stats;
pub mod trends;

pub use cluster::{cluster_topics, ComparisonGroup};
pub use compare::{aggregate_comparison, ComparisonSet, ComparisonSummary, KeywordCount};
pub use profile::{build_preference_profile, PreferenceProfile};
pub use recommend::recommend;
pub use similar::{clustering_candidates, find_similar};
pub use stats::{reading_stats, CategoryCount, ReadingStats};
pub use trends::{corpus_trends, SentimentCount, TrendSummary};
