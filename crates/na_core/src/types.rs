use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::Result;

/// Fixed category set produced by the upstream classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Politics,
    Economy,
    Technology,
    Sports,
    Health,
    World,
    Entertainment,
    Education,
    Science,
    Environment,
    Automotive,
    Crypto,
    Finance,
    RealEstate,
    Agriculture,
    Crime,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Politics => "politics",
            Category::Economy => "economy",
            Category::Technology => "technology",
            Category::Sports => "sports",
            Category::Health => "health",
            Category::World => "world",
            Category::Entertainment => "entertainment",
            Category::Education => "education",
            Category::Science => "science",
            Category::Environment => "environment",
            Category::Automotive => "automotive",
            Category::Crypto => "crypto",
            Category::Finance => "finance",
            Category::RealEstate => "realestate",
            Category::Agriculture => "agriculture",
            Category::Crime => "crime",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "politics" => Ok(Category::Politics),
            "economy" => Ok(Category::Economy),
            "technology" => Ok(Category::Technology),
            "sports" => Ok(Category::Sports),
            "health" => Ok(Category::Health),
            "world" => Ok(Category::World),
            "entertainment" => Ok(Category::Entertainment),
            "education" => Ok(Category::Education),
            "science" => Ok(Category::Science),
            "environment" => Ok(Category::Environment),
            "automotive" => Ok(Category::Automotive),
            "crypto" => Ok(Category::Crypto),
            "finance" => Ok(Category::Finance),
            "realestate" => Ok(Category::RealEstate),
            "agriculture" => Ok(Category::Agriculture),
            "crime" => Ok(Category::Crime),
            other => Err(Error::InvalidRecord(format!("unknown category: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "positive" => Ok(Sentiment::Positive),
            "neutral" => Ok(Sentiment::Neutral),
            "negative" => Ok(Sentiment::Negative),
            other => Err(Error::InvalidRecord(format!("unknown sentiment: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub source: String,
    pub category: Category,
    pub sentiment: Sentiment,
    pub sentiment_score: f64,
    pub published_at: DateTime<Utc>,
    pub is_breaking: bool,
    pub keywords: Vec<String>,
    pub image_url: Option<String>,
    pub url: Option<String>,
}

/// One logged article view. Category and keywords are snapshotted from the
/// article at view time so profile building does not depend on later edits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewRecord {
    pub article_id: String,
    pub category: Category,
    pub keywords: Vec<String>,
    pub reading_time_seconds: u32,
}

/// The loosely-typed row shape the hosted store hands back. Converted into a
/// strict [`Article`] in one place so everything downstream can assume
/// well-typed, lowercase-normalized data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawNewsRecord {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub source: String,
    pub category: String,
    pub sentiment: String,
    pub sentiment_score: f64,
    pub published_at: String,
    #[serde(default)]
    pub is_breaking: Option<bool>,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl RawNewsRecord {
    pub fn into_article(self) -> Result<Article> {
        let category = self.category.parse::<Category>()?;
        let sentiment = self.sentiment.parse::<Sentiment>()?;
        let published_at = DateTime::parse_from_rfc3339(&self.published_at)
            .map_err(|e| Error::InvalidRecord(format!("bad published_at: {}", e)))?
            .with_timezone(&Utc);
        let keywords = self
            .keywords
            .unwrap_or_default()
            .into_iter()
            .map(|k| k.to_lowercase())
            .collect();

        Ok(Article {
            id: self.id,
            title: self.title,
            summary: self.summary,
            source: self.source,
            category,
            sentiment,
            sentiment_score: self.sentiment_score,
            published_at,
            is_breaking: self.is_breaking.unwrap_or(false),
            keywords,
            image_url: self.image_url,
            url: self.url,
        })
    }
}
