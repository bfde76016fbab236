use async_trait::async_trait;

use crate::types::{Article, ViewRecord};
use crate::Result;

#[async_trait]
pub trait NewsStorage: Send + Sync {
    /// Store an article, replacing any existing article with the same id
    async fn store_article(&self, article: &Article) -> Result<()>;

    /// Get the full article corpus
    async fn list_articles(&self) -> Result<Vec<Article>>;

    /// Look up a single article by id
    async fn get_article(&self, id: &str) -> Result<Option<Article>>;

    /// Log a view for a user (newest views first)
    async fn record_view(&self, user_id: &str, view: &ViewRecord) -> Result<()>;

    /// Get a user's view history, newest first, capped at `limit`
    async fn views_for_user(&self, user_id: &str, limit: usize) -> Result<Vec<ViewRecord>>;
}
