use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use na_core::{Article, NewsStorage, Result, ViewRecord};
use tokio::sync::RwLock;

pub struct MemoryStore {
    articles: Vec<Article>,
    views: HashMap<String, Vec<ViewRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            articles: Vec::new(),
            views: HashMap::new(),
        }
    }

    pub fn store_article(&mut self, article: &Article) {
        if let Some(existing) = self.articles.iter_mut().find(|a| a.id == article.id) {
            *existing = article.clone();
        } else {
            self.articles.push(article.clone());
        }
    }

    pub fn list_articles(&self) -> Vec<Article> {
        self.articles.clone()
    }

    pub fn get_article(&self, id: &str) -> Option<Article> {
        self.articles.iter().find(|a| a.id == id).cloned()
    }

    pub fn record_view(&mut self, user_id: &str, view: &ViewRecord) {
        // newest first, so reads are a plain prefix
        self.views
            .entry(user_id.to_string())
            .or_default()
            .insert(0, view.clone());
    }

    pub fn views_for_user(&self, user_id: &str, limit: usize) -> Vec<ViewRecord> {
        self.views
            .get(user_id)
            .map(|views| views.iter().take(limit).cloned().collect())
            .unwrap_or_default()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

pub struct MemoryStorage {
    store: Arc<RwLock<MemoryStore>>,
}

impl MemoryStorage {
    pub async fn new() -> Result<Self> {
        Ok(Self {
            store: Arc::new(RwLock::new(MemoryStore::new())),
        })
    }
}

#[async_trait]
impl NewsStorage for MemoryStorage {
    async fn store_article(&self, article: &Article) -> Result<()> {
        let mut store = self.store.write().await;
        store.store_article(article);
        Ok(())
    }

    async fn list_articles(&self) -> Result<Vec<Article>> {
        let store = self.store.read().await;
        Ok(store.list_articles())
    }

    async fn get_article(&self, id: &str) -> Result<Option<Article>> {
        let store = self.store.read().await;
        Ok(store.get_article(id))
    }

    async fn record_view(&self, user_id: &str, view: &ViewRecord) -> Result<()> {
        let mut store = self.store.write().await;
        store.record_view(user_id, view);
        Ok(())
    }

    async fn views_for_user(&self, user_id: &str, limit: usize) -> Result<Vec<ViewRecord>> {
        let store = self.store.read().await;
        Ok(store.views_for_user(user_id, limit))
    }
}
