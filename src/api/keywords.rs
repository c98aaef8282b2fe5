use reqwest::Method;
use serde::Serialize;

use crate::error::Result;
use crate::types::WatchKeyword;

use super::ApiClient;

#[derive(Debug, Serialize)]
struct KeywordRequest<'a> {
    keyword: &'a str,
}

impl ApiClient {
    pub async fn add_keyword(&self, keyword: &str) -> Result<WatchKeyword> {
        let builder = self
            .request(Method::POST, "/api/keywords")?
            .json(&KeywordRequest { keyword });
        self.send(builder).await
    }

    /// Active keywords only
    pub async fn keywords(&self) -> Result<Vec<WatchKeyword>> {
        self.get("/api/keywords").await
    }

    /// Active and deactivated keywords
    pub async fn all_keywords(&self) -> Result<Vec<WatchKeyword>> {
        self.get("/api/keywords/all").await
    }

    /// Soft delete: the keyword is deactivated, not removed
    pub async fn delete_keyword(&self, id: u64) -> Result<()> {
        let builder = self.request(Method::DELETE, &format!("/api/keywords/{id}"))?;
        self.send_empty(builder).await
    }

    pub async fn reactivate_keyword(&self, id: u64) -> Result<()> {
        let builder = self.request(Method::PUT, &format!("/api/keywords/{id}/reactivate"))?;
        self.send_empty(builder).await
    }
}
