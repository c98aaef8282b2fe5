use reqwest::Method;

use crate::error::{LostFoundError, Result};
use crate::types::{Item, NewItem};

use super::ApiClient;

impl ApiClient {
    /// Fetch one item. A 404 becomes [`LostFoundError::ItemNotFound`].
    pub async fn get_item(&self, id: u64) -> Result<Item> {
        self.get(&format!("/api/items/{id}"))
            .await
            .map_err(|e| match e {
                LostFoundError::NotFound(_) => LostFoundError::ItemNotFound(id.to_string()),
                other => other,
            })
    }

    /// Register a found item
    pub async fn create_item(&self, item: &NewItem) -> Result<Item> {
        let builder = self.request(Method::POST, "/api/items")?.json(item);
        self.send(builder).await
    }

    pub async fn delete_item(&self, id: u64) -> Result<()> {
        let builder = self.request(Method::DELETE, &format!("/api/items/{id}"))?;
        self.send_empty(builder).await.map_err(|e| match e {
            LostFoundError::NotFound(_) => LostFoundError::ItemNotFound(id.to_string()),
            other => other,
        })
    }

    /// Items registered by the signed-in user
    pub async fn my_items(&self) -> Result<Vec<Item>> {
        self.get("/api/items/my").await
    }
}
