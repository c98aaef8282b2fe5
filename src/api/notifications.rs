use reqwest::Method;

use crate::error::Result;
use crate::types::Notification;

use super::ApiClient;

impl ApiClient {
    pub async fn notifications(&self) -> Result<Vec<Notification>> {
        self.get("/api/notifications").await
    }

    pub async fn mark_notification_read(&self, id: u64) -> Result<()> {
        self.put_empty(&format!("/api/notifications/{id}/read")).await
    }

    pub async fn archive_notification(&self, id: u64) -> Result<()> {
        self.put_empty(&format!("/api/notifications/{id}/archive"))
            .await
    }

    pub async fn delete_notification(&self, id: u64) -> Result<()> {
        let builder = self.request(Method::DELETE, &format!("/api/notifications/{id}"))?;
        self.send_empty(builder).await
    }

    pub async fn mark_all_notifications_read(&self) -> Result<()> {
        self.put_empty("/api/notifications/read-all").await
    }

    async fn put_empty(&self, path: &str) -> Result<()> {
        let builder = self.request(Method::PUT, path)?;
        self.send_empty(builder).await
    }
}
