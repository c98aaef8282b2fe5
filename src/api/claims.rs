use reqwest::Method;
use serde::Serialize;

use crate::error::Result;
use crate::types::Claim;

use super::ApiClient;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ClaimRequest<'a> {
    item_id: u64,
    message: &'a str,
}

impl ApiClient {
    /// Ask the finder of `item_id` to hand the item over
    pub async fn request_claim(&self, item_id: u64, message: &str) -> Result<Claim> {
        let builder = self
            .request(Method::POST, "/api/claims")?
            .json(&ClaimRequest { item_id, message });
        self.send(builder).await
    }

    pub async fn approve_claim(&self, claim_id: u64) -> Result<()> {
        let builder = self.request(Method::PUT, &format!("/api/claims/{claim_id}/approve"))?;
        self.send_empty(builder).await
    }

    pub async fn reject_claim(&self, claim_id: u64) -> Result<()> {
        let builder = self.request(Method::PUT, &format!("/api/claims/{claim_id}/reject"))?;
        self.send_empty(builder).await
    }

    pub async fn claims_for_item(&self, item_id: u64) -> Result<Vec<Claim>> {
        self.get(&format!("/api/claims/item/{item_id}")).await
    }

    /// Claims other users made on my items
    pub async fn received_claims(&self) -> Result<Vec<Claim>> {
        self.get("/api/claims/received").await
    }

    /// Claims I made
    pub async fn sent_claims(&self) -> Result<Vec<Claim>> {
        self.get("/api/claims/sent").await
    }
}
