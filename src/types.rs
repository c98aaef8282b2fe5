use std::fmt;
use std::str::FromStr;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::LostFoundError;

/// Fixed page size for every item listing request.
pub const PAGE_SIZE: u32 = 20;

/// Maximum number of locations a listing query can carry.
pub const MAX_LOCATIONS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Wallet,
    Phone,
    Bag,
    Key,
    Card,
    Electronics,
    Clothing,
    Jewelry,
    Document,
    /// Also absorbs categories this client doesn't know yet
    #[serde(other)]
    Other,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Wallet,
        Category::Phone,
        Category::Bag,
        Category::Key,
        Category::Card,
        Category::Electronics,
        Category::Clothing,
        Category::Jewelry,
        Category::Document,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Wallet => "WALLET",
            Category::Phone => "PHONE",
            Category::Bag => "BAG",
            Category::Key => "KEY",
            Category::Card => "CARD",
            Category::Electronics => "ELECTRONICS",
            Category::Clothing => "CLOTHING",
            Category::Jewelry => "JEWELRY",
            Category::Document => "DOCUMENT",
            Category::Other => "OTHER",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = LostFoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == upper)
            .ok_or_else(|| LostFoundError::InvalidCategory(s.to_string()))
    }
}

/// Lifecycle status of a registered item. Unknown server values are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemStatus {
    Registered,
    ClaimPending,
    Returned,
    Unknown(String),
}

impl From<String> for ItemStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "REGISTERED" => ItemStatus::Registered,
            "CLAIM_PENDING" => ItemStatus::ClaimPending,
            "RETURNED" => ItemStatus::Returned,
            _ => ItemStatus::Unknown(s),
        }
    }
}

impl From<ItemStatus> for String {
    fn from(status: ItemStatus) -> Self {
        status.to_string()
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemStatus::Registered => write!(f, "REGISTERED"),
            ItemStatus::ClaimPending => write!(f, "CLAIM_PENDING"),
            ItemStatus::Returned => write!(f, "RETURNED"),
            ItemStatus::Unknown(s) => write!(f, "{s}"),
        }
    }
}

/// Read-only projection of a found item as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub category: Category,
    #[serde(default)]
    pub description: String,
    pub found_date: Date,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ItemStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

/// Payload for registering a found item
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub name: String,
    pub category: Category,
    pub description: String,
    pub found_date: Date,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// One page of items, exactly as the backend ordered them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse {
    #[serde(alias = "content")]
    pub items: Vec<Item>,
    #[serde(alias = "totalElements")]
    pub total_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimStatus {
    Pending,
    Approved,
    Rejected,
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClaimStatus::Pending => write!(f, "pending"),
            ClaimStatus::Approved => write!(f, "approved"),
            ClaimStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// A request by one user to recover an item registered by another
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    pub id: u64,
    pub item_id: u64,
    #[serde(default)]
    pub item_name: Option<String>,
    #[serde(default)]
    pub claimant_name: Option<String>,
    #[serde(default)]
    pub message: String,
    pub status: ClaimStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A saved search term that triggers a notification on matching registrations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchKeyword {
    pub id: u64,
    pub keyword: String,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub item_id: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!("wallet".parse::<Category>().unwrap(), Category::Wallet);
        assert_eq!(" PHONE ".parse::<Category>().unwrap(), Category::Phone);
        assert!("umbrella".parse::<Category>().is_err());
    }

    #[test]
    fn test_item_deserializes_camel_case() {
        let json = r#"{
            "id": 7,
            "name": "Black wallet",
            "category": "WALLET",
            "description": "leather",
            "foundDate": "2024-03-02",
            "location": "Gangnam Station",
            "imageUrl": "https://img/7.png",
            "status": "CLAIM_PENDING"
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.category, Category::Wallet);
        assert_eq!(item.found_date, jiff::civil::date(2024, 3, 2));
        assert_eq!(item.status, Some(ItemStatus::ClaimPending));
        assert_eq!(item.brand, None);
    }

    #[test]
    fn test_unknown_item_status_is_preserved() {
        let status: ItemStatus = serde_json::from_str("\"DISPOSED\"").unwrap();
        assert_eq!(status, ItemStatus::Unknown("DISPOSED".to_string()));
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"DISPOSED\"");
    }
}
