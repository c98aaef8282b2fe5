//! REST client for the lost-and-found backend.
//!
//! # Security Note - Logging
//!
//! The bearer token is attached as a sensitive header value, so reqwest's
//! `Debug` output shows it as `Sensitive` rather than the token itself. The
//! request log lines emitted here carry only the method and URL.

pub mod auth;
pub mod claims;
pub mod envelope;
pub mod items;
pub mod keywords;
pub mod notifications;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::Config;
use crate::error::{LostFoundError, Result};
use crate::listing::request::Refinements;
use crate::session::SessionContext;
use crate::types::PageResponse;

/// The three listing endpoints behind the item listing page
#[async_trait]
pub trait ItemSource: Send + Sync {
    async fn list_items(&self, page: u32, size: u32) -> Result<PageResponse>;

    /// Keyword search. Without refinements this is the bare query form.
    async fn search_items(
        &self,
        query: &str,
        page: u32,
        size: u32,
        refinements: Option<&Refinements>,
    ) -> Result<PageResponse>;

    async fn filter_items(
        &self,
        refinements: &Refinements,
        page: u32,
        size: u32,
    ) -> Result<PageResponse>;
}

/// HTTP client bound to one backend and one session.
///
/// Cheap to clone; clones share the connection pool and the session.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    session: SessionContext,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration, session: SessionContext) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| LostFoundError::Config(format!("invalid api_url '{base_url}': {e}")))?;
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url,
            session,
        })
    }

    pub fn from_config(config: &Config, session: SessionContext) -> Result<Self> {
        Self::new(
            &config.api_url,
            Duration::from_secs(config.request_timeout),
            session,
        )
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for an `/api/...` path, keeping any path prefix of the base
    fn url(&self, path: &str) -> Result<Url> {
        let joined = format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path);
        Url::parse(&joined).map_err(|e| LostFoundError::Config(format!("invalid URL '{joined}': {e}")))
    }

    /// Start a request, attaching the bearer token when signed in.
    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self.url(path)?;
        tracing::debug!(%method, %url, "api request");

        let mut builder = self.http.request(method, url);
        if let Some(bearer) = self.session.bearer() {
            let mut value = HeaderValue::from_str(&bearer)
                .map_err(|_| LostFoundError::Other("session token is not a valid header".into()))?;
            value.set_sensitive(true);
            builder = builder.header(AUTHORIZATION, value);
        }
        Ok(builder)
    }

    /// Send and return the raw body of a successful response.
    ///
    /// A 401 invalidates the session before returning [`LostFoundError::Unauthorized`].
    async fn execute(&self, builder: RequestBuilder) -> Result<String> {
        let response = builder.send().await.inspect_err(|e| {
            tracing::warn!("api transport error: {e}");
        })?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            return Ok(body);
        }

        tracing::warn!(status = status.as_u16(), "api request failed");
        let message = envelope::error_message(&body)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());

        match status {
            StatusCode::UNAUTHORIZED => {
                self.session.invalidate();
                Err(LostFoundError::Unauthorized)
            }
            StatusCode::NOT_FOUND => Err(LostFoundError::NotFound(message)),
            _ => Err(LostFoundError::Api {
                status: status.as_u16(),
                message,
            }),
        }
    }

    /// Send and decode the (possibly enveloped) payload.
    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let body = self.execute(builder).await?;
        envelope::decode(&body)
    }

    /// Send where no payload is expected; a `success: false` envelope still fails.
    async fn send_empty(&self, builder: RequestBuilder) -> Result<()> {
        let body = self.execute(builder).await?;
        envelope::check(&body)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(self.request(Method::GET, path)?).await
    }
}

#[async_trait]
impl ItemSource for ApiClient {
    async fn list_items(&self, page: u32, size: u32) -> Result<PageResponse> {
        let builder = self
            .request(Method::GET, "/api/items")?
            .query(&[("page", page), ("size", size)]);
        self.send(builder).await
    }

    async fn search_items(
        &self,
        query: &str,
        page: u32,
        size: u32,
        refinements: Option<&Refinements>,
    ) -> Result<PageResponse> {
        let builder = match refinements {
            None => self.request(Method::GET, "/api/items/search")?.query(&[
                ("query", query.to_string()),
                ("page", page.to_string()),
                ("size", size.to_string()),
            ]),
            Some(refinements) => self
                .request(Method::POST, "/api/items/search")?
                .json(&crate::listing::request::SearchBody {
                    query,
                    page,
                    size,
                    refinements,
                }),
        };
        self.send(builder).await
    }

    async fn filter_items(
        &self,
        refinements: &Refinements,
        page: u32,
        size: u32,
    ) -> Result<PageResponse> {
        let builder = self
            .request(Method::POST, "/api/items/filter")?
            .json(&crate::listing::request::FilterBody {
                refinements,
                page,
                size,
            });
        self.send(builder).await
    }
}
