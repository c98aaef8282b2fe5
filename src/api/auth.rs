use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::session::SessionTokens;
use crate::types::User;

use super::ApiClient;

#[derive(Serialize)]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignUpRequest<'a> {
    email: &'a str,
    password: &'a str,
    name: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenResponse {
    access_token: String,
    refresh_token: String,
}

impl From<TokenResponse> for SessionTokens {
    fn from(response: TokenResponse) -> Self {
        SessionTokens::new(response.access_token, response.refresh_token)
    }
}

impl ApiClient {
    /// Sign in and install the issued tokens in the session
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<()> {
        let builder = self
            .request(Method::POST, "/api/auth/signin")?
            .json(&SignInRequest { email, password });
        let tokens: TokenResponse = self.send(builder).await?;
        self.session.sign_in(tokens.into())
    }

    /// Create an account; the backend signs the new user in directly
    pub async fn sign_up(&self, email: &str, password: &str, name: &str) -> Result<()> {
        let builder = self
            .request(Method::POST, "/api/auth/signup")?
            .json(&SignUpRequest {
                email,
                password,
                name,
            });
        let tokens: TokenResponse = self.send(builder).await?;
        self.session.sign_in(tokens.into())
    }

    pub async fn me(&self) -> Result<User> {
        self.get("/api/auth/me").await
    }

    /// Tell the backend, then drop the local session whatever it answered.
    pub async fn sign_out(&self) -> Result<()> {
        let remote = match self.request(Method::POST, "/api/auth/logout") {
            Ok(builder) => self.send_empty(builder).await,
            Err(e) => Err(e),
        };
        if let Err(e) = &remote {
            tracing::warn!("logout request failed: {e}");
        }
        self.session.sign_out()
    }
}
