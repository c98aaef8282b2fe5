mod auth;
mod browse;
mod claims;
mod config;
mod dashboard;
pub mod interactive;
mod items;
mod keywords;
mod notifications;

pub use auth::{cmd_auth_login, cmd_auth_logout, cmd_auth_signup, cmd_auth_whoami};
pub use browse::cmd_browse;
pub use claims::{
    cmd_claims_approve, cmd_claims_item, cmd_claims_received, cmd_claims_reject,
    cmd_claims_request, cmd_claims_sent,
};
pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use dashboard::cmd_dashboard;
pub use items::{
    ItemsListOptions, RegisterOptions, cmd_items_delete, cmd_items_list, cmd_items_mine,
    cmd_items_register, cmd_items_show,
};
pub use keywords::{
    cmd_keywords_add, cmd_keywords_delete, cmd_keywords_list, cmd_keywords_reactivate,
};
pub use notifications::{
    cmd_notifications_archive, cmd_notifications_delete, cmd_notifications_list,
    cmd_notifications_read, cmd_notifications_read_all,
};

use serde_json::Value;

use crate::api::ApiClient;
use crate::cli::{ListingArgs, OutputOptions};
use crate::config::Config;
use crate::error::{LostFoundError, Result};
use crate::listing::NavigationPayload;
use crate::session::{SessionContext, SessionStore};

/// Everything a command needs to talk to the backend
pub struct AppContext {
    pub config: Config,
    pub client: ApiClient,
}

impl AppContext {
    /// Load config and the persisted session
    pub fn load() -> Result<Self> {
        let config = Config::load()?;
        let session = SessionContext::persistent(SessionStore::default_location()?)?;
        let client = ApiClient::from_config(&config, session)?;
        Ok(Self { config, client })
    }

    pub fn session(&self) -> &SessionContext {
        self.client.session()
    }

    /// Fail early for commands that need a signed-in user
    pub fn require_auth(&self) -> Result<()> {
        if self.session().is_authenticated() {
            Ok(())
        } else {
            Err(LostFoundError::Unauthorized)
        }
    }
}

/// Result of a command, printable as JSON or text
pub struct CommandOutput {
    json: Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: Value) -> Self {
        Self { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn print(self, output: OutputOptions) -> Result<()> {
        match self.text {
            Some(text) if !output.json => {
                println!("{text}");
                Ok(())
            }
            _ => print_json(&self.json),
        }
    }
}

pub fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

impl From<&ListingArgs> for NavigationPayload {
    fn from(args: &ListingArgs) -> Self {
        NavigationPayload {
            search_query: args.search.clone(),
            category: args.category,
            location: None,
            locations: args.locations.clone(),
            distance: args.distance.map(|band| band.minutes()),
            brand: args.brand.clone(),
            found_after: args.found_after,
        }
    }
}

impl ListingArgs {
    /// Navigation payload for these flags; `None` when no flag is set
    pub fn payload(&self) -> Option<NavigationPayload> {
        let payload = NavigationPayload::from(self);
        (payload != NavigationPayload::default()).then_some(payload)
    }
}
