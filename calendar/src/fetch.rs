//! One-shot authenticated reminder fetch.

use tracing::info;

use crate::config::WidgetConfig;
use crate::index::EventIndex;
use crate::models::{RemindersRequest, RemindersResponse};
use crate::{Error, Result};

/// Client for the reminders endpoint.
///
/// Performs a single fetch per call; there is no retry, timeout or
/// in-flight de-duplication here. A host that re-triggers on changing
/// inputs must guard against overlapping fetches itself.
pub struct ReminderFetcher {
    client: reqwest::Client,
    config: WidgetConfig,
}

impl ReminderFetcher {
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Use a preconfigured HTTP client (shared pools, custom TLS).
    pub fn with_client(client: reqwest::Client, config: WidgetConfig) -> Self {
        Self { client, config }
    }

    /// Fetch, validate and normalize the user's reminders.
    pub async fn fetch(&self) -> Result<EventIndex> {
        info!("fetching reminders for user {}", self.config.user_id);

        let response = self
            .client
            .post(&self.config.endpoint)
            .header("Authorization", format!("Bearer {}", self.config.token))
            .json(&RemindersRequest {
                t_user_id: self.config.user_id,
            })
            .send()
            .await
            .map_err(|e| Error::Transport(format!("reminders request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Transport(format!(
                "reminders endpoint returned {}",
                status
            )));
        }

        let body: RemindersResponse = response
            .json()
            .await
            .map_err(|e| Error::Data(format!("malformed reminders response: {}", e)))?;

        index_from_response(body)
    }
}

/// Validate a decoded response envelope and build the index.
///
/// Factored out of [`ReminderFetcher::fetch`] so the contract is testable
/// without a network.
pub fn index_from_response(response: RemindersResponse) -> Result<EventIndex> {
    if response.status != "ok" {
        return Err(Error::Data(format!(
            "reminders status was {:?}, expected \"ok\"",
            response.status
        )));
    }
    Ok(EventIndex::from_reminders(&response.reminders))
}
