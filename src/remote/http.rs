//! reqwest-backed client for the collection endpoint.

use reqwest::Client;
use reqwest::header;
use url::Url;

use crate::config::Config;
use crate::error::{Result, SoapboxError};
use crate::types::{FeedbackItem, FeedbackPage};

use super::FeedbackApi;

/// HTTP implementation of [`FeedbackApi`].
///
/// One request attempt per call, no retries. The client carries no request
/// timeout: a hung request leaves the calling operation suspended.
#[derive(Debug, Clone)]
pub struct HttpFeedbackApi {
    client: Client,
    endpoint: Url,
}

impl HttpFeedbackApi {
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.endpoint.clone())
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl FeedbackApi for HttpFeedbackApi {
    async fn list_feedback(&self) -> Result<Vec<FeedbackItem>> {
        tracing::debug!(endpoint = %self.endpoint, "fetching feedback items");

        let response = self
            .client
            .get(self.endpoint.clone())
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SoapboxError::Status(status.as_u16()));
        }

        let page: FeedbackPage = response.json().await?;
        tracing::debug!(count = page.feedbacks.len(), "fetched feedback items");
        Ok(page.feedbacks)
    }

    async fn create_feedback(&self, item: &FeedbackItem) -> Result<()> {
        tracing::debug!(id = item.id, company = %item.company, "creating feedback item");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(header::ACCEPT, "application/json")
            .json(item)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SoapboxError::Status(status.as_u16()));
        }

        // Success body is not consumed; callers reload to observe the
        // accepted state.
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_uses_configured_endpoint() {
        let config = Config::default();
        let api = HttpFeedbackApi::from_config(&config);
        assert_eq!(api.endpoint(), &config.endpoint);
    }
}
