use std::time::Duration;

use async_trait::async_trait;

use crate::{
    error::{Result, ServiceError},
    models::request::{DetectIntentRequest, DetectIntentResponse},
};

/// Reply sent back by `/ask` whenever the platform gives nothing usable.
pub const FALLBACK_REPLY: &str = "Sorry, I didn't get that.";

pub const LANGUAGE_CODE: &str = "en";

/// Relays free text to the conversational platform.
#[async_trait]
pub trait Forwarder: Send + Sync {
    /// Returns the platform's `fulfillmentText`, or `None` if the reply had none.
    async fn forward(&self, message: &str) -> Result<Option<String>>;
}

/// Posts detect-intent envelopes to a Dialogflow endpoint with a bearer token.
pub struct DialogflowForwarder {
    client: reqwest::Client,
    endpoint: Option<String>,
    token: String,
}

impl DialogflowForwarder {
    pub fn new(endpoint: Option<String>, token: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            token,
        })
    }
}

#[async_trait]
impl Forwarder for DialogflowForwarder {
    async fn forward(&self, message: &str) -> Result<Option<String>> {
        let endpoint = self.endpoint.as_deref().ok_or(ServiceError::NotConfigured)?;
        let response = self
            .client
            .post(endpoint)
            .bearer_auth(&self.token)
            .json(&DetectIntentRequest::new(message, LANGUAGE_CODE))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::ForwardStatus(status.as_u16()));
        }

        let reply: DetectIntentResponse = response.json().await?;
        Ok(reply.fulfillment_text())
    }
}
