// SPDX-License-Identifier: MPL-2.0
//! HTTP delivery of guest inquiries to the contact endpoint.

use super::{Acknowledgement, Inquiry, GENERIC_REJECTION};
use crate::config::ContactConfig;
use crate::error::{ContactError, Error, Result};
use std::time::Duration;

/// Submits inquiries to the site's contact endpoint.
///
/// The endpoint answers success or failure in the JSON body, so the
/// response is parsed regardless of the HTTP status line; only a missing
/// or unreadable body counts as a network failure.
#[derive(Debug, Clone)]
pub struct ContactClient {
    http: reqwest::Client,
    endpoint: reqwest::Url,
}

impl ContactClient {
    /// Creates a client for the configured endpoint.
    ///
    /// The browser resolved the form's relative endpoint against the
    /// page origin; outside a page there is no origin, so the endpoint
    /// must be an absolute URL here and anything else is rejected as a
    /// configuration error.
    pub fn new(config: &ContactConfig) -> Result<Self> {
        let endpoint = reqwest::Url::parse(&config.endpoint).map_err(|_| {
            Error::Config(format!(
                "contact endpoint '{}' is not an absolute URL",
                config.endpoint
            ))
        })?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("Araucarias/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ContactError::Network(e.to_string()))?;
        Ok(Self { http, endpoint })
    }

    /// Returns the endpoint inquiries are posted to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// Validates and submits one inquiry.
    ///
    /// Validation failures never reach the network. A reachable endpoint
    /// that declines the inquiry yields [`ContactError::Rejected`] with
    /// the endpoint's message, or the generic fallback when it sent none.
    pub async fn submit(
        &self,
        inquiry: &Inquiry,
    ) -> std::result::Result<Acknowledgement, ContactError> {
        inquiry.validate()?;

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(inquiry)
            .send()
            .await
            .map_err(|e| ContactError::Network(e.to_string()))?;

        let ack: Acknowledgement = response
            .json()
            .await
            .map_err(|e| ContactError::Network(e.to_string()))?;

        if ack.success {
            Ok(ack)
        } else {
            Err(ContactError::Rejected(
                ack.message
                    .unwrap_or_else(|| GENERIC_REJECTION.to_string()),
            ))
        }
    }
}
