use async_trait::async_trait;
use serde::Deserialize;

use crate::{entities::contact_me::NewContactMessage, errors::RelayError, settings::AppConfig};

/// Outbound boundary to the email-sending endpoint. The contact form is the
/// only caller; there are no retries, a failed send is terminal.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailRelay: Send + Sync {
    async fn send(&self, msg: &NewContactMessage) -> Result<(), RelayError>;
}

#[derive(Clone)]
pub struct HttpEmailRelay {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RelayErrorBody {
    error: Option<String>,
}

impl HttpEmailRelay {
    pub fn new(config: &AppConfig) -> Self {
        HttpEmailRelay {
            client: reqwest::Client::new(),
            endpoint: config.contact_relay_url.clone(),
            api_key: config.contact_relay_api_key.clone(),
        }
    }
}

#[async_trait]
impl EmailRelay for HttpEmailRelay {
    async fn send(&self, msg: &NewContactMessage) -> Result<(), RelayError> {
        let mut request = self.client.post(&self.endpoint).json(msg);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| RelayError::Connection(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        // Any non-2xx counts as failure; pull the error message out of the
        // JSON body when the endpoint provides one.
        let detail = response
            .json::<RelayErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| "no error detail provided".to_string());

        Err(RelayError::Rejected {
            status: status.as_u16(),
            detail,
        })
    }
}
