use super::{ClientError, ContactApi, ContactResponse};
use crate::models::ContactSubmission;
use async_trait::async_trait;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct HttpContactApi {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpContactApi {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}/api/contact", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContactApi for HttpContactApi {
    /// The body is read whatever the status, since 400s carry the message the
    /// form should show.
    async fn send(&self, submission: &ContactSubmission) -> Result<ContactResponse, ClientError> {
        let response = self.client.post(&self.endpoint).json(submission).send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!(status = status.as_u16(), "Contact endpoint responded");

        serde_json::from_str(&body)
            .map_err(|e| ClientError::InvalidResponse(format!("status {}: {}", status, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_url() {
        assert_eq!(
            HttpContactApi::new("http://127.0.0.1:3000/").endpoint(),
            "http://127.0.0.1:3000/api/contact"
        );
        assert_eq!(
            HttpContactApi::new("https://ehddetailing.com").endpoint(),
            "https://ehddetailing.com/api/contact"
        );
    }

    #[tokio::test]
    async fn test_unreachable_server_is_an_http_error() {
        let api = HttpContactApi::new("http://127.0.0.1:9");
        let result = api.send(&ContactSubmission::default()).await;
        assert!(matches!(result, Err(ClientError::Http(_))));
    }
}
