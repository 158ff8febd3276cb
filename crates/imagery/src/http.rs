//! HTTP client wrapper with retry logic.

use crate::error::{ImageryError, Result};
use reqwest::Client;
use std::time::Duration;

/// HTTP client for fetching basemap imagery.
pub struct HttpClient {
    client: Client,
    max_retries: u32,
}

impl HttpClient {
    /// Create a new HTTP client.
    pub fn new(request_timeout: Duration, max_retries: u32) -> Result<Self> {
        let client = Client::builder().timeout(request_timeout).build()?;

        Ok(Self {
            client,
            max_retries,
        })
    }

    /// Fetch the full response body of a GET request.
    ///
    /// Connect and timeout failures are retried with exponential backoff;
    /// an error status from the server is not retried.
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let req = self.client.get(url);
        let resp = self.execute_with_retry(req).await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ImageryError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = resp.bytes().await?;
        Ok(bytes.to_vec())
    }

    /// Execute a request with exponential backoff retry.
    async fn execute_with_retry(
        &self,
        request: reqwest::RequestBuilder,
    ) -> std::result::Result<reqwest::Response, reqwest::Error> {
        let mut last_err = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let backoff_ms = 100u64 * 2u64.pow(attempt - 1);
                tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
            }

            match request.try_clone() {
                Some(cloned) => match cloned.send().await {
                    Ok(resp) => return Ok(resp),
                    Err(e) if e.is_timeout() || e.is_connect() => {
                        last_err = Some(e);
                        continue;
                    }
                    Err(e) => return Err(e),
                },
                None => {
                    return request.send().await;
                }
            }
        }

        Err(last_err.unwrap())
    }
}
