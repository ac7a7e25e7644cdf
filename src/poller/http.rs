//! Rankings fetched from the HTTP endpoint.

use std::time::Duration;

use crate::Result;
use crate::models::RankingsSnapshot;

use super::RankingSource;

/// Upper bound on a single request, so stalled connections do not pile up.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Issues `GET <url>` and decodes the body as a [`RankingsSnapshot`].
///
/// The request carries no body, query, or extra headers. The response is
/// used verbatim: ordering and contents are not validated.
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    /// Creates a source for the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`StockPulseError::Http`](crate::StockPulseError::Http) if the
    /// HTTP client cannot be built.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// The endpoint being polled.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl RankingSource for HttpSource {
    /// # Errors
    ///
    /// Returns [`StockPulseError::Http`](crate::StockPulseError::Http) on
    /// connection failure or a non-success status, and
    /// [`StockPulseError::Json`](crate::StockPulseError::Json) when the body
    /// does not match the rankings schema.
    async fn fetch(&self) -> Result<RankingsSnapshot> {
        let response = self.client.get(&self.url).send().await?;
        let response = response.error_for_status()?;
        let body = response.bytes().await?;
        let snapshot = serde_json::from_slice(&body)?;
        Ok(snapshot)
    }
}
