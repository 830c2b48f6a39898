use std::{fmt, path::PathBuf, str::FromStr, time::Duration};

use reqwest::{Client, Response};
use tracing::{info, warn};
use tryhard::{RetryFutureConfig, retry_fn};

use crate::error::FetchError;

/// Where the access log lives: an `http(s)://` URL, or a local file given as
/// a `file://` URL or plain path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Remote(String),
    Local(PathBuf),
}

impl FromStr for Location {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("location must not be empty".into());
        }
        let lower = s.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(Self::Remote(s.into()))
        } else if lower.starts_with("file://") {
            Ok(Self::Local(s["file://".len()..].into()))
        } else {
            Ok(Self::Local(s.into()))
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote(url) => f.write_str(url),
            Self::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FetchConfig {
    /// Attempts made after the first one fails.
    pub retries: u32,
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            retries: 0,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Reads the whole document at `location` into memory. Bytes that are not
/// valid UTF-8 are replaced rather than rejected.
pub async fn fetch(location: &Location, config: &FetchConfig) -> Result<String, FetchError> {
    let client = Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(FetchError::Client)?;
    let retry = RetryFutureConfig::new(config.retries)
        .exponential_backoff(Duration::from_millis(100))
        .max_delay(Duration::from_secs(5));
    let client = &client;
    retry_fn(|| async move {
        info!(%location, "downloading data");
        let result = fetch_once(client, location).await;
        if let Err(error) = &result {
            warn!(%error, "fetch attempt failed");
        }
        result
    })
    .with_config(retry)
    .await
}

async fn fetch_once(client: &Client, location: &Location) -> Result<String, FetchError> {
    let bytes = match location {
        Location::Remote(url) => {
            let http = |source: reqwest::Error| FetchError::Http {
                url: url.clone(),
                source,
            };
            let response = client
                .get(url)
                .send()
                .await
                .and_then(Response::error_for_status)
                .map_err(http)?;
            response.bytes().await.map_err(http)?.to_vec()
        }
        Location::Local(path) => tokio::fs::read(path).await.map_err(|source| FetchError::Io {
            path: path.clone(),
            source,
        })?,
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use asserting::prelude::*;
    use super::Location;

    fn fixture() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/weblog.csv")
    }

    #[test]
    fn location_from_str() {
        assert_that!("https://example.com/weblog.csv".parse::<Location>()).is_equal_to(Ok(
            Location::Remote("https://example.com/weblog.csv".into()),
        ));
        assert_that!("HTTP://example.com/a".parse::<Location>())
            .is_equal_to(Ok(Location::Remote("HTTP://example.com/a".into())));
        assert_that!("file:///tmp/weblog.csv".parse::<Location>())
            .is_equal_to(Ok(Location::Local("/tmp/weblog.csv".into())));
        assert_that!(" data/weblog.csv ".parse::<Location>())
            .is_equal_to(Ok(Location::Local("data/weblog.csv".into())));
        assert_that!("  ".parse::<Location>()).is_err();
    }

    #[tokio::test]
    async fn fetch_reads_local_file() {
        let text = fetch(&Location::Local(fixture()), &FetchConfig::default())
            .await
            .unwrap();
        assert_that!(text.lines().count()).is_equal_to(3);
    }

    #[tokio::test]
    async fn fetch_reports_missing_file() {
        let missing = Location::Local(fixture().with_file_name("missing.csv"));
        let err = fetch(&missing, &FetchConfig::default()).await.unwrap_err();
        assert!(matches!(err, FetchError::Io { .. }), "unexpected error: {err}");
    }
}
