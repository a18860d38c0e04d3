use std::error::Error as StdError;
use std::fmt;
use std::path::PathBuf;

use reqwest::StatusCode;

#[derive(Debug)]
pub enum ScrapeError {
    /// Transport failure: DNS, connect, timeout, or a middleware error.
    Request(reqwest_middleware::Error),
    Status { url: String, status: StatusCode },
    Body(reqwest::Error),
    InvalidSelector { selector: String, message: String },
    InvalidUrl { value: String, source: url::ParseError },
    Config(config::ConfigError),
    /// The page parsed but no card produced a record; the markup has probably changed.
    NoRecords { url: String },
    SkippedCards { skipped: usize, seen: usize },
    Serialize(serde_json::Error),
    Write { path: PathBuf, source: std::io::Error },
    Read { path: PathBuf, source: std::io::Error },
}

impl ScrapeError {
    /// 网络层错误（请求失败或状态码异常）
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            ScrapeError::Request(_) | ScrapeError::Status { .. } | ScrapeError::Body(_)
        )
    }
}

impl fmt::Display for ScrapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScrapeError::Request(err) => write!(f, "request failed: {}", err),
            ScrapeError::Status { url, status } => {
                write!(f, "{} answered with HTTP {}", url, status)
            }
            ScrapeError::Body(err) => write!(f, "failed to read response body: {}", err),
            ScrapeError::InvalidSelector { selector, message } => {
                write!(f, "invalid selector `{}`: {}", selector, message)
            }
            ScrapeError::InvalidUrl { value, source } => {
                write!(f, "invalid url `{}`: {}", value, source)
            }
            ScrapeError::Config(err) => write!(f, "configuration error: {}", err),
            ScrapeError::NoRecords { url } => write!(
                f,
                "no course records found at {} (the page markup may have changed)",
                url
            ),
            ScrapeError::SkippedCards { skipped, seen } => write!(
                f,
                "{} of {} course cards were incomplete and skipped",
                skipped, seen
            ),
            ScrapeError::Serialize(err) => write!(f, "failed to serialize records: {}", err),
            ScrapeError::Write { path, source } => {
                write!(f, "failed to write {}: {}", path.display(), source)
            }
            ScrapeError::Read { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
        }
    }
}

impl StdError for ScrapeError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ScrapeError::Request(err) => Some(err),
            ScrapeError::Body(err) => Some(err),
            ScrapeError::InvalidUrl { source, .. } => Some(source),
            ScrapeError::Config(err) => Some(err),
            ScrapeError::Serialize(err) => Some(err),
            ScrapeError::Write { source, .. } | ScrapeError::Read { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<reqwest_middleware::Error> for ScrapeError {
    fn from(err: reqwest_middleware::Error) -> Self {
        ScrapeError::Request(err)
    }
}

impl From<reqwest::Error> for ScrapeError {
    fn from(err: reqwest::Error) -> Self {
        ScrapeError::Body(err)
    }
}

impl From<serde_json::Error> for ScrapeError {
    fn from(err: serde_json::Error) -> Self {
        ScrapeError::Serialize(err)
    }
}

impl From<config::ConfigError> for ScrapeError {
    fn from(err: config::ConfigError) -> Self {
        ScrapeError::Config(err)
    }
}
