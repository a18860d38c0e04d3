use std::path::PathBuf;
use std::time::Duration;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment};
use serde::Deserialize;
use url::Url;

use crate::error::scrape::ScrapeError;

pub const DEFAULT_LISTING_URL: &str = "https://nptel.ac.in/courses";
pub const DEFAULT_ORIGIN: &str = "https://nptel.ac.in";
pub const DEFAULT_OUTPUT_PATH: &str = "nptel_courses.json";
pub const DEFAULT_CARD_SELECTOR: &str = "div.courseCard";
pub const DEFAULT_TITLE_SELECTOR: &str = "h5";
pub const DEFAULT_LINK_SELECTOR: &str = "a[href]";

/// Environment variables are read as `NPTEL_<KEY>`, e.g. `NPTEL_OUTPUT_PATH`.
pub const ENV_PREFIX: &str = "NPTEL";

/// What to do with cards that lack a title or a link.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkipPolicy {
    /// Drop the card and keep going.
    #[default]
    Lenient,
    /// Fail the run before anything is written.
    Strict,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Settings {
    pub listing_url: String,
    /// Prepended verbatim to every href.
    pub origin: String,
    pub output_path: PathBuf,
    pub card_selector: String,
    pub title_selector: String,
    pub link_selector: String,
    pub skip_policy: SkipPolicy,
    pub fail_on_empty: bool,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            listing_url: DEFAULT_LISTING_URL.to_string(),
            origin: DEFAULT_ORIGIN.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            card_selector: DEFAULT_CARD_SELECTOR.to_string(),
            title_selector: DEFAULT_TITLE_SELECTOR.to_string(),
            link_selector: DEFAULT_LINK_SELECTOR.to_string(),
            skip_policy: SkipPolicy::Lenient,
            fail_on_empty: false,
            timeout_secs: None,
            user_agent: None,
        }
    }
}

impl Settings {
    /// Builder preloaded with every default; callers add their own sources on top.
    pub fn builder() -> Result<ConfigBuilder<DefaultState>, ScrapeError> {
        let builder = Config::builder()
            .set_default("listing_url", DEFAULT_LISTING_URL)?
            .set_default("origin", DEFAULT_ORIGIN)?
            .set_default("output_path", DEFAULT_OUTPUT_PATH)?
            .set_default("card_selector", DEFAULT_CARD_SELECTOR)?
            .set_default("title_selector", DEFAULT_TITLE_SELECTOR)?
            .set_default("link_selector", DEFAULT_LINK_SELECTOR)?
            .set_default("skip_policy", "lenient")?
            .set_default("fail_on_empty", false)?;
        Ok(builder)
    }

    /// Defaults overridden by `NPTEL_*` environment variables.
    pub fn load() -> Result<Self, ScrapeError> {
        Self::from_environment(Environment::with_prefix(ENV_PREFIX))
    }

    /// Layers `env` over the defaults; numbers and booleans are parsed from their text.
    pub fn from_environment(env: Environment) -> Result<Self, ScrapeError> {
        let config = Self::builder()?
            .add_source(env.try_parsing(true))
            .build()?;
        Self::from_config(config)
    }

    pub fn from_config(config: Config) -> Result<Self, ScrapeError> {
        let settings: Settings = config.try_deserialize()?;
        settings.validate()
    }

    /// Checks both URLs and strips the origin's trailing slash so that
    /// `origin + "/course/1"` never yields `//`.
    pub fn validate(mut self) -> Result<Self, ScrapeError> {
        parse_url(&self.listing_url)?;
        parse_url(&self.origin)?;
        let trimmed = self.origin.trim_end_matches('/').len();
        self.origin.truncate(trimmed);
        Ok(self)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

fn parse_url(value: &str) -> Result<Url, ScrapeError> {
    Url::parse(value).map_err(|source| ScrapeError::InvalidUrl {
        value: value.to_string(),
        source,
    })
}
