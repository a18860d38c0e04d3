use log::debug;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};

use crate::config::settings::Settings;
use crate::core::html_parser::{self, CardSelectors};
use crate::error::scrape::ScrapeError;
use crate::http::logging_middleware::LoggingMiddleware;
use crate::http::random_headers::resolve_user_agent;
use crate::model::extraction_report::ExtractionReport;

pub struct Nptel {
    client: ClientWithMiddleware,
    selectors: CardSelectors,
    listing_url: String,
    origin: String,
}

impl Nptel {
    pub fn new(settings: &Settings) -> Result<Self, ScrapeError> {
        let user_agent = resolve_user_agent(settings.user_agent.as_deref());
        debug!("using user agent: {}", user_agent);

        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(timeout) = settings.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ScrapeError::Request(err.into()))?;
        let client = ClientBuilder::new(client)
            .with(LoggingMiddleware)
            .build();

        let selectors = CardSelectors::new(
            &settings.card_selector,
            &settings.title_selector,
            &settings.link_selector,
        )?;

        Ok(Nptel {
            client,
            selectors,
            listing_url: settings.listing_url.clone(),
            origin: settings.origin.clone(),
        })
    }

    pub fn listing_url(&self) -> &str {
        &self.listing_url
    }

    /// One GET, no retry. Any non-2xx status is an error.
    pub async fn fetch_listing_page(&self) -> Result<String, ScrapeError> {
        let response = self.client.get(&self.listing_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: self.listing_url.clone(),
                status,
            });
        }

        let html = response.text().await?;
        debug!("fetched {} bytes from {}", html.len(), self.listing_url);
        Ok(html)
    }

    pub fn extract(&self, html: &str) -> ExtractionReport {
        html_parser::extract_courses(html, &self.selectors, &self.origin)
    }

    pub async fn get_courses(&self) -> Result<ExtractionReport, ScrapeError> {
        let html = self.fetch_listing_page().await?;
        Ok(self.extract(&html))
    }
}
