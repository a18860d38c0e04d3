use std::path::PathBuf;

use log::{debug, info, warn};

use crate::config::settings::{Settings, SkipPolicy};
use crate::core::json_store;
use crate::core::nptel::Nptel;
use crate::error::scrape::ScrapeError;
use crate::model::extraction_report::ExtractionReport;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub records: usize,
    pub skipped: usize,
    pub output: PathBuf,
}

/// Decides whether an extraction result may be written out.
pub fn check_report(
    report: &ExtractionReport,
    settings: &Settings,
    url: &str,
) -> Result<(), ScrapeError> {
    for card in &report.skipped {
        debug!("skipped card #{}: {}", card.position, card.reason);
    }

    if !report.skipped.is_empty() {
        if settings.skip_policy == SkipPolicy::Strict {
            return Err(ScrapeError::SkippedCards {
                skipped: report.skipped.len(),
                seen: report.cards_seen(),
            });
        }
        info!(
            "skipped {} of {} cards with a missing title or link",
            report.skipped.len(),
            report.cards_seen()
        );
    }

    if report.is_empty() {
        if settings.fail_on_empty {
            return Err(ScrapeError::NoRecords {
                url: url.to_string(),
            });
        }
        warn!(
            "no course records found at {} ({} cards matched `{}`)",
            url,
            report.cards_seen(),
            settings.card_selector
        );
    }

    Ok(())
}

/// fetch → extract → check → write. Nothing is written when an earlier stage fails.
pub async fn run(settings: &Settings) -> Result<RunSummary, ScrapeError> {
    let nptel = Nptel::new(settings)?;
    let report = nptel.get_courses().await?;
    check_report(&report, settings, nptel.listing_url())?;

    json_store::write_records(&settings.output_path, &report.records).await?;
    info!(
        "saved {} courses to {}",
        report.records.len(),
        settings.output_path.display()
    );

    Ok(RunSummary {
        records: report.records.len(),
        skipped: report.skipped.len(),
        output: settings.output_path.clone(),
    })
}
