use std::path::Path;

use log::debug;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::error::scrape::ScrapeError;
use crate::model::course_record::CourseRecord;

/// JSON array with two-space indentation, no trailing newline.
/// Non-ASCII text is written as raw UTF-8 rather than `\uXXXX` escapes.
pub fn to_pretty_json(records: &[CourseRecord]) -> Result<String, ScrapeError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Truncates and rewrites `path`. Not atomic: a crash mid-write leaves a partial file.
pub async fn write_records(path: &Path, records: &[CourseRecord]) -> Result<(), ScrapeError> {
    let json = to_pretty_json(records)?;
    let write_err = |source| ScrapeError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).await.map_err(write_err)?;
    file.write_all(json.as_bytes()).await.map_err(write_err)?;
    file.flush().await.map_err(write_err)?;

    debug!("wrote {} records ({} bytes) to {}", records.len(), json.len(), path.display());
    Ok(())
}

pub async fn read_records(path: &Path) -> Result<Vec<CourseRecord>, ScrapeError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ScrapeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(serde_json::from_str(&text)?)
}
