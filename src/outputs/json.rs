//! JSON output for harvested records.
//!
//! Records are written as a single pretty-printed array, in the order the
//! pipeline produced them. Each run replaces the file.

use crate::models::Harvest;
use crate::utils::ensure_parent_dir;
use std::error::Error;
use tokio::fs;
use tracing::{error, info, instrument};

/// Write the records of a [`Harvest`] to `path`.
///
/// Creates the parent directory if needed.
///
/// # Returns
///
/// `Ok(())` on success, or an error if directory creation, serialization or
/// the file write fails.
#[instrument(level = "info", skip_all, fields(%path, records = harvest.records.len()))]
pub async fn write_records(harvest: &Harvest, path: &str) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(&harvest.records)?;

    if let Err(e) = ensure_parent_dir(path).await {
        error!(%path, error = %e, "Failed to create output directory");
        return Err(e);
    }

    fs::write(path, json).await?;
    info!(%path, "Wrote JSON records");

    Ok(())
}
