//! Static chart generation for the reimbursement case dataset.
//!
//! Renders the exploratory views used to probe the legacy reimbursement
//! system's behavior: how the payout moves with each input dimension,
//! what 5-day and 8-day trips look like in isolation, and which records
//! carry the suspicious `.49`/`.99` receipt suffixes.
//!
//! ## Pipeline
//!
//! ```text
//! case JSON -> Vec<CaseRecord> -> Dataset -> four PNG artifacts
//! ```
//!
//! The charts are rendered strictly in order; each figure is created,
//! drawn, saved, and released before the next begins. Output files are
//! overwritten unconditionally.

mod colorbar;
pub mod duration;
mod error;
mod font;
pub mod overview;
mod style;
pub mod suffix;

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

pub use error::PlotError;
use reimviz_schemas::{CaseRecord, Dataset};
use tracing::info;

/// Runs the whole render pipeline.
///
/// Reads a JSON array of case records from `input`, projects the four
/// input/output series, and writes the four chart artifacts into
/// `out_dir` (created if absent). Returns the written paths in render
/// order.
///
/// Nothing is written until the case list has deserialized, so a bad
/// input file leaves the output directory untouched.
pub fn render_charts(
    mut input: impl Read,
    out_dir: &Path,
) -> Result<Vec<PathBuf>, PlotError> {
    let mut json = String::new();
    input.read_to_string(&mut json)?;
    let cases: Vec<CaseRecord> =
        serde_json::from_str(&json).map_err(PlotError::deserialize)?;

    let dataset = Dataset::from_cases(&cases);
    info!(cases = dataset.len(), "cases.loaded");

    fs::create_dir_all(out_dir)?;

    let mut written = Vec::new();

    let path = out_dir.join(overview::OVERVIEW_FILE);
    overview::render(&dataset, &path)?;
    info!(path = %path.display(), "chart.written");
    written.push(path);

    for days in duration::DURATION_VIEWS {
        let path = out_dir.join(duration::file_name(days));
        duration::render(&dataset, days, &path)?;
        info!(path = %path.display(), "chart.written");
        written.push(path);
    }

    let path = out_dir.join(suffix::SUFFIX_FILE);
    suffix::render(&dataset, &path)?;
    info!(path = %path.display(), "chart.written");
    written.push(path);

    Ok(written)
}
