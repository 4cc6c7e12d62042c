//! Pass driver and report output.
//!
//! One synchronous fold over the card stream feeds every aggregator
//! in turn; nothing here blocks, retries, or runs concurrently. Each
//! aggregator's finalized rows are then written to `<name>.json` in
//! the output directory.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{info, warn};

use crate::aggregate::Aggregator;
use crate::card::printing::CardPrinting;
use crate::error::{Error, Result};

/// Totals from one pass over the stream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassSummary {
    /// Cards fed to every aggregator.
    pub processed: u64,
    /// Malformed stream elements logged and skipped.
    pub skipped: u64,
}

/// Fold a card stream into a set of aggregators.
///
/// Malformed elements are skipped with a warning; I/O failures and
/// unrecoverable stream corruption abort the pass.
pub fn run_pass<I>(cards: I, aggregators: &mut [Box<dyn Aggregator>]) -> Result<PassSummary>
where
    I: IntoIterator<Item = Result<CardPrinting>>,
{
    let mut summary = PassSummary::default();

    for item in cards {
        match item {
            Ok(card) => {
                for aggregator in aggregators.iter_mut() {
                    aggregator.process(&card);
                }
                summary.processed += 1;
            }
            Err(Error::Json(err)) => {
                warn!(error = %err, "skipping malformed card");
                summary.skipped += 1;
            }
            Err(err) => return Err(err),
        }
    }

    info!(
        processed = summary.processed,
        skipped = summary.skipped,
        "pass complete"
    );
    Ok(summary)
}

/// Write every aggregator's rows to `<name>.json` under `dir`.
///
/// Accumulated warnings are logged, not written.
pub fn write_reports(dir: &Path, aggregators: &mut [Box<dyn Aggregator>]) -> Result<()> {
    fs::create_dir_all(dir)?;

    for aggregator in aggregators.iter_mut() {
        let rows = aggregator.finalize();
        for warning in aggregator.warnings() {
            warn!(report = aggregator.name(), "{warning}");
        }

        let path = dir.join(format!("{}.json", aggregator.name()));
        let file = BufWriter::new(File::create(&path)?);
        serde_json::to_writer(file, &rows)?;
        info!(report = aggregator.name(), rows = rows.len(), path = %path.display(), "report written");
    }

    Ok(())
}

/// A fresh timestamped directory under `base` for one run's output.
pub fn timestamped_output_dir(base: &Path) -> Result<PathBuf> {
    let dir = base.join(Local::now().format("%Y%m%d_%H%M%S").to_string());
    fs::create_dir_all(&dir)?;
    Ok(dir)
}
