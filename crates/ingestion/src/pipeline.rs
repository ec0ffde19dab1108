//! Fail-open batch ingestion.

use tracing::{info, warn};

use storage::WellStore;
use well_common::WellResult;

use crate::fetch::WellPageSource;
use crate::normalize::Normalizer;
use crate::page::WellPage;

/// Per-run outcome counts. There is no aggregate "pipeline failed" state:
/// the run always completes after the last identifier.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IngestReport {
    pub succeeded: usize,
    pub failed: usize,
}

impl IngestReport {
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }
}

/// Main ingestion pipeline: fetch → normalize → store, one identifier at a
/// time, strictly sequential.
///
/// Any per-identifier failure (fetch error, blank id) is logged and skipped;
/// subsequent identifiers always run. No retry, no dedup against rows
/// already stored: re-running with overlapping identifiers appends
/// duplicates, which read paths tolerate.
pub struct IngestionPipeline {
    source: Box<dyn WellPageSource>,
    store: WellStore,
    normalizer: Normalizer,
}

impl IngestionPipeline {
    pub fn new(source: Box<dyn WellPageSource>, store: WellStore, normalizer: Normalizer) -> Self {
        Self {
            source,
            store,
            normalizer,
        }
    }

    /// Process every identifier in order. Blank entries are skipped without
    /// counting toward the report.
    pub async fn run<I>(&self, apis: I) -> IngestReport
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut report = IngestReport::default();

        for api in apis {
            let api = api.as_ref().trim();
            if api.is_empty() {
                continue;
            }

            match self.ingest_one(api).await {
                Ok(()) => {
                    info!(api = %api, "Ingested well");
                    report.succeeded += 1;
                }
                Err(e) => {
                    warn!(api = %api, error = %e, "Failed to ingest well");
                    report.failed += 1;
                }
            }
        }

        info!(
            succeeded = report.succeeded,
            failed = report.failed,
            "Ingestion run complete"
        );
        report
    }

    async fn ingest_one(&self, api: &str) -> WellResult<()> {
        let html = self.source.fetch_page(api).await?;
        let page = WellPage::new(html);
        let record = self.normalizer.normalize(api, &page)?;
        self.store.insert(&record).await
    }
}
