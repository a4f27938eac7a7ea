use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};
use tracing::{error, info, info_span, warn};
use uuid::Uuid;

use crate::constants::UNTITLED;
use crate::error::{IngestError, Result};
use crate::metrics::IngestMetrics;
use crate::normalize::{self, FeedShape};
use crate::storage::JobStore;

/// One feed file and the raw shape its records are in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSource {
    pub path: PathBuf,
    pub shape: FeedShape,
}

impl FeedSource {
    pub fn new(path: impl AsRef<Path>, shape: FeedShape) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            shape,
        }
    }
}

/// Outcome of ingesting a single feed.
#[derive(Debug, Clone, Serialize)]
pub struct FeedReport {
    pub path: PathBuf,
    pub shape: FeedShape,
    pub total_records: usize,
    pub inserted: usize,
    pub rejected: usize,
    /// Ids assigned to this feed's rows, in insertion order
    pub ids: Vec<i64>,
    /// SHA-256 of the raw feed bytes
    pub content_sha256: String,
}

/// Results of one full run over all feeds.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineResult {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub feeds: Vec<FeedReport>,
    /// Feed-level failures; the run carried on past each of them
    pub errors: Vec<String>,
}

impl PipelineResult {
    pub fn total_inserted(&self) -> usize {
        self.feeds.iter().map(|feed| feed.inserted).sum()
    }

    pub fn total_rejected(&self) -> usize {
        self.feeds.iter().map(|feed| feed.rejected).sum()
    }
}

/// Parses a whole feed document. A top-level value that is not an array is
/// treated as a one-element array.
pub fn parse_feed(text: &str) -> std::result::Result<Vec<Value>, serde_json::Error> {
    match serde_json::from_str::<Value>(text.trim())? {
        Value::Array(records) => Ok(records),
        single => Ok(vec![single]),
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Reads, parses and normalizes one feed, then appends the accepted records
/// to the store in a single transaction.
///
/// Nothing is written unless the whole document parses. Rejected records are
/// logged and counted, never fatal.
pub fn ingest_feed(store: &JobStore, feed: &FeedSource) -> Result<FeedReport> {
    let span = info_span!(
        "feed",
        shape = %feed.shape,
        normalizer = feed.shape.normalizer().name(),
        path = %feed.path.display()
    );
    let _enter = span.enter();
    let start = Instant::now();

    let text = std::fs::read_to_string(&feed.path).map_err(|source| IngestError::FeedRead {
        path: feed.path.clone(),
        source,
    })?;
    let content_sha256 = sha256_hex(text.as_bytes());

    let records = parse_feed(&text).map_err(|source| IngestError::FeedParse {
        path: feed.path.clone(),
        source,
    })?;

    let mut accepted = Vec::with_capacity(records.len());
    let mut rejected = 0;
    for (index, raw) in records.iter().enumerate() {
        match normalize::normalize(feed.shape, raw) {
            Some(job) => accepted.push(job),
            None => {
                rejected += 1;
                let title = normalize::record_title(raw);
                warn!(
                    index,
                    title = title.as_deref().unwrap_or(UNTITLED),
                    "Skipping record without company"
                );
            }
        }
    }

    let ids = store.insert_all(&accepted)?;

    let report = FeedReport {
        path: feed.path.clone(),
        shape: feed.shape,
        total_records: records.len(),
        inserted: ids.len(),
        rejected,
        ids,
        content_sha256,
    };

    IngestMetrics::record_feed_success(
        feed.shape,
        report.inserted,
        report.rejected,
        start.elapsed().as_secs_f64(),
    );
    info!(
        total = report.total_records,
        inserted = report.inserted,
        rejected = report.rejected,
        sha256 = %report.content_sha256,
        "Feed ingested"
    );

    Ok(report)
}

/// Rebuilds the jobs table, then ingests each feed in the given order.
pub struct Pipeline;

impl Pipeline {
    /// A failed rebuild aborts the run. A failed feed is recorded in
    /// [`PipelineResult::errors`] and the remaining feeds still run.
    pub fn run(store: &JobStore, feeds: &[FeedSource]) -> Result<PipelineResult> {
        let run_id = Uuid::new_v4();
        let span = info_span!("ingest_run", %run_id);
        let _enter = span.enter();
        let started_at = Utc::now();

        info!(feeds = feeds.len(), "Starting ingestion run");

        store.rebuild()?;
        IngestMetrics::record_rebuild();

        let mut reports = Vec::with_capacity(feeds.len());
        let mut errors = Vec::new();

        for feed in feeds {
            match ingest_feed(store, feed) {
                Ok(report) => reports.push(report),
                Err(e) => {
                    error!(shape = %feed.shape, path = %feed.path.display(), "Feed ingestion failed: {}", e);
                    IngestMetrics::record_feed_failure(feed.shape, e.kind());
                    errors.push(e.to_string());
                }
            }
        }

        let result = PipelineResult {
            run_id,
            started_at,
            finished_at: Utc::now(),
            feeds: reports,
            errors,
        };

        info!(
            inserted = result.total_inserted(),
            rejected = result.total_rejected(),
            failed_feeds = result.errors.len(),
            "Ingestion run finished"
        );

        Ok(result)
    }
}
