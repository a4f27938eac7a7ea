//! Defaults shared by the CLI, config loading and the store.

pub const DEFAULT_DATABASE_PATH: &str = "jobs.db";
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
pub const DEFAULT_LOG_DIR: &str = "logs";
pub const LOG_FILE_PREFIX: &str = "ingest.log";

// Feed files as produced by the two upstream scrapers
pub const DEFAULT_PROVIDER_LIST_FEED: &str = "job-data.json";
pub const DEFAULT_DIRECT_URL_FEED: &str = "job-data2.json";

pub const JOBS_TABLE: &str = "jobs";

/// Placeholder used in diagnostics when a rejected record has no title
pub const UNTITLED: &str = "<untitled>";

// Metric names
pub const METRIC_RECORDS_INSERTED: &str = "job_ingest_records_inserted_total";
pub const METRIC_RECORDS_REJECTED: &str = "job_ingest_records_rejected_total";
pub const METRIC_FEED_FAILURES: &str = "job_ingest_feed_failures_total";
pub const METRIC_REBUILDS: &str = "job_ingest_rebuilds_total";
pub const METRIC_FEED_DURATION: &str = "job_ingest_feed_duration_seconds";
