//! Ingestion metrics
//!
//! Recorded through the `metrics` facade. Without an installed recorder every
//! call is a no-op, so the pipeline records unconditionally.

use metrics::{counter, describe_counter, describe_histogram, histogram, Unit};

use crate::constants::{
    METRIC_FEED_DURATION, METRIC_FEED_FAILURES, METRIC_REBUILDS, METRIC_RECORDS_INSERTED,
    METRIC_RECORDS_REJECTED,
};
use crate::normalize::FeedShape;

pub struct IngestMetrics;

impl IngestMetrics {
    /// Register descriptions so exporters list every metric before first use
    pub fn describe() {
        describe_counter!(METRIC_RECORDS_INSERTED, "Canonical job rows written to the store");
        describe_counter!(METRIC_RECORDS_REJECTED, "Raw records dropped by the normalizer");
        describe_counter!(METRIC_FEED_FAILURES, "Feeds abandoned because of a read, parse or write error");
        describe_counter!(METRIC_REBUILDS, "Jobs table drop-and-recreate operations");
        describe_histogram!(METRIC_FEED_DURATION, Unit::Seconds, "Wall time to ingest one feed");
    }

    pub fn record_rebuild() {
        counter!(METRIC_REBUILDS).increment(1);
    }

    pub fn record_feed_success(shape: FeedShape, inserted: usize, rejected: usize, duration_secs: f64) {
        counter!(METRIC_RECORDS_INSERTED, "shape" => shape.as_str()).increment(inserted as u64);
        counter!(METRIC_RECORDS_REJECTED, "shape" => shape.as_str()).increment(rejected as u64);
        histogram!(METRIC_FEED_DURATION, "shape" => shape.as_str()).record(duration_secs);
    }

    pub fn record_feed_failure(shape: FeedShape, kind: &'static str) {
        counter!(METRIC_FEED_FAILURES, "shape" => shape.as_str(), "kind" => kind).increment(1);
    }
}
