pub mod config;
pub mod constants;
pub mod domain;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod normalize;
pub mod pipeline;
pub mod storage;

pub use domain::{JobPosting, JobRecord, JobSummary, RemoteFlag};
pub use error::{IngestError, Result};
pub use normalize::{normalize, FeedShape};
pub use pipeline::{FeedSource, Pipeline, PipelineResult};
pub use storage::JobStore;
