use serde_json::Value;

use crate::domain::JobPosting;
use crate::normalize::coerce;
use crate::normalize::{FeedShape, SourceNormalizer};

/// Normalizer for the direct-url feed (`job-data2.json`).
///
/// Field names already match the canonical schema; only the amounts, the
/// remote flag and the URL fallback need coercion.
pub struct DirectUrlNormalizer;

impl SourceNormalizer for DirectUrlNormalizer {
    fn normalize(&self, raw: &Value) -> Option<JobPosting> {
        let data = raw.as_object()?;
        let company = coerce::truthy_text(data.get("company"))?;

        let job_url = coerce::truthy_text(data.get("job_url"))
            .or_else(|| coerce::truthy_text(data.get("job_url_direct")));

        Some(JobPosting {
            title: coerce::text_field(data.get("title")),
            company,
            description: coerce::text_field(data.get("description")),
            location: coerce::text_field(data.get("location")),
            job_type: coerce::text_field(data.get("job_type")),
            date_posted: coerce::text_field(data.get("date_posted")),
            min_amount: coerce::coerce_float(data.get("min_amount")),
            max_amount: coerce::coerce_float(data.get("max_amount")),
            is_remote: coerce::normalize_remote_flag(data.get("is_remote")),
            job_url,
        })
    }

    fn shape(&self) -> FeedShape {
        FeedShape::DirectUrl
    }

    fn name(&self) -> &str {
        "Direct URL Normalizer"
    }
}
