//! Maps raw feed records onto the canonical [`JobPosting`].
//!
//! Each feed has a fixed [`FeedShape`]; the shape selects a
//! [`SourceNormalizer`]. Normalizers are pure: no I/O, no logging. A record
//! without a truthy `company` is rejected by returning `None`.

pub mod coerce;
pub mod normalizers;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::JobPosting;
use normalizers::{DirectUrlNormalizer, ProviderListNormalizer};

static PROVIDER_LIST: ProviderListNormalizer = ProviderListNormalizer;
static DIRECT_URL: DirectUrlNormalizer = DirectUrlNormalizer;

/// The two raw record layouts produced by the upstream scrapers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedShape {
    /// camelCase records with a `salaryRange` string and a `jobProviders` list
    ProviderList,
    /// snake_case records with split salary bounds, `is_remote` and direct URLs
    DirectUrl,
}

impl FeedShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedShape::ProviderList => "provider_list",
            FeedShape::DirectUrl => "direct_url",
        }
    }

    pub fn normalizer(&self) -> &'static dyn SourceNormalizer {
        match self {
            FeedShape::ProviderList => &PROVIDER_LIST,
            FeedShape::DirectUrl => &DIRECT_URL,
        }
    }
}

impl fmt::Display for FeedShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source-specific mapping from one raw record to a canonical posting
pub trait SourceNormalizer: Send + Sync {
    /// `None` means the record is rejected.
    fn normalize(&self, raw: &Value) -> Option<JobPosting>;

    fn shape(&self) -> FeedShape;

    fn name(&self) -> &str;
}

/// Normalizes `raw` with the normalizer registered for `shape`.
pub fn normalize(shape: FeedShape, raw: &Value) -> Option<JobPosting> {
    shape.normalizer().normalize(raw)
}

/// Title of a raw record, for diagnostics about rejected records.
pub fn record_title(raw: &Value) -> Option<String> {
    coerce::truthy_text(raw.get("title"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shape_dispatches_to_matching_normalizer() {
        for shape in [FeedShape::ProviderList, FeedShape::DirectUrl] {
            assert_eq!(shape.normalizer().shape(), shape);
        }
        assert_ne!(
            FeedShape::ProviderList.normalizer().name(),
            FeedShape::DirectUrl.normalizer().name()
        );
    }

    #[test]
    fn test_company_filter_applies_to_both_shapes() {
        let rejected = [
            json!({"title": "No company"}),
            json!({"title": "Empty", "company": ""}),
            json!({"title": "Null", "company": null}),
            json!({"title": "False", "company": false}),
            json!("just a string"),
            json!(null),
        ];

        for shape in [FeedShape::ProviderList, FeedShape::DirectUrl] {
            for raw in &rejected {
                assert!(normalize(shape, raw).is_none(), "{} accepted {}", shape, raw);
            }
        }
    }

    #[test]
    fn test_record_title() {
        assert_eq!(record_title(&json!({"title": "Dev"})), Some("Dev".to_string()));
        assert_eq!(record_title(&json!({"title": ""})), None);
        assert_eq!(record_title(&json!(42)), None);
    }
}
