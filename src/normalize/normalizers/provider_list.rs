use serde_json::Value;

use crate::domain::{JobPosting, RemoteFlag};
use crate::normalize::coerce;
use crate::normalize::{FeedShape, SourceNormalizer};

/// Normalizer for the provider-list feed (`job-data.json`).
///
/// Salary arrives as one `salaryRange` string and the apply link is the first
/// usable `url` in `jobProviders`. The feed carries no remote flag, so every
/// posting is marked not remote.
pub struct ProviderListNormalizer;

impl SourceNormalizer for ProviderListNormalizer {
    fn normalize(&self, raw: &Value) -> Option<JobPosting> {
        let data = raw.as_object()?;
        let company = coerce::truthy_text(data.get("company"))?;
        let (min_amount, max_amount) = coerce::parse_salary_range(data.get("salaryRange"));

        Some(JobPosting {
            title: coerce::text_field(data.get("title")),
            company,
            description: coerce::text_field(data.get("description")),
            location: coerce::text_field(data.get("location")),
            job_type: coerce::text_field(data.get("employmentType")),
            date_posted: coerce::text_field(data.get("datePosted")),
            min_amount,
            max_amount,
            is_remote: RemoteFlag::No,
            job_url: coerce::pick_provider_url(data.get("jobProviders")),
        })
    }

    fn shape(&self) -> FeedShape {
        FeedShape::ProviderList
    }

    fn name(&self) -> &str {
        "Provider List Normalizer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_maps_camel_case_fields() {
        let raw = json!({
            "title": "Software Engineer",
            "company": "Acme",
            "description": "Build things",
            "location": "Boston, MA",
            "employmentType": "Full-time",
            "datePosted": "3 days ago",
            "salaryRange": "50,000-70,000",
            "jobProviders": [
                {"jobProvider": "LinkedIn"},
                {"jobProvider": "Indeed", "url": "https://indeed.example/1"}
            ]
        });

        let job = ProviderListNormalizer.normalize(&raw).unwrap();
        assert_eq!(job.title.as_deref(), Some("Software Engineer"));
        assert_eq!(job.company, "Acme");
        assert_eq!(job.description.as_deref(), Some("Build things"));
        assert_eq!(job.location.as_deref(), Some("Boston, MA"));
        assert_eq!(job.job_type.as_deref(), Some("Full-time"));
        assert_eq!(job.date_posted.as_deref(), Some("3 days ago"));
        assert_eq!((job.min_amount, job.max_amount), (50000.0, 70000.0));
        assert_eq!(job.is_remote, RemoteFlag::No);
        assert_eq!(job.job_url.as_deref(), Some("https://indeed.example/1"));
    }

    #[test]
    fn test_sparse_record_uses_defaults() {
        let job = ProviderListNormalizer.normalize(&json!({"company": "Acme"})).unwrap();
        assert_eq!(job.title, None);
        assert_eq!(job.job_type, None);
        assert_eq!((job.min_amount, job.max_amount), (0.0, 0.0));
        assert_eq!(job.job_url, None);
        assert_eq!(job.is_remote, RemoteFlag::No);
    }

    #[test]
    fn test_ignores_snake_case_remote_field() {
        let raw = json!({"company": "Acme", "is_remote": true, "job_url": "http://ignored"});
        let job = ProviderListNormalizer.normalize(&raw).unwrap();
        assert_eq!(job.is_remote, RemoteFlag::No);
        assert_eq!(job.job_url, None);
    }

    #[test]
    fn test_rejects_missing_company() {
        let raw = json!({"title": "Orphan", "company": "", "salaryRange": "1-2"});
        assert!(ProviderListNormalizer.normalize(&raw).is_none());
    }
}
