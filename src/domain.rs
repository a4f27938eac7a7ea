use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Normalized remote-work flag. Always one of the two values, never absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoteFlag {
    Yes,
    No,
}

impl RemoteFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            RemoteFlag::Yes => "yes",
            RemoteFlag::No => "no",
        }
    }
}

impl From<bool> for RemoteFlag {
    fn from(value: bool) -> Self {
        if value {
            RemoteFlag::Yes
        } else {
            RemoteFlag::No
        }
    }
}

impl fmt::Display for RemoteFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RemoteFlag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(RemoteFlag::Yes),
            "no" => Ok(RemoteFlag::No),
            other => Err(format!("unknown remote flag '{}'", other)),
        }
    }
}

/// A canonical job posting produced by the normalizer, before the store
/// assigns it an identifier.
///
/// `company` is never empty. `min_amount <= max_amount` is not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: Option<String>,
    pub company: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub date_posted: Option<String>,
    pub min_amount: f64,
    pub max_amount: f64,
    pub is_remote: RemoteFlag,
    pub job_url: Option<String>,
}

/// A persisted posting, fields in canonical column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: i64,
    #[serde(flatten)]
    pub posting: JobPosting,
}

/// Row shape of the "list all records" read used by the display surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSummary {
    pub id: i64,
    pub title: Option<String>,
}
