use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

pub type RequestId = u64;

const NOT_AVAILABLE: &str = "N/A";

/// A job posting exactly as the scraping service reports it.
///
/// Missing or `null` fields come back as `"N/A"`, the service's own sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Job {
    #[serde(default = "not_available", deserialize_with = "or_not_available")]
    pub title: String,
    #[serde(default = "not_available", deserialize_with = "or_not_available")]
    pub company: String,
    #[serde(default = "not_available", deserialize_with = "or_not_available")]
    pub location: String,
    #[serde(default = "not_available", deserialize_with = "or_not_available")]
    pub salary_range: String,
    #[serde(default = "not_available", deserialize_with = "or_not_available")]
    pub posted_date: String,
    #[serde(default, deserialize_with = "or_empty")]
    pub job_url: String,
    #[serde(default = "not_available", deserialize_with = "or_not_available")]
    pub logo_url: String,
    #[serde(default, deserialize_with = "or_empty")]
    pub keyword: String,
}

fn not_available() -> String {
    NOT_AVAILABLE.to_string()
}

fn or_not_available<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(not_available))
}

fn or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `POST /scrape_jobs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrapeRequest<'a> {
    pub keywords: &'a [String],
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScrapeResponse {
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub companies_by_keyword: Option<CompanyGroups>,
    /// Informational count some service versions include.
    #[serde(default)]
    pub total_jobs: Option<usize>,
}

/// `companies_by_keyword` with the JSON object's key order kept intact.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompanyGroups(pub Vec<(String, Vec<String>)>);

impl<'de> Deserialize<'de> for CompanyGroups {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct GroupsVisitor;

        impl<'de> Visitor<'de> for GroupsVisitor {
            type Value = CompanyGroups;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of keyword to company names")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut groups = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((keyword, companies)) =
                    access.next_entry::<String, Vec<String>>()?
                {
                    groups.push((keyword, companies));
                }
                Ok(CompanyGroups(groups))
            }
        }

        deserializer.deserialize_map(GroupsVisitor)
    }
}

/// Error payload the service sends alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    SearchCompleted {
        request_id: RequestId,
        result: Result<ScrapeResponse, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Decode,
    Cancelled,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Decode => write!(f, "malformed response body"),
            FailureKind::Cancelled => write!(f, "cancelled"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
