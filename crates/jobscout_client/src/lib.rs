//! JobScout client: talks to the scraping service and runs requests off the UI thread.
mod engine;
mod fetch;
mod types;

pub use engine::{ClientEvents, ClientHandle, SubmitError};
pub use fetch::{endpoint_url, ClientSettings, JobSearcher, ReqwestSearcher, SCRAPE_JOBS_PATH};
pub use types::{
    ClientEvent, CompanyGroups, FailureKind, FetchError, Job, RequestId, ScrapeRequest,
    ScrapeResponse,
};
