use std::collections::HashSet;

use url::Url;

use crate::{CompaniesByKeyword, Job, RequestPhase};

/// Shown in the companies panel until a keyword is picked.
pub const COMPANIES_PLACEHOLDER: &str = "Select a keyword to see companies";

/// Link relation that keeps the opened page from reaching back to us.
pub const NO_OPENER_REL: &str = "noopener noreferrer";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub phase: RequestPhase,
    pub keyword_input: KeywordInputView,
    pub search_enabled: bool,
    pub cancel_enabled: bool,
    pub error: Option<String>,
    pub companies: Option<CompaniesView>,
    pub jobs: Vec<JobCardView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeywordInputView {
    pub draft: String,
    pub tags: Vec<KeywordTagView>,
    pub add_enabled: bool,
}

/// A removable keyword tag; removing it sends `Msg::RemoveKeyword(label)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTagView {
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompaniesView {
    pub categories: Vec<String>,
    pub selected: Option<String>,
    pub body: CompaniesBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompaniesBody {
    Placeholder(&'static str),
    Companies(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCardView {
    /// Render identity, unique within one grid.
    pub key: String,
    pub title: String,
    pub company: String,
    pub location_badge: Option<String>,
    pub salary_badge: Option<String>,
    pub posted: String,
    pub link: Option<JobLink>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    /// Open in a fresh browsing context (new tab/window).
    NewContext,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobLink {
    pub href: String,
    pub target: LinkTarget,
    pub rel: &'static str,
}

pub(crate) fn build_companies_view(
    companies: &CompaniesByKeyword,
    selected: Option<&str>,
) -> CompaniesView {
    let body = match selected {
        None => CompaniesBody::Placeholder(COMPANIES_PLACEHOLDER),
        Some(keyword) => CompaniesBody::Companies(
            companies
                .companies(keyword)
                .map(<[String]>::to_vec)
                .unwrap_or_default(),
        ),
    };

    CompaniesView {
        categories: companies.keywords().map(ToOwned::to_owned).collect(),
        selected: selected.map(ToOwned::to_owned),
        body,
    }
}

pub(crate) fn build_job_cards(jobs: &[Job]) -> Vec<JobCardView> {
    let mut used: HashSet<String> = HashSet::new();
    jobs.iter()
        .map(|job| {
            let base = if job.job_url.trim().is_empty() {
                format!("{}-{}", job.company, job.title)
            } else {
                job.job_url.clone()
            };
            let mut key = base.clone();
            let mut repeat = 1;
            while !used.insert(key.clone()) {
                repeat += 1;
                key = format!("{base}#{repeat}");
            }

            JobCardView {
                key,
                title: job.title.clone(),
                company: job.company.clone(),
                location_badge: job.location().map(ToOwned::to_owned),
                salary_badge: job.salary_range().map(ToOwned::to_owned),
                posted: format!("Posted {}", job.posted_date),
                link: job_link(&job.job_url),
            }
        })
        .collect()
}

fn job_link(raw: &str) -> Option<JobLink> {
    let parsed = Url::parse(raw.trim()).ok()?;
    match parsed.scheme() {
        "http" | "https" => Some(JobLink {
            href: raw.trim().to_string(),
            target: LinkTarget::NewContext,
            rel: NO_OPENER_REL,
        }),
        _ => None,
    }
}
