/// Placeholder the scraping service uses for values it could not find.
pub const NOT_AVAILABLE: &str = "N/A";

/// One scraped job posting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary_range: String,
    pub posted_date: String,
    pub job_url: String,
    pub logo_url: String,
    pub keyword: String,
}

impl Job {
    /// Location, unless the service reported it as missing.
    pub fn location(&self) -> Option<&str> {
        available(&self.location)
    }

    /// Salary range, unless the service reported it as missing.
    pub fn salary_range(&self) -> Option<&str> {
        available(&self.salary_range)
    }
}

fn available(value: &str) -> Option<&str> {
    if value == NOT_AVAILABLE {
        None
    } else {
        Some(value)
    }
}

/// Company names grouped under the keyword that surfaced them.
///
/// Entries keep the order in which the service listed them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompaniesByKeyword {
    entries: Vec<(String, Vec<String>)>,
}

impl CompaniesByKeyword {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(keyword, _)| keyword.as_str())
    }

    /// Companies for `keyword`; `None` when the keyword has no entry.
    pub fn companies(&self, keyword: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(key, _)| key == keyword)
            .map(|(_, companies)| companies.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Vec<String>)> for CompaniesByKeyword {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Everything one successful search returns.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchResults {
    pub jobs: Vec<Job>,
    pub companies_by_keyword: CompaniesByKeyword,
}
