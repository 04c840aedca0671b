use crate::view_model::{self, AppViewModel, KeywordInputView, KeywordTagView};
use crate::{KeywordList, SearchResults};

pub type RequestId = u64;

/// The only text a user ever sees for a failed search.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch jobs";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestPhase {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    keywords: KeywordList,
    draft: String,
    in_flight: Option<RequestId>,
    next_request_id: RequestId,
    results: Option<SearchResults>,
    error: Option<String>,
    selected_category: Option<String>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            keywords: KeywordList::new(),
            draft: String::new(),
            in_flight: None,
            next_request_id: 1,
            results: None,
            error: None,
            selected_category: None,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loading wins over everything else; otherwise the last outcome decides.
    pub fn phase(&self) -> RequestPhase {
        if self.in_flight.is_some() {
            RequestPhase::Loading
        } else if self.error.is_some() {
            RequestPhase::Error
        } else if self.results.is_some() {
            RequestPhase::Success
        } else {
            RequestPhase::Idle
        }
    }

    pub fn keywords(&self) -> &[String] {
        self.keywords.as_slice()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    pub fn results(&self) -> Option<&SearchResults> {
        self.results.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn view(&self) -> AppViewModel {
        let loading = self.in_flight.is_some();
        let keyword_input = KeywordInputView {
            draft: self.draft.clone(),
            tags: self
                .keywords
                .as_slice()
                .iter()
                .map(|keyword| KeywordTagView {
                    label: keyword.clone(),
                })
                .collect(),
            add_enabled: !self.draft.trim().is_empty(),
        };

        AppViewModel {
            phase: self.phase(),
            keyword_input,
            search_enabled: !loading,
            cancel_enabled: loading,
            error: self.error.clone(),
            companies: self.results.as_ref().map(|results| {
                view_model::build_companies_view(
                    &results.companies_by_keyword,
                    self.selected_category.as_deref(),
                )
            }),
            jobs: self
                .results
                .as_ref()
                .map(|results| view_model::build_job_cards(&results.jobs))
                .unwrap_or_default(),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_draft(&mut self, draft: String) {
        if self.draft != draft {
            self.draft = draft;
            self.mark_dirty();
        }
    }

    pub(crate) fn commit_draft(&mut self) -> bool {
        if !self.keywords.add(&self.draft) {
            return false;
        }
        self.draft.clear();
        self.mark_dirty();
        true
    }

    pub(crate) fn remove_keyword(&mut self, keyword: &str) -> usize {
        let removed = self.keywords.remove(keyword);
        if removed > 0 {
            self.mark_dirty();
        }
        removed
    }

    /// Reserves a request id and enters `Loading`. `None` while a request is
    /// already outstanding.
    pub(crate) fn begin_request(&mut self) -> Option<(RequestId, Vec<String>)> {
        if self.in_flight.is_some() {
            return None;
        }
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.in_flight = Some(request_id);
        self.mark_dirty();
        Some((request_id, self.keywords.to_vec()))
    }

    /// Clears the outstanding request if `request_id` is the one in flight.
    pub(crate) fn settle_request(&mut self, request_id: RequestId) -> bool {
        if self.in_flight != Some(request_id) {
            return false;
        }
        self.in_flight = None;
        self.mark_dirty();
        true
    }

    pub(crate) fn cancel_request(&mut self) -> Option<RequestId> {
        let request_id = self.in_flight.take()?;
        self.mark_dirty();
        Some(request_id)
    }

    pub(crate) fn apply_results(&mut self, results: SearchResults) {
        self.results = Some(results);
        self.error = None;
        self.selected_category = None;
        self.mark_dirty();
    }

    pub(crate) fn apply_failure(&mut self) {
        self.results = None;
        self.error = Some(FETCH_FAILED_MESSAGE.to_string());
        self.selected_category = None;
        self.mark_dirty();
    }

    pub(crate) fn select_category(&mut self, keyword: String) {
        if self.selected_category.as_deref() != Some(keyword.as_str()) {
            self.selected_category = Some(keyword);
            self.mark_dirty();
        }
    }
}
