use scout_logging::{scout_debug, scout_info};

use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::DraftChanged(text) => {
            state.set_draft(text);
            Vec::new()
        }
        Msg::AddKeywordClicked => {
            // Whitespace-only drafts are left in the box untouched.
            state.commit_draft();
            Vec::new()
        }
        Msg::RemoveKeyword(keyword) => {
            let removed = state.remove_keyword(&keyword);
            scout_debug!("RemoveKeyword keyword={:?} removed={}", keyword, removed);
            Vec::new()
        }
        Msg::SearchClicked => match state.begin_request() {
            Some((request_id, keywords)) => {
                scout_info!(
                    "SearchClicked request_id={} keywords={}",
                    request_id,
                    keywords.len()
                );
                vec![Effect::SubmitSearch {
                    request_id,
                    keywords,
                }]
            }
            None => {
                scout_debug!(
                    "SearchClicked rejected; request {:?} still in flight",
                    state.in_flight()
                );
                Vec::new()
            }
        },
        Msg::CancelClicked => match state.cancel_request() {
            Some(request_id) => vec![Effect::CancelSearch { request_id }],
            None => Vec::new(),
        },
        Msg::SearchSucceeded {
            request_id,
            results,
        } => {
            if state.settle_request(request_id) {
                state.apply_results(results);
            } else {
                scout_debug!("Ignoring stale results for request {}", request_id);
            }
            Vec::new()
        }
        Msg::SearchFailed { request_id } => {
            if state.settle_request(request_id) {
                state.apply_failure();
            } else {
                scout_debug!("Ignoring stale failure for request {}", request_id);
            }
            Vec::new()
        }
        Msg::CategorySelected(keyword) => {
            if state.results().is_some() {
                state.select_category(keyword);
            }
            Vec::new()
        }
    };

    (state, effects)
}
