#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the keyword input box.
    DraftChanged(String),
    /// User clicked Add or pressed Enter in the keyword input.
    AddKeywordClicked,
    /// User removed a keyword tag.
    RemoveKeyword(String),
    /// User clicked Search.
    SearchClicked,
    /// User asked to abandon the in-flight search.
    CancelClicked,
    /// Client delivered results for a request.
    SearchSucceeded {
        request_id: crate::RequestId,
        results: crate::SearchResults,
    },
    /// Client reported that a request failed.
    SearchFailed { request_id: crate::RequestId },
    /// User picked a keyword in the companies panel.
    CategorySelected(String),
}
