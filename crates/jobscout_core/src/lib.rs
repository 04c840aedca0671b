//! JobScout core: pure state machine and view-model helpers.
mod effect;
mod job;
mod keywords;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use job::{CompaniesByKeyword, Job, SearchResults, NOT_AVAILABLE};
pub use keywords::KeywordList;
pub use msg::Msg;
pub use state::{AppState, RequestId, RequestPhase, FETCH_FAILED_MESSAGE};
pub use update::update;
pub use view_model::{
    AppViewModel, CompaniesBody, CompaniesView, JobCardView, JobLink, KeywordInputView,
    KeywordTagView, LinkTarget, COMPANIES_PLACEHOLDER, NO_OPENER_REL,
};
