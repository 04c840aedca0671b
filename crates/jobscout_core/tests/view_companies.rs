use jobscout_core::{
    update, AppState, CompaniesBody, CompaniesByKeyword, Effect, Msg, SearchResults,
    COMPANIES_PLACEHOLDER,
};
use pretty_assertions::assert_eq;

fn companies(entries: Vec<(&str, Vec<&str>)>) -> CompaniesByKeyword {
    entries
        .into_iter()
        .map(|(keyword, names)| {
            (
                keyword.to_string(),
                names.into_iter().map(str::to_string).collect(),
            )
        })
        .collect()
}

fn show(map: CompaniesByKeyword) -> AppState {
    let (state, effects) = update(AppState::new(), Msg::SearchClicked);
    let request_id = match effects.as_slice() {
        [Effect::SubmitSearch { request_id, .. }] => *request_id,
        other => panic!("unexpected effects {other:?}"),
    };
    let (state, _) = update(
        state,
        Msg::SearchSucceeded {
            request_id,
            results: SearchResults {
                jobs: Vec::new(),
                companies_by_keyword: map,
            },
        },
    );
    state
}

#[test]
fn panel_is_absent_before_any_results() {
    assert!(AppState::new().view().companies.is_none());
}

#[test]
fn categories_keep_server_order_and_start_with_placeholder() {
    let state = show(companies(vec![
        ("remote", vec!["Globex"]),
        ("backend", vec!["Acme", "Initech"]),
    ]));

    let panel = state.view().companies.expect("companies panel");
    assert_eq!(panel.categories, ["remote", "backend"]);
    assert_eq!(panel.selected, None);
    assert_eq!(panel.body, CompaniesBody::Placeholder(COMPANIES_PLACEHOLDER));
}

#[test]
fn selecting_a_category_lists_its_companies_in_order() {
    let state = show(companies(vec![
        ("remote", vec!["Globex"]),
        ("backend", vec!["Initech", "Acme", "Hooli"]),
    ]));

    let (mut state, effects) = update(state, Msg::CategorySelected("backend".to_string()));

    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    let panel = state.view().companies.expect("companies panel");
    assert_eq!(panel.selected.as_deref(), Some("backend"));
    assert_eq!(
        panel.body,
        CompaniesBody::Companies(vec![
            "Initech".to_string(),
            "Acme".to_string(),
            "Hooli".to_string(),
        ])
    );
}

#[test]
fn unknown_category_renders_empty_list() {
    let state = show(companies(vec![("backend", vec!["Acme"])]));

    let (state, _) = update(state, Msg::CategorySelected("frontend".to_string()));

    let panel = state.view().companies.expect("companies panel");
    assert_eq!(panel.body, CompaniesBody::Companies(Vec::new()));
}

#[test]
fn empty_mapping_does_not_break_selection() {
    let state = show(CompaniesByKeyword::new());
    let (state, _) = update(state, Msg::CategorySelected("backend".to_string()));

    let panel = state.view().companies.expect("companies panel");
    assert!(panel.categories.is_empty());
    assert_eq!(panel.body, CompaniesBody::Companies(Vec::new()));
}

#[test]
fn new_results_reset_selection() {
    let state = show(companies(vec![("backend", vec!["Acme"])]));
    let (state, _) = update(state, Msg::CategorySelected("backend".to_string()));

    let (state, effects) = update(state, Msg::SearchClicked);
    let request_id = match effects.as_slice() {
        [Effect::SubmitSearch { request_id, .. }] => *request_id,
        other => panic!("unexpected effects {other:?}"),
    };
    let (state, _) = update(
        state,
        Msg::SearchSucceeded {
            request_id,
            results: SearchResults {
                jobs: Vec::new(),
                companies_by_keyword: companies(vec![("backend", vec!["Hooli"])]),
            },
        },
    );

    let panel = state.view().companies.expect("companies panel");
    assert_eq!(panel.selected, None);
    assert_eq!(panel.body, CompaniesBody::Placeholder(COMPANIES_PLACEHOLDER));
}

#[test]
fn selection_without_results_is_ignored() {
    let (mut state, _) = update(AppState::new(), Msg::CategorySelected("backend".to_string()));
    assert!(!state.consume_dirty());
    assert!(state.view().companies.is_none());
}
