use jobscout_core::{
    AppViewModel, CompaniesBody, CompaniesView, JobCardView, KeywordInputView, RequestPhase,
};

use super::constants::TITLE;

/// Renders the whole screen as lines of text.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = vec![format!("== {TITLE} =="), status_line(view)];

    lines.extend(render_keywords(&view.keyword_input));
    lines.push(actions_line(view));

    if let Some(companies) = &view.companies {
        lines.push(String::new());
        lines.extend(render_companies(companies));
    }

    if matches!(view.phase, RequestPhase::Success) || !view.jobs.is_empty() {
        lines.push(String::new());
        lines.extend(render_job_grid(&view.jobs));
    }

    if let Some(error) = &view.error {
        lines.push(String::new());
        lines.push(format!("!! {error}"));
    }

    lines
}

fn status_line(view: &AppViewModel) -> String {
    let phase = match view.phase {
        RequestPhase::Idle => "Ready".to_string(),
        RequestPhase::Loading => "Searching...".to_string(),
        RequestPhase::Success => match view.jobs.len() {
            1 => "1 job found".to_string(),
            count => format!("{count} jobs found"),
        },
        RequestPhase::Error => "Search failed".to_string(),
    };
    format!("Status: {phase}")
}

fn render_keywords(input: &KeywordInputView) -> Vec<String> {
    let tags = if input.tags.is_empty() {
        "(none)".to_string()
    } else {
        input
            .tags
            .iter()
            .map(|tag| format!("[{} x]", tag.label))
            .collect::<Vec<_>>()
            .join(" ")
    };

    let mut lines = vec![format!("Keywords: {tags}")];
    if !input.draft.is_empty() {
        let hint = if input.add_enabled {
            "press Enter to add"
        } else {
            "nothing to add"
        };
        lines.push(format!("Draft: {:?} ({hint})", input.draft));
    }
    lines
}

fn actions_line(view: &AppViewModel) -> String {
    let search = if view.search_enabled {
        ":search"
    } else {
        "(search running)"
    };
    if view.cancel_enabled {
        format!("Actions: {search} | :cancel")
    } else {
        format!("Actions: {search}")
    }
}

fn render_companies(view: &CompaniesView) -> Vec<String> {
    let mut lines = vec!["-- Companies by keyword --".to_string()];
    if view.categories.is_empty() {
        lines.push("Categories: (none)".to_string());
    } else {
        let categories = view
            .categories
            .iter()
            .map(|category| {
                if view.selected.as_deref() == Some(category.as_str()) {
                    format!("<{category}>")
                } else {
                    category.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!("Categories: {categories}"));
    }

    match &view.body {
        CompaniesBody::Placeholder(text) => lines.push(format!("  {text}")),
        CompaniesBody::Companies(companies) if companies.is_empty() => {
            lines.push("  (no companies)".to_string())
        }
        CompaniesBody::Companies(companies) => {
            lines.extend(companies.iter().map(|company| format!("  * {company}")));
        }
    }
    lines
}

fn render_job_grid(jobs: &[JobCardView]) -> Vec<String> {
    let mut lines = vec![format!("-- Jobs ({}) --", jobs.len())];
    for (index, card) in jobs.iter().enumerate() {
        lines.extend(render_job_card(index + 1, card));
    }
    lines
}

fn render_job_card(position: usize, card: &JobCardView) -> Vec<String> {
    let mut lines = vec![format!("[{position}] {} @ {}", card.title, card.company)];

    let badges: Vec<&str> = [card.location_badge.as_deref(), card.salary_badge.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if !badges.is_empty() {
        lines.push(format!("    {}", badges.join(" | ")));
    }
    lines.push(format!("    {}", card.posted));
    if let Some(link) = &card.link {
        lines.push(format!("    {}", link.href));
    }
    lines
}
