use jobscout_core::Msg;

use super::constants::COMMAND_PREFIX;

/// What one line of terminal input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Messages to feed through `update`, in order.
    Dispatch(Vec<Msg>),
    Help,
    Quit,
    Unknown(String),
}

/// Maps a line typed at the prompt to a command.
///
/// Plain text behaves like typing into the keyword box and pressing Enter;
/// a bare Enter submits whatever the box already holds.
pub fn parse_line(line: &str) -> Command {
    let line = line.trim_end_matches(['\r', '\n']);
    let Some(rest) = line.trim_start().strip_prefix(COMMAND_PREFIX) else {
        let mut msgs = Vec::with_capacity(2);
        if !line.is_empty() {
            msgs.push(Msg::DraftChanged(line.to_string()));
        }
        msgs.push(Msg::AddKeywordClicked);
        return Command::Dispatch(msgs);
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    match (name.to_ascii_lowercase().as_str(), arg) {
        ("draft", text) => Command::Dispatch(vec![Msg::DraftChanged(text.to_string())]),
        ("add", "") => Command::Dispatch(vec![Msg::AddKeywordClicked]),
        ("add", text) => Command::Dispatch(vec![
            Msg::DraftChanged(text.to_string()),
            Msg::AddKeywordClicked,
        ]),
        ("rm" | "remove", keyword) if !keyword.is_empty() => {
            Command::Dispatch(vec![Msg::RemoveKeyword(keyword.to_string())])
        }
        ("search", "") => Command::Dispatch(vec![Msg::SearchClicked]),
        ("cancel", "") => Command::Dispatch(vec![Msg::CancelClicked]),
        ("select", keyword) if !keyword.is_empty() => {
            Command::Dispatch(vec![Msg::CategorySelected(keyword.to_string())])
        }
        ("help" | "h" | "?", _) => Command::Help,
        ("quit" | "q" | "exit", _) => Command::Quit,
        _ => Command::Unknown(line.trim().to_string()),
    }
}
