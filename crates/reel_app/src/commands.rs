//! Line commands read from stdin and their translation into core messages.

use reel_core::{AppViewModel, Msg};

pub const HELP: &str = "\
commands:
  type <text>     edit the search box (suggestions follow after a pause)
  search [text]   run a search for <text>, or for the current input
  pick <n>        choose suggestion n
  dismiss         hide suggestions
  more            scroll to the end of the list
  open <n|id>     show details for result n or an IMDb id
  back            leave the detail view
  retry           repeat the failed search
  reset           clear results
  help            show this text
  quit            exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Type(String),
    Search(Option<String>),
    Pick(usize),
    Dismiss,
    More,
    Open(Target),
    Back,
    Retry,
    Reset,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Zero-based position in the result list.
    Index(usize),
    Id(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("`{0}` is not a position; positions start at 1")]
    InvalidPosition(String),
    #[error("no result at position {0}")]
    NoSuchResult(usize),
}

/// Blank lines parse to `None`.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "type" | "t" => Command::Type(rest.to_string()),
        "search" | "s" => Command::Search((!rest.is_empty()).then(|| rest.to_string())),
        "pick" | "p" => Command::Pick(position(rest, "pick")?),
        "dismiss" | "esc" => Command::Dismiss,
        "more" | "m" | "scroll" => Command::More,
        "open" | "o" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument("open"));
            }
            match rest.parse::<usize>() {
                Ok(_) => Command::Open(Target::Index(position(rest, "open")?)),
                Err(_) => Command::Open(Target::Id(rest.to_string())),
            }
        }
        "back" | "b" => Command::Back,
        "retry" | "r" => Command::Retry,
        "reset" => Command::Reset,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn position(arg: &str, command: &'static str) -> Result<usize, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument(command));
    }
    match arg.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(CommandError::InvalidPosition(arg.to_string())),
    }
}

impl Command {
    /// Messages to dispatch, in order. `Help` and `Quit` are handled by the
    /// caller and produce none.
    pub fn into_msgs(self, view: &AppViewModel) -> Result<Vec<Msg>, CommandError> {
        let msgs = match self {
            Command::Type(text) => vec![Msg::InputChanged(text)],
            Command::Search(Some(text)) => vec![Msg::InputChanged(text), Msg::SearchSubmitted],
            Command::Search(None) => vec![Msg::SearchSubmitted],
            Command::Pick(index) => vec![Msg::SuggestionPicked { index }],
            Command::Dismiss => vec![Msg::SuggestionsDismissed],
            // The sentinel only reacts to a rising edge, so scrolling past it
            // is reported as enter followed by leave.
            Command::More => vec![
                Msg::SentinelVisibility { visible: true },
                Msg::SentinelVisibility { visible: false },
            ],
            Command::Open(Target::Id(id)) => vec![Msg::DetailOpened { id }],
            Command::Open(Target::Index(index)) => {
                let movie = view
                    .results
                    .get(index)
                    .ok_or(CommandError::NoSuchResult(index + 1))?;
                vec![Msg::DetailOpened {
                    id: movie.id.clone(),
                }]
            }
            Command::Back => vec![Msg::DetailClosed],
            Command::Retry => vec![Msg::RetryClicked],
            Command::Reset => vec![Msg::ResetClicked],
            Command::Help | Command::Quit => Vec::new(),
        };
        Ok(msgs)
    }
}
