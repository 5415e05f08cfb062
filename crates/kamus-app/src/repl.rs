use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::output;
use crate::state::AppState;
use crate::status::{cache_status, clear_cache};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Stats,
    Clear,
    Contains {
        word: String,
        language: Option<String>,
    },
    Explain(String),
    Sentence(String),
    Help,
    Quit,
    Lookup(String),
}

const HELP: &str = "\
<word>                       translate and explain a word
:explain <word>              explain a word without translating it
:sentence <text>             translate a sentence
:contains <word> [language]  check whether an explanation is cached
:stats                       cache size and state
:clear                       drop every cached explanation
:quit                        exit";

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let Some(rest) = line.strip_prefix(':') else {
            return Some(Command::Lookup(line.to_string()));
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        let command = match (name, arg) {
            ("stats", _) => Command::Stats,
            ("clear", _) => Command::Clear,
            ("quit" | "q" | "exit", _) => Command::Quit,
            ("explain", word) if !word.is_empty() => Command::Explain(word.to_string()),
            ("sentence", text) if !text.is_empty() => Command::Sentence(text.to_string()),
            ("contains", arg) if !arg.is_empty() => {
                let mut parts = arg.split_whitespace();
                let word = parts.next().unwrap_or_default().to_string();
                let language = parts.next().map(str::to_string);
                Command::Contains { word, language }
            }
            _ => Command::Help,
        };
        Some(command)
    }
}

/// Run a command and render its result, or `None` for `:quit`
pub async fn execute(state: &AppState, command: Command, json: bool) -> anyhow::Result<Option<String>> {
    let dictionary = &state.dictionary;

    let text = match command {
        Command::Quit => return Ok(None),
        Command::Help => HELP.to_string(),
        Command::Stats => {
            let status = cache_status(&state.cache);
            if json {
                output::json(&status)?
            } else {
                format!(
                    "Cache: {} entries ({})",
                    status.size,
                    if status.enabled { "enabled" } else { "disabled" }
                )
            }
        }
        Command::Clear => {
            let report = clear_cache(&state.cache);
            if json {
                output::json(&report)?
            } else {
                format!("Cleared {} cached explanations", report.cleared_entries)
            }
        }
        Command::Contains { word, language } => {
            let language = language.as_deref().unwrap_or(dictionary.target_language());
            let cached = state.cache.contains_word(&word, language);
            format!(
                "'{}' is {}cached for {}",
                word,
                if cached { "" } else { "not " },
                language
            )
        }
        Command::Explain(word) => {
            let record = dictionary
                .pipeline()
                .lookup_or_generate(&word, dictionary.target_language())
                .await;
            if json {
                output::json(&record)?
            } else {
                output::record(&word, &record)
            }
        }
        Command::Sentence(text) => {
            let translation = dictionary.translate_sentence(&text, None, None).await;
            if json {
                output::json(&translation)?
            } else {
                output::sentence(&translation)
            }
        }
        Command::Lookup(word) => {
            let entry = dictionary.process_word(&word).await;
            if json {
                output::json(&entry)?
            } else {
                output::entry(&entry)
            }
        }
    };

    Ok(Some(text))
}

/// Read commands line by line until `:quit` or end of input
pub async fn run<R, W>(state: &AppState, input: R, out: &mut W, json: bool) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    // Only prompt when a person is typing
    let interactive = atty::is(atty::Stream::Stdin) && atty::is(atty::Stream::Stdout);
    let mut lines = input.lines();

    if interactive {
        writeln!(out, "kamus: type a Malay word, or :help")?;
    }

    loop {
        if interactive {
            write!(out, "> ")?;
            out.flush()?;
        }

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let Some(command) = Command::parse(&line) else {
            continue;
        };

        match execute(state, command, json).await? {
            Some(text) => writeln!(out, "{text}\n")?,
            None => break,
        }
    }

    tracing::debug!("REPL finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line_is_lookup() {
        assert_eq!(Command::parse("  baik "), Some(Command::Lookup("baik".to_string())));
        assert_eq!(Command::parse("   "), None);
    }

    #[test]
    fn test_admin_commands() {
        assert_eq!(Command::parse(":stats"), Some(Command::Stats));
        assert_eq!(Command::parse(":clear"), Some(Command::Clear));
        assert_eq!(Command::parse(":q"), Some(Command::Quit));
        assert_eq!(
            Command::parse(":contains 好"),
            Some(Command::Contains {
                word: "好".to_string(),
                language: None
            })
        );
        assert_eq!(
            Command::parse(":contains 好 Cantonese"),
            Some(Command::Contains {
                word: "好".to_string(),
                language: Some("Cantonese".to_string())
            })
        );
    }

    #[test]
    fn test_argument_commands() {
        assert_eq!(Command::parse(":explain 美丽"), Some(Command::Explain("美丽".to_string())));
        assert_eq!(
            Command::parse(":sentence saya suka makan"),
            Some(Command::Sentence("saya suka makan".to_string()))
        );
    }

    #[test]
    fn test_unknown_or_incomplete_command_shows_help() {
        assert_eq!(Command::parse(":explain"), Some(Command::Help));
        assert_eq!(Command::parse(":contains"), Some(Command::Help));
        assert_eq!(Command::parse(":frobnicate"), Some(Command::Help));
    }
}
