//! Line commands accepted by the interactive page.

use std::str::FromStr;
use thiserror::Error;

/// One user action typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Pick a dataset by id; no id clears the selection.
    Select(Option<u64>),
    Request,
    Check,
    Reload,
    Connect,
    Show,
    Help,
    Quit,
}

impl Command {
    /// Whether the page should be redrawn after this command.
    pub fn rerenders(&self) -> bool {
        !matches!(self, Command::Help | Command::Quit)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}', type 'help' for the list of commands")]
    Unknown(String),

    #[error("'{0}' is not a dataset id")]
    BadId(String),

    #[error("'{0}' takes no arguments")]
    UnexpectedArgument(String),
}

pub const HELP: &str = "\
Commands:
  select <id>   choose a dataset
  select        clear the selection
  request       pay for access to the selected dataset
  check         check access to the selected dataset
  reload        fetch the dataset list again
  connect       re-read the wallet account
  show          redraw the page
  help          this text
  quit          leave";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().unwrap_or_default().to_lowercase();
        let arg = words.next();
        if let Some(extra) = words.next() {
            return Err(CommandError::UnexpectedArgument(extra.to_string()));
        }

        let command = match verb.as_str() {
            "select" | "s" => {
                let id = arg
                    .map(|raw| raw.parse::<u64>().map_err(|_| CommandError::BadId(raw.to_string())))
                    .transpose()?;
                return Ok(Command::Select(id));
            }
            "request" | "r" => Command::Request,
            "check" | "c" => Command::Check,
            "reload" => Command::Reload,
            "connect" => Command::Connect,
            "show" | "" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        match arg {
            Some(_) => Err(CommandError::UnexpectedArgument(verb)),
            None => Ok(command),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_select() {
        assert_eq!("select 2".parse::<Command>(), Ok(Command::Select(Some(2))));
        assert_eq!("  SELECT   3 ".parse::<Command>(), Ok(Command::Select(Some(3))));
        assert_eq!("select".parse::<Command>(), Ok(Command::Select(None)));
        assert_eq!(
            "select two".parse::<Command>(),
            Err(CommandError::BadId("two".into()))
        );
    }

    #[test]
    fn test_parse_actions() {
        assert_eq!("request".parse::<Command>(), Ok(Command::Request));
        assert_eq!("c".parse::<Command>(), Ok(Command::Check));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
        assert_eq!("".parse::<Command>(), Ok(Command::Show));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "buy".parse::<Command>(),
            Err(CommandError::Unknown("buy".into()))
        );
        assert_eq!(
            "request 2".parse::<Command>(),
            Err(CommandError::UnexpectedArgument("request".into()))
        );
        assert_eq!(
            "select 1 2".parse::<Command>(),
            Err(CommandError::UnexpectedArgument("2".into()))
        );
    }

    #[test]
    fn test_rerenders() {
        assert!(Command::Request.rerenders());
        assert!(!Command::Help.rerenders());
    }
}
