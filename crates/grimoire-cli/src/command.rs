//! Parsing of REPL input lines.

use std::str::FromStr;

use thiserror::Error;

/// A parsed REPL command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Status,
    Explore,
    /// Hunt, staking the given extra SP.
    Hunt(i32),
    /// Rest, spending the given SP.
    Rest(i32),
    /// Use an item; multi-word ids are joined with spaces.
    Use(String),
    Save,
    /// Start over; confirmed separately.
    Reset,
    /// Save and leave.
    Quit,
}

impl Command {
    /// Returns true if the command may change the game state.
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            Self::Explore | Self::Hunt(_) | Self::Rest(_) | Self::Use(_)
        )
    }
}

/// Why a line was not a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown command '{0}'. Type 'help'.")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),
}

fn number_or(arg: Option<&str>, default: i32, usage: &'static str) -> Result<i32, ParseError> {
    arg.map_or(Ok(default), |raw| {
        raw.parse().map_err(|_| ParseError::Usage(usage))
    })
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(ParseError::Usage("type 'help' for commands"));
        };

        let command = match verb.to_lowercase().as_str() {
            "help" | "?" => Self::Help,
            "status" => Self::Status,
            "explore" => Self::Explore,
            "hunt" => Self::Hunt(number_or(words.next(), 0, "hunt [extra_sp]")?),
            "rest" => Self::Rest(number_or(words.next(), 1, "rest [sp]")?),
            "use" => {
                let id = words.collect::<Vec<_>>().join(" ");
                if id.is_empty() {
                    return Err(ParseError::Usage("use <item_id>"));
                }
                Self::Use(id)
            }
            "save" => Self::Save,
            "reset" => Self::Reset,
            "exit" | "quit" => Self::Quit,
            other => return Err(ParseError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}
