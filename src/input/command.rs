//! Line commands for the text driver.
//!
//! ```text
//! play <id>   | p <id>     play a card
//! slap <id>   | s <id>     slap the pile
//! reset [players] [decks]  deal a new game
//! status                   show the table
//! quit | q                 leave
//! <key>                    a single bound key
//! ```

use thiserror::Error;

use super::bindings::InputBindings;
use crate::core::PlayerId;
use crate::table::PlayerAction;

/// A parsed driver command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Action(PlayerAction),
    Reset {
        players: Option<usize>,
        decks: Option<usize>,
    },
    Status,
    Quit,
}

/// Malformed input line.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}'")]
    Unknown(String),

    #[error("'{0}' needs a player number")]
    MissingPlayer(String),

    #[error("'{0}' is not a number")]
    BadNumber(String),

    #[error("unexpected '{0}' after command")]
    Trailing(String),
}

impl Command {
    /// Parse one input line, resolving single keys through `bindings`.
    pub fn parse(line: &str, bindings: &InputBindings) -> Result<Self, CommandError> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or(CommandError::Empty)?;
        let verb_lower = verb.to_ascii_lowercase();

        let command = match verb_lower.as_str() {
            "play" | "p" => Command::Action(PlayerAction::Play(player_arg(verb, words.next())?)),
            "slap" | "s" => Command::Action(PlayerAction::Slap(player_arg(verb, words.next())?)),
            "reset" => Command::Reset {
                players: words.next().map(number).transpose()?,
                decks: words.next().map(number).transpose()?,
            },
            "status" => Command::Status,
            "quit" | "q" | "exit" => Command::Quit,
            _ => {
                let mut chars = verb.chars();
                match (chars.next(), chars.next()) {
                    (Some(key), None) => bindings
                        .resolve(key)
                        .map(Command::Action)
                        .ok_or_else(|| CommandError::Unknown(verb.to_string()))?,
                    _ => return Err(CommandError::Unknown(verb.to_string())),
                }
            }
        };

        match words.next() {
            Some(extra) => Err(CommandError::Trailing(extra.to_string())),
            None => Ok(command),
        }
    }
}

fn player_arg(verb: &str, word: Option<&str>) -> Result<PlayerId, CommandError> {
    let word = word.ok_or_else(|| CommandError::MissingPlayer(verb.to_string()))?;
    word.parse::<u8>()
        .map(PlayerId)
        .map_err(|_| CommandError::BadNumber(word.to_string()))
}

fn number(word: &str) -> Result<usize, CommandError> {
    word.parse()
        .map_err(|_| CommandError::BadNumber(word.to_string()))
}
