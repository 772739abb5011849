use crate::commands::{usage, Command};
use crate::errors::ParseError;

pub mod tokenizer;

mod util;
mod verbs;

/// Splits one raw input line into a command word and argument tail, then
/// delegates the tail verbatim to the matching per-verb parser.
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::MalformedInput { usage: usage::HELP });
    }
    let word_end = trimmed
        .find(char::is_whitespace)
        .unwrap_or(trimmed.len());
    let (word, args) = trimmed.split_at(word_end);

    log::debug!("command word: {word}; arguments: {args}");

    match word {
        "add" => verbs::parse_add(args),
        "edit" => verbs::parse_edit(args),
        "delete" => verbs::parse_delete(args),
        "list" => verbs::parse_list(args),
        "practise" => verbs::parse_practise(args),
        "solve" => verbs::parse_solve(args),
        "set" => verbs::parse_set_difficulty(args),
        "hint" => verbs::parse_hint(args),
        "clear" => Ok(Command::Clear),
        "help" => Ok(Command::Help),
        "exit" => Ok(Command::Exit),
        _ => {
            log::debug!("unknown command word: {word}");
            Err(ParseError::UnknownCommand)
        }
    }
}
