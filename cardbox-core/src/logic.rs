use crate::commands::CommandResult;
use crate::errors::Error;
use crate::model::Deck;
use crate::parser;

/// The command-line surface: one free-text line in, a result message out.
/// Parsing and execution both run to completion before this returns; an
/// error means the model was not mutated.
pub fn execute(deck: &mut Deck, input: &str) -> Result<CommandResult, Error> {
    let command = parser::parse_command(input)?;
    let result = command.execute(deck)?;
    log::debug!("result: {}", result.feedback);
    Ok(result)
}
