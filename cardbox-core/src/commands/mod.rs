use chrono::Utc;

use crate::errors::CommandError;
use crate::filters::Filter;
use crate::index::Index;
use crate::model::Deck;
use crate::models::{Card, Difficulty};

pub mod edit;

pub use edit::EditCardDescriptor;

/// Usage strings, surfaced by verb-specific parse failures.
pub mod usage {
    pub const ADD: &str = "add: Adds a card to the deck.\n\
        Parameters: q/QUESTION a/ANSWER [t/TAG]... [h/HINT]\n\
        Example: add q/2+2 a/4 t/arithmetic";
    pub const EDIT: &str = "edit: Edits the card identified by the index number used in the \
        displayed card list. Existing values will be overwritten by the input values.\n\
        Parameters: INDEX [q/QUESTION] [a/ANSWER] [t/TAG]... [h/HINT]\n\
        Example: edit 1 a/Paris";
    pub const DELETE: &str = "delete: Deletes the card identified by its index in the displayed card list.\n\
        Parameters: INDEX (must be a positive integer)\n\
        Example: delete 2";
    pub const LIST: &str = "list: Lists cards, optionally narrowed to a question prefix and tags.\n\
        Parameters: [q/QUESTION_PREFIX] [t/TAG]...\n\
        Example: list q/What t/biology";
    pub const PRACTISE: &str = "practise: Shows the question of the card identified by its index in the \
        displayed card list, defaulting to the first card.\n\
        Parameters: [INDEX]\n\
        Example: practise 3";
    pub const SOLVE: &str = "solve: Solves the card identified by its index in the displayed card list.\n\
        Parameters: INDEX (must be a positive integer)\n\
        Example: solve 1";
    pub const SET: &str = "set: Sets the difficulty of the card identified by its index in the \
        displayed card list.\n\
        Parameters: INDEX d/DIFFICULTY (new, easy, medium or hard)\n\
        Example: set 1 d/easy";
    pub const HINT: &str = "hint: Shows the hint of the card identified by its index in the displayed card list.\n\
        Parameters: INDEX (must be a positive integer)\n\
        Example: hint 1";
    pub const CLEAR: &str = "clear: Clears every card from the deck.\nExample: clear";
    pub const HELP: &str = "help: Shows program usage instructions.\nExample: help";
    pub const EXIT: &str = "exit: Exits the program.\nExample: exit";
}

pub const MESSAGE_ADD_SUCCESS: &str = "New card added: ";
pub const MESSAGE_EDIT_SUCCESS: &str = "Edited Card: ";
pub const MESSAGE_DELETE_SUCCESS: &str = "Deleted Card: ";
pub const MESSAGE_LISTED_ALL: &str = "Listed all cards";
pub const MESSAGE_CLEARED: &str = "Deck has been cleared!";
pub const MESSAGE_EXITING: &str = "Exiting Cardbox as requested ...";

/// What a command hands back to the shell: the feedback line plus the two
/// flags the shell acts on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    pub show_help: bool,
    pub exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_help: false,
            exit: false,
        }
    }

    fn help(feedback: impl Into<String>) -> Self {
        Self {
            show_help: true,
            ..Self::new(feedback)
        }
    }

    fn exiting(feedback: impl Into<String>) -> Self {
        Self {
            exit: true,
            ..Self::new(feedback)
        }
    }
}

/// The closed command family: one variant per verb, each carrying its
/// validated payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Add { card: Card },
    Edit { index: Index, descriptor: EditCardDescriptor },
    Delete { index: Index },
    List { filter: Filter },
    Practise { index: Index },
    Solve { index: Index },
    SetDifficulty { index: Index, difficulty: Difficulty },
    Hint { index: Index },
    Clear,
    Help,
    Exit,
}

impl Command {
    /// Runs the command against the model. Validation completes before any
    /// mutation; a returned error means the model is untouched.
    pub fn execute(&self, deck: &mut Deck) -> Result<CommandResult, CommandError> {
        match self {
            Command::Add { card } => execute_add(deck, card),
            Command::Edit { index, descriptor } => edit::execute(deck, *index, descriptor),
            Command::Delete { index } => execute_delete(deck, *index),
            Command::List { filter } => execute_list(deck, filter),
            Command::Practise { index } => execute_practise(deck, *index),
            Command::Solve { index } => execute_solve(deck, *index),
            Command::SetDifficulty { index, difficulty } => {
                execute_set_difficulty(deck, *index, *difficulty)
            }
            Command::Hint { index } => execute_hint(deck, *index),
            Command::Clear => {
                deck.clear();
                Ok(CommandResult::new(MESSAGE_CLEARED))
            }
            Command::Help => Ok(CommandResult::help(help_summary())),
            Command::Exit => Ok(CommandResult::exiting(MESSAGE_EXITING)),
        }
    }
}

fn execute_add(deck: &mut Deck, card: &Card) -> Result<CommandResult, CommandError> {
    if deck.has_card(card) {
        return Err(CommandError::DuplicateCard);
    }
    let message = format!("{MESSAGE_ADD_SUCCESS}{card}");
    deck.add_card(card.clone());
    Ok(CommandResult::new(message))
}

fn execute_delete(deck: &mut Deck, index: Index) -> Result<CommandResult, CommandError> {
    let removed = deck.remove_card(index)?;
    Ok(CommandResult::new(format!("{MESSAGE_DELETE_SUCCESS}{removed}")))
}

fn execute_list(deck: &mut Deck, filter: &Filter) -> Result<CommandResult, CommandError> {
    deck.update_filter(filter.clone());
    let message = if filter.is_show_all() {
        MESSAGE_LISTED_ALL.to_string()
    } else {
        format!("{} cards listed!", deck.displayed_len())
    };
    Ok(CommandResult::new(message))
}

fn execute_practise(deck: &mut Deck, index: Index) -> Result<CommandResult, CommandError> {
    let card = deck.displayed_card(index)?;
    Ok(CommandResult::new(format!(
        "Practising Card {}: {}",
        index.one_based(),
        card.question
    )))
}

fn execute_solve(deck: &mut Deck, index: Index) -> Result<CommandResult, CommandError> {
    let solved = deck.displayed_card(index)?.solved();
    let message = format!("Solved Card {}: {}", index.one_based(), solved);
    deck.set_card(index, solved)?;
    deck.goal_mut().solved_card();
    Ok(CommandResult::new(message))
}

fn execute_set_difficulty(
    deck: &mut Deck,
    index: Index,
    difficulty: Difficulty,
) -> Result<CommandResult, CommandError> {
    let today = Utc::now().date_naive();
    let updated = deck.displayed_card(index)?.with_difficulty(difficulty, today);
    deck.set_card(index, updated)?;
    Ok(CommandResult::new(format!(
        "Set Card {} to difficulty {}",
        index.one_based(),
        difficulty
    )))
}

fn execute_hint(deck: &mut Deck, index: Index) -> Result<CommandResult, CommandError> {
    let card = deck.displayed_card(index)?;
    let message = match &card.hint {
        Some(hint) => format!("Hint for Card {}: {}", index.one_based(), hint),
        None => format!("Card {} has no hint", index.one_based()),
    };
    Ok(CommandResult::new(message))
}

fn help_summary() -> String {
    [
        usage::ADD,
        usage::EDIT,
        usage::DELETE,
        usage::LIST,
        usage::PRACTISE,
        usage::SOLVE,
        usage::SET,
        usage::HINT,
        usage::CLEAR,
        usage::HELP,
        usage::EXIT,
    ]
    .join("\n\n")
}
