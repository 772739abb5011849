use std::collections::BTreeSet;

use crate::errors::CommandError;
use crate::index::Index;
use crate::model::Deck;
use crate::models::{Card, Difficulty};

use super::{CommandResult, MESSAGE_EDIT_SUCCESS};

/// Sparse patch over a card: a field is either supplied or absent, never a
/// sentinel. Absent fields keep the card's existing value on merge.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditCardDescriptor {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub tags: Option<BTreeSet<String>>,
    pub hint: Option<String>,
}

impl EditCardDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.question.is_some()
            || self.answer.is_some()
            || self.tags.is_some()
            || self.hint.is_some()
    }

    /// Builds the edited card. Any content edit resets the difficulty to
    /// new; practice history (dates and solve count) carries over verbatim.
    pub fn merge_onto(&self, card: &Card) -> Card {
        Card {
            id: card.id,
            question: self.question.clone().unwrap_or_else(|| card.question.clone()),
            answer: self.answer.clone().unwrap_or_else(|| card.answer.clone()),
            difficulty: Difficulty::New,
            tags: self.tags.clone().unwrap_or_else(|| card.tags.clone()),
            hint: self.hint.clone().or_else(|| card.hint.clone()),
            next_practice_date: card.next_practice_date,
            last_practice_date: card.last_practice_date,
            solve_count: card.solve_count,
            created_at: card.created_at,
        }
    }
}

pub(super) fn execute(
    deck: &mut Deck,
    index: Index,
    descriptor: &EditCardDescriptor,
) -> Result<CommandResult, CommandError> {
    let target = deck.displayed_card(index)?;
    let edited = descriptor.merge_onto(target);

    // Editing a card to equal itself is allowed; the duplicate check only
    // fires when the merged identity lands on a different existing card.
    if !target.is_same_card(&edited) && deck.has_card(&edited) {
        return Err(CommandError::DuplicateCard);
    }

    let message = format!("{MESSAGE_EDIT_SUCCESS}{edited}");
    deck.set_card(index, edited)?;
    Ok(CommandResult::new(message))
}
