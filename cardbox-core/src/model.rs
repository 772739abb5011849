use crate::errors::CommandError;
use crate::filters::Filter;
use crate::index::Index;
use crate::models::{Card, Goal};

/// The in-memory model: the authoritative, insertion-ordered card
/// collection, the active filter, the displayed view derived from both,
/// and the session solve counter.
///
/// Single-threaded by construction; commands run to completion one at a
/// time and the displayed view is recomputed whenever the collection or
/// the filter changes.
#[derive(Debug, Default)]
pub struct Deck {
    cards: Vec<Card>,
    filter: Filter,
    displayed: Vec<usize>,
    goal: Goal,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the model from persisted state at startup.
    pub fn with_cards(cards: Vec<Card>) -> Self {
        let mut deck = Self {
            cards,
            filter: Filter::show_all(),
            displayed: Vec::new(),
            goal: Goal::new(),
        };
        deck.reindex();
        deck
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn goal(&self) -> &Goal {
        &self.goal
    }

    pub fn goal_mut(&mut self) -> &mut Goal {
        &mut self.goal
    }

    /// True if any card in the full collection shares duplicate identity
    /// (question + answer) with `card`.
    pub fn has_card(&self, card: &Card) -> bool {
        self.cards.iter().any(|c| c.is_same_card(card))
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.reindex();
    }

    pub fn displayed_len(&self) -> usize {
        self.displayed.len()
    }

    pub fn displayed_cards(&self) -> Vec<&Card> {
        self.displayed.iter().map(|&i| &self.cards[i]).collect()
    }

    /// Resolves a 1-based displayed index to the card it addresses.
    pub fn displayed_card(&self, index: Index) -> Result<&Card, CommandError> {
        let zero = index.resolve(self.displayed.len())?;
        Ok(&self.cards[self.displayed[zero]])
    }

    /// Replaces the card at a displayed index in its authoritative slot,
    /// preserving collection order, then recomputes the view.
    pub fn set_card(&mut self, index: Index, replacement: Card) -> Result<(), CommandError> {
        let zero = index.resolve(self.displayed.len())?;
        let slot = self.displayed[zero];
        self.cards[slot] = replacement;
        self.reindex();
        Ok(())
    }

    /// Removes the card at a displayed index from the authoritative
    /// collection and returns it.
    pub fn remove_card(&mut self, index: Index) -> Result<Card, CommandError> {
        let zero = index.resolve(self.displayed.len())?;
        let slot = self.displayed[zero];
        let removed = self.cards.remove(slot);
        self.reindex();
        Ok(removed)
    }

    pub fn clear(&mut self) {
        self.cards.clear();
        self.reindex();
    }

    /// Replaces the active filter and recomputes the displayed view.
    pub fn update_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.reindex();
    }

    fn reindex(&mut self) {
        self.displayed = self
            .cards
            .iter()
            .enumerate()
            .filter(|(_, c)| self.filter.matches(c))
            .map(|(i, _)| i)
            .collect();
    }
}
