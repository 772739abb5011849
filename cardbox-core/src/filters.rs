use crate::models::Card;
use std::collections::BTreeSet;

/// Listing criteria composed into one predicate over cards.
///
/// The base predicate shows everything; a question prefix and a tag set are
/// appended only when supplied, and all present criteria must hold (AND).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filter {
    question_prefix: Option<String>,
    tags: BTreeSet<String>,
}

impl Filter {
    pub fn show_all() -> Self {
        Self::default()
    }

    pub fn with_question_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.question_prefix = Some(prefix.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn is_show_all(&self) -> bool {
        self.question_prefix.is_none() && self.tags.is_empty()
    }

    pub fn matches(&self, card: &Card) -> bool {
        let prefix_ok = self
            .question_prefix
            .as_deref()
            .map(|p| card.question.starts_with(p))
            .unwrap_or(true);
        let tags_ok = self.tags.iter().all(|t| card.tags.contains(t));
        prefix_ok && tags_ok
    }
}
