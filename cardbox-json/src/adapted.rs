use cardbox_core::errors::StorageError;
use cardbox_core::models::{self, Card, Difficulty};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Storage-friendly form of a card. Every field is optional on the wire so
/// a missing or invalid one surfaces as a constraint violation at load
/// time, before anything reaches the model.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JsonAdaptedCard {
    #[serde(default)]
    question: Option<String>,
    #[serde(default)]
    answer: Option<String>,
    #[serde(default)]
    difficulty: Option<Difficulty>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    hint: Option<String>,
    #[serde(default)]
    next_practice_date: Option<NaiveDate>,
    #[serde(default)]
    last_practice_date: Option<NaiveDate>,
    #[serde(default)]
    solve_count: Option<u32>,
    #[serde(default)]
    id: Option<Uuid>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

impl JsonAdaptedCard {
    pub fn from_model(card: &Card) -> Self {
        Self {
            question: Some(card.question.clone()),
            answer: Some(card.answer.clone()),
            difficulty: Some(card.difficulty),
            tags: card.tags.iter().cloned().collect(),
            hint: card.hint.clone(),
            next_practice_date: card.next_practice_date,
            last_practice_date: card.last_practice_date,
            solve_count: Some(card.solve_count),
            id: Some(card.id),
            created_at: Some(card.created_at),
        }
    }

    /// Converts back into a model card, enforcing every field constraint.
    pub fn to_model(&self) -> Result<Card, StorageError> {
        let question = self
            .question
            .as_ref()
            .ok_or(StorageError::MissingField("question"))?;
        models::validate_question(question)?;

        let answer = self
            .answer
            .as_ref()
            .ok_or(StorageError::MissingField("answer"))?;
        models::validate_answer(answer)?;

        let mut tags = BTreeSet::new();
        for tag in &self.tags {
            models::validate_tag(tag)?;
            tags.insert(tag.clone());
        }
        if let Some(hint) = &self.hint {
            models::validate_hint(hint)?;
        }

        Ok(Card {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            question: question.clone(),
            answer: answer.clone(),
            difficulty: self.difficulty.unwrap_or(Difficulty::New),
            tags,
            hint: self.hint.clone(),
            next_practice_date: self.next_practice_date,
            last_practice_date: self.last_practice_date,
            solve_count: self.solve_count.unwrap_or(0),
            created_at: self.created_at.unwrap_or_else(Utc::now),
        })
    }
}
