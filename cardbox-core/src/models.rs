use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::ConstraintError;

pub type CardId = Uuid;

pub const MAX_TEXT_LEN: usize = 256;
pub const MAX_TAG_LEN: usize = 50;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    New,
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::New => "new",
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Days until the next practice when this difficulty is assigned.
    /// A fixed table, not a scheduler.
    pub fn practice_interval_days(&self) -> u64 {
        match self {
            Difficulty::New | Difficulty::Hard => 1,
            Difficulty::Medium => 2,
            Difficulty::Easy => 4,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "new" => Ok(Difficulty::New),
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ConstraintError::Difficulty),
        }
    }
}

pub fn validate_question(s: &str) -> Result<(), ConstraintError> {
    if s.trim().is_empty() || s.chars().count() > MAX_TEXT_LEN {
        return Err(ConstraintError::Question);
    }
    Ok(())
}

pub fn validate_answer(s: &str) -> Result<(), ConstraintError> {
    if s.trim().is_empty() || s.chars().count() > MAX_TEXT_LEN {
        return Err(ConstraintError::Answer);
    }
    Ok(())
}

pub fn validate_tag(s: &str) -> Result<(), ConstraintError> {
    if s.is_empty() || s.chars().count() > MAX_TAG_LEN || !s.chars().all(char::is_alphanumeric) {
        return Err(ConstraintError::Tag);
    }
    Ok(())
}

pub fn validate_hint(s: &str) -> Result<(), ConstraintError> {
    if s.trim().is_empty() || s.chars().count() > MAX_TEXT_LEN {
        return Err(ConstraintError::Hint);
    }
    Ok(())
}

/// One flashcard. Immutable by convention: every command that changes a
/// card builds a replacement instance and swaps it into the deck.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub question: String,
    pub answer: String,
    pub difficulty: Difficulty,
    pub tags: BTreeSet<String>,
    pub hint: Option<String>,
    pub next_practice_date: Option<NaiveDate>,
    pub last_practice_date: Option<NaiveDate>,
    pub solve_count: u32,
    pub created_at: DateTime<Utc>,
}

impl Card {
    /// Builds a fresh card from user-supplied fields. Fails if any field
    /// violates its constraint; an invalid card can never be constructed
    /// through this path.
    pub fn try_new(
        question: impl Into<String>,
        answer: impl Into<String>,
        tags: BTreeSet<String>,
        hint: Option<String>,
    ) -> Result<Self, ConstraintError> {
        let question = question.into();
        let answer = answer.into();
        validate_question(&question)?;
        validate_answer(&answer)?;
        for tag in &tags {
            validate_tag(tag)?;
        }
        if let Some(h) = &hint {
            validate_hint(h)?;
        }
        Ok(Self {
            id: Uuid::new_v4(),
            question,
            answer,
            difficulty: Difficulty::New,
            tags,
            hint,
            next_practice_date: None,
            last_practice_date: None,
            solve_count: 0,
            created_at: Utc::now(),
        })
    }

    /// Duplicate identity: question + answer only. Looser than `PartialEq`
    /// on purpose; two cards with the same question and answer are the same
    /// card for collision purposes even if tags or hint differ.
    pub fn is_same_card(&self, other: &Card) -> bool {
        self.question == other.question && self.answer == other.answer
    }

    /// Records one solve event, returning the replacement card.
    pub fn solved(&self) -> Card {
        let mut card = self.clone();
        card.solve_count += 1;
        card
    }

    /// Assigns a difficulty and stamps the practice dates from the fixed
    /// per-difficulty interval table.
    pub fn with_difficulty(&self, difficulty: Difficulty, today: NaiveDate) -> Card {
        let mut card = self.clone();
        card.difficulty = difficulty;
        card.last_practice_date = Some(today);
        card.next_practice_date = today.checked_add_days(Days::new(difficulty.practice_interval_days()));
        card
    }
}

// Display equality covers the content fields; `id` and `created_at` are
// storage bookkeeping and excluded.
impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.question == other.question
            && self.answer == other.answer
            && self.difficulty == other.difficulty
            && self.tags == other.tags
            && self.hint == other.hint
            && self.next_practice_date == other.next_practice_date
            && self.last_practice_date == other.last_practice_date
            && self.solve_count == other.solve_count
    }
}

impl Eq for Card {}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Answer: {}; Difficulty: {}; Solve count: {}; Tags: ",
            self.question, self.answer, self.difficulty, self.solve_count
        )?;
        for tag in &self.tags {
            write!(f, "[{tag}]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, "; Hint: {hint}")?;
        }
        Ok(())
    }
}

/// Session-scoped solve counter. Lives with the model, dies with the
/// process; never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Goal {
    solved: u32,
}

impl Goal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn solved_card(&mut self) {
        self.solved += 1;
    }

    pub fn solved(&self) -> u32 {
        self.solved
    }
}
