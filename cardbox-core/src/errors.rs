use thiserror::Error;

/// Field constraint violations, raised wherever a card field is built from
/// raw text (parser input or persisted data).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    #[error("Questions should not be blank and should be at most 256 characters")]
    Question,
    #[error("Answers should not be blank and should be at most 256 characters")]
    Answer,
    #[error("Tag names should be alphanumeric and at most 50 characters")]
    Tag,
    #[error("Hints should not be blank and should be at most 256 characters")]
    Hint,
    #[error("Difficulty should be one of: new, easy, medium, hard")]
    Difficulty,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input did not split into a command word and argument tail.
    #[error("Invalid command format! \n{usage}")]
    MalformedInput { usage: &'static str },
    #[error("Unknown command")]
    UnknownCommand,
    /// Verb-specific format failure; carries the verb's usage string.
    #[error("Invalid command format! \n{usage}")]
    InvalidArguments { usage: &'static str },
    /// A recognized flag carried an invalid value, or an index literal did
    /// not parse. Carries the constraint message verbatim.
    #[error("{message}")]
    InvalidValue { message: String },
    #[error("At least one field to edit must be provided.")]
    NoFieldSpecified,
}

impl ParseError {
    pub fn invalid_value(message: impl Into<String>) -> Self {
        ParseError::InvalidValue {
            message: message.into(),
        }
    }
}

impl From<ConstraintError> for ParseError {
    fn from(e: ConstraintError) -> Self {
        ParseError::invalid_value(e.to_string())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Index outside the currently displayed (filtered) list.
    #[error("The card index provided is invalid")]
    InvalidDisplayedIndex,
    /// Post-edit identity collides with a different existing card.
    #[error("This card already exists in the deck")]
    DuplicateCard,
}

/// Errors surfaced at the persistence boundary, at load/save time only.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Card's {0} field is missing")]
    MissingField(&'static str),
    #[error("{0}")]
    Constraint(String),
    #[error("storage io: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage format: {0}")]
    Serde(#[from] serde_json::Error),
}

impl From<ConstraintError> for StorageError {
    fn from(e: ConstraintError) -> Self {
        StorageError::Constraint(e.to_string())
    }
}

/// Result of submitting one input line: either of the two command-layer
/// failures, converted to a user-facing message by the shell.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Command(#[from] CommandError),
}
