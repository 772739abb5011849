use cardbox_core::errors::{CommandError, Error, ParseError};
use cardbox_core::logic;
use cardbox_core::model::Deck;
use cardbox_core::models::{Card, Difficulty};
use chrono::{Days, Utc};
use std::collections::BTreeSet;

fn card(question: &str, answer: &str) -> Card {
    Card::try_new(question, answer, BTreeSet::new(), None).unwrap()
}

fn tagged(question: &str, answer: &str, tags: &[&str]) -> Card {
    let tags = tags.iter().map(|s| s.to_string()).collect();
    Card::try_new(question, answer, tags, None).unwrap()
}

#[test]
fn scenario_edit_merges_and_resets_difficulty() {
    let today = Utc::now().date_naive();
    let seeded = card("2+2", "4")
        .with_difficulty(Difficulty::Easy, today)
        .solved()
        .solved()
        .solved();
    let mut deck = Deck::with_cards(vec![seeded.clone()]);

    let result = logic::execute(&mut deck, "edit 1 q/3+3").unwrap();

    let edited = &deck.cards()[0];
    assert_eq!(edited.question, "3+3");
    assert_eq!(edited.answer, "4");
    assert_eq!(edited.difficulty, Difficulty::New);
    assert_eq!(edited.solve_count, 3);
    assert_eq!(edited.last_practice_date, seeded.last_practice_date);
    assert_eq!(edited.next_practice_date, seeded.next_practice_date);
    assert!(result.feedback.starts_with("Edited Card: 3+3"));
}

#[test]
fn edit_with_no_fields_is_rejected_before_execution() {
    let mut deck = Deck::with_cards(vec![card("2+2", "4")]);
    let err = logic::execute(&mut deck, "edit 1").unwrap_err();
    assert_eq!(err, Error::Parse(ParseError::NoFieldSpecified));
    assert_eq!(deck.cards()[0], card("2+2", "4"));
}

#[test]
fn scenario_edit_into_another_cards_identity_is_a_duplicate() {
    let mut deck = Deck::with_cards(vec![
        tagged("hola", "hello", &["spanish"]),
        tagged("adios", "goodbye", &["spanish"]),
    ]);

    // Tags differ, but duplicate identity is question + answer only.
    let err = logic::execute(&mut deck, "edit 1 q/adios a/goodbye").unwrap_err();
    assert_eq!(err, Error::Command(CommandError::DuplicateCard));
    assert_eq!(deck.cards()[0].question, "hola");
}

#[test]
fn editing_a_card_to_equal_itself_is_allowed() {
    let mut deck = Deck::with_cards(vec![tagged("hola", "hello", &["spanish"])]);
    let result = logic::execute(&mut deck, "edit 1 t/greetings").unwrap();
    assert!(result.feedback.starts_with("Edited Card: hola"));
    assert_eq!(deck.cards()[0].tags.len(), 1);
    assert!(deck.cards()[0].tags.contains("greetings"));
}

#[test]
fn edit_replaces_in_place_preserving_order() {
    let mut deck = Deck::with_cards(vec![card("a", "1"), card("b", "2"), card("c", "3")]);
    logic::execute(&mut deck, "edit 2 q/bee").unwrap();
    let questions: Vec<&str> = deck.cards().iter().map(|c| c.question.as_str()).collect();
    assert_eq!(questions, vec!["a", "bee", "c"]);
}

#[test]
fn solve_boundaries_on_the_displayed_list() {
    let mut deck = Deck::with_cards(vec![card("a", "1"), card("b", "2")]);

    let err = logic::execute(&mut deck, "solve 0").unwrap_err();
    assert_eq!(err, Error::Command(CommandError::InvalidDisplayedIndex));

    let err = logic::execute(&mut deck, "solve 3").unwrap_err();
    assert_eq!(err, Error::Command(CommandError::InvalidDisplayedIndex));

    // Last valid 1-based index succeeds.
    logic::execute(&mut deck, "solve 2").unwrap();
    assert_eq!(deck.cards()[1].solve_count, 1);
    assert_eq!(deck.cards()[0].solve_count, 0);
}

#[test]
fn scenario_solve_increments_counter_and_goal() {
    let seeded = card("2+2", "4").solved().solved().solved();
    let mut deck = Deck::with_cards(vec![seeded]);

    let result = logic::execute(&mut deck, "solve 1").unwrap();

    assert_eq!(deck.cards()[0].solve_count, 4);
    assert_eq!(deck.goal().solved(), 1);
    assert!(result.feedback.contains("Solve count: 4"));
    // The displayed view reflects the replacement card.
    assert_eq!(deck.displayed_cards()[0].solve_count, 4);
}

#[test]
fn solve_is_deliberately_not_idempotent() {
    let mut deck = Deck::with_cards(vec![card("2+2", "4")]);
    logic::execute(&mut deck, "solve 1").unwrap();
    logic::execute(&mut deck, "solve 1").unwrap();
    assert_eq!(deck.cards()[0].solve_count, 2);
    assert_eq!(deck.goal().solved(), 2);
}

#[test]
fn solve_resolves_indexes_against_the_filtered_view() {
    let mut deck = Deck::with_cards(vec![card("plain", "x"), tagged("2+2", "4", &["math"])]);

    logic::execute(&mut deck, "list t/math").unwrap();
    assert_eq!(deck.displayed_len(), 1);

    // Displayed index 1 is the second card of the full collection.
    logic::execute(&mut deck, "solve 1").unwrap();
    assert_eq!(deck.cards()[0].solve_count, 0);
    assert_eq!(deck.cards()[1].solve_count, 1);
}

#[test]
fn list_is_idempotent() {
    let mut deck = Deck::with_cards(vec![card("a", "1"), card("b", "2")]);
    logic::execute(&mut deck, "list").unwrap();
    let first: Vec<String> = deck
        .displayed_cards()
        .iter()
        .map(|c| c.question.clone())
        .collect();
    logic::execute(&mut deck, "list").unwrap();
    let second: Vec<String> = deck
        .displayed_cards()
        .iter()
        .map(|c| c.question.clone())
        .collect();
    assert_eq!(first, second);
}

#[test]
fn list_messages_distinguish_filtered_from_show_all() {
    let mut deck = Deck::with_cards(vec![tagged("a", "1", &["x"]), card("b", "2")]);

    let result = logic::execute(&mut deck, "list").unwrap();
    assert_eq!(result.feedback, "Listed all cards");

    let result = logic::execute(&mut deck, "list t/x").unwrap();
    assert_eq!(result.feedback, "1 cards listed!");
    assert_eq!(deck.displayed_len(), 1);
}

#[test]
fn list_with_empty_result_is_still_a_success() {
    let mut deck = Deck::with_cards(vec![card("a", "1")]);
    let result = logic::execute(&mut deck, "list t/nomatch").unwrap();
    assert_eq!(result.feedback, "0 cards listed!");
    assert_eq!(deck.displayed_len(), 0);
}

#[test]
fn add_appends_and_rejects_duplicates() {
    let mut deck = Deck::with_cards(vec![card("a", "1")]);

    let result = logic::execute(&mut deck, "add q/b a/2").unwrap();
    assert!(result.feedback.starts_with("New card added: b"));
    assert_eq!(deck.cards().len(), 2);
    assert_eq!(deck.cards()[1].question, "b");

    // Same question + answer, different tags: still a duplicate.
    let err = logic::execute(&mut deck, "add q/a a/1 t/other").unwrap_err();
    assert_eq!(err, Error::Command(CommandError::DuplicateCard));
    assert_eq!(deck.cards().len(), 2);
}

#[test]
fn delete_uses_the_displayed_index() {
    let mut deck = Deck::with_cards(vec![card("plain", "x"), tagged("2+2", "4", &["math"])]);
    logic::execute(&mut deck, "list t/math").unwrap();

    let result = logic::execute(&mut deck, "delete 1").unwrap();
    assert!(result.feedback.starts_with("Deleted Card: 2+2"));
    assert_eq!(deck.cards().len(), 1);
    assert_eq!(deck.cards()[0].question, "plain");
}

#[test]
fn set_difficulty_stamps_practice_dates() {
    let mut deck = Deck::with_cards(vec![card("a", "1")]);
    let result = logic::execute(&mut deck, "set 1 d/easy").unwrap();
    assert_eq!(result.feedback, "Set Card 1 to difficulty easy");

    let today = Utc::now().date_naive();
    let updated = &deck.cards()[0];
    assert_eq!(updated.difficulty, Difficulty::Easy);
    assert_eq!(updated.last_practice_date, Some(today));
    assert_eq!(
        updated.next_practice_date,
        today.checked_add_days(Days::new(4))
    );
}

#[test]
fn practise_and_hint_are_read_only() {
    let with_hint = Card::try_new(
        "capital of France?",
        "Paris",
        BTreeSet::new(),
        Some("starts with P".to_string()),
    )
    .unwrap();
    let mut deck = Deck::with_cards(vec![with_hint.clone(), card("b", "2")]);

    let result = logic::execute(&mut deck, "practise").unwrap();
    assert_eq!(result.feedback, "Practising Card 1: capital of France?");

    let result = logic::execute(&mut deck, "hint 1").unwrap();
    assert_eq!(result.feedback, "Hint for Card 1: starts with P");

    let result = logic::execute(&mut deck, "hint 2").unwrap();
    assert_eq!(result.feedback, "Card 2 has no hint");

    assert_eq!(deck.cards()[0], with_hint);
    assert_eq!(deck.goal().solved(), 0);
}

#[test]
fn practise_on_an_empty_deck_is_out_of_range() {
    let mut deck = Deck::new();
    let err = logic::execute(&mut deck, "practise").unwrap_err();
    assert_eq!(err, Error::Command(CommandError::InvalidDisplayedIndex));
}

#[test]
fn clear_empties_the_deck() {
    let mut deck = Deck::with_cards(vec![card("a", "1"), card("b", "2")]);
    let result = logic::execute(&mut deck, "clear").unwrap();
    assert_eq!(result.feedback, "Deck has been cleared!");
    assert!(deck.cards().is_empty());
    assert_eq!(deck.displayed_len(), 0);
}

#[test]
fn help_and_exit_set_their_flags() {
    let mut deck = Deck::new();

    let result = logic::execute(&mut deck, "help").unwrap();
    assert!(result.show_help);
    assert!(!result.exit);
    assert!(result.feedback.contains("add: "));
    assert!(result.feedback.contains("solve: "));

    let result = logic::execute(&mut deck, "exit").unwrap();
    assert!(result.exit);
}

#[test]
fn failed_commands_leave_the_model_untouched() {
    let mut deck = Deck::with_cards(vec![card("a", "1"), card("b", "2")]);
    logic::execute(&mut deck, "list t/nomatch").unwrap();

    // Out of range against the (empty) displayed view.
    let err = logic::execute(&mut deck, "edit 1 q/z").unwrap_err();
    assert_eq!(err, Error::Command(CommandError::InvalidDisplayedIndex));

    logic::execute(&mut deck, "list").unwrap();
    let questions: Vec<&str> = deck.cards().iter().map(|c| c.question.as_str()).collect();
    assert_eq!(questions, vec!["a", "b"]);
    assert_eq!(deck.goal().solved(), 0);
}
