use std::collections::BTreeSet;

use crate::commands::{usage, Command, EditCardDescriptor};
use crate::errors::ParseError;
use crate::filters::Filter;
use crate::index::Index;
use crate::models::Card;

use super::tokenizer::{
    tokenize, PREFIX_ANSWER, PREFIX_DIFFICULTY, PREFIX_HINT, PREFIX_QUESTION, PREFIX_TAG,
};
use super::util;

pub(super) fn parse_add(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, &[PREFIX_QUESTION, PREFIX_ANSWER, PREFIX_TAG, PREFIX_HINT]);
    map.verify_no_duplicate_prefixes(&[PREFIX_QUESTION, PREFIX_ANSWER, PREFIX_HINT])?;
    if !map.preamble().is_empty() {
        return Err(ParseError::InvalidArguments { usage: usage::ADD });
    }
    let (Some(question), Some(answer)) = (map.value(PREFIX_QUESTION), map.value(PREFIX_ANSWER))
    else {
        return Err(ParseError::InvalidArguments { usage: usage::ADD });
    };
    let question = util::parse_question(question)?;
    let answer = util::parse_answer(answer)?;
    let tags = util::parse_tags(map.all_values(PREFIX_TAG))?;
    let hint = map.value(PREFIX_HINT).map(util::parse_hint).transpose()?;

    let card = Card::try_new(question, answer, tags, hint).map_err(ParseError::from)?;
    Ok(Command::Add { card })
}

pub(super) fn parse_edit(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, &[PREFIX_QUESTION, PREFIX_ANSWER, PREFIX_TAG, PREFIX_HINT]);
    map.verify_no_duplicate_prefixes(&[PREFIX_QUESTION, PREFIX_ANSWER, PREFIX_HINT])?;
    if map.preamble().is_empty() {
        return Err(ParseError::InvalidArguments { usage: usage::EDIT });
    }
    let index = util::parse_index(map.preamble(), usage::EDIT)?;

    let descriptor = EditCardDescriptor {
        question: map.value(PREFIX_QUESTION).map(util::parse_question).transpose()?,
        answer: map.value(PREFIX_ANSWER).map(util::parse_answer).transpose()?,
        tags: parse_tags_for_edit(map.all_values(PREFIX_TAG))?,
        hint: map.value(PREFIX_HINT).map(util::parse_hint).transpose()?,
    };
    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NoFieldSpecified);
    }
    Ok(Command::Edit { index, descriptor })
}

fn parse_tags_for_edit(values: Vec<&str>) -> Result<Option<BTreeSet<String>>, ParseError> {
    if values.is_empty() {
        return Ok(None);
    }
    util::parse_tags(values).map(Some)
}

pub(super) fn parse_delete(args: &str) -> Result<Command, ParseError> {
    let index = util::parse_index(args, usage::DELETE)?;
    Ok(Command::Delete { index })
}

pub(super) fn parse_list(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, &[PREFIX_QUESTION, PREFIX_TAG]);
    map.verify_no_duplicate_prefixes(&[PREFIX_QUESTION])?;

    let mut filter = Filter::show_all();
    if let Some(prefix) = map.value(PREFIX_QUESTION) {
        if prefix.is_empty() {
            return Err(ParseError::InvalidArguments { usage: usage::LIST });
        }
        filter = filter.with_question_prefix(prefix);
    }
    let tags = map.all_values(PREFIX_TAG);
    if !tags.is_empty() {
        filter = filter.with_tags(util::parse_tags(tags)?);
    }
    Ok(Command::List { filter })
}

pub(super) fn parse_practise(args: &str) -> Result<Command, ParseError> {
    if args.trim().is_empty() {
        return Ok(Command::Practise {
            index: Index::from_one_based(1),
        });
    }
    let index = util::parse_index(args, usage::PRACTISE)?;
    Ok(Command::Practise { index })
}

pub(super) fn parse_solve(args: &str) -> Result<Command, ParseError> {
    let index = util::parse_index(args, usage::SOLVE)?;
    Ok(Command::Solve { index })
}

pub(super) fn parse_set_difficulty(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, &[PREFIX_DIFFICULTY]);
    map.verify_no_duplicate_prefixes(&[PREFIX_DIFFICULTY])?;
    if map.preamble().is_empty() {
        return Err(ParseError::InvalidArguments { usage: usage::SET });
    }
    let index = util::parse_index(map.preamble(), usage::SET)?;
    let Some(value) = map.value(PREFIX_DIFFICULTY) else {
        return Err(ParseError::InvalidArguments { usage: usage::SET });
    };
    let difficulty = util::parse_difficulty(value)?;
    Ok(Command::SetDifficulty { index, difficulty })
}

pub(super) fn parse_hint(args: &str) -> Result<Command, ParseError> {
    let index = util::parse_index(args, usage::HINT)?;
    Ok(Command::Hint { index })
}
