use std::fmt;

use crate::errors::ParseError;

/// A flag marker such as `q/` or `t/`. Recognized only at a word boundary,
/// so slashes inside values never start a new field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Prefix(pub &'static str);

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_QUESTION: Prefix = Prefix("q/");
pub const PREFIX_ANSWER: Prefix = Prefix("a/");
pub const PREFIX_TAG: Prefix = Prefix("t/");
pub const PREFIX_HINT: Prefix = Prefix("h/");
pub const PREFIX_DIFFICULTY: Prefix = Prefix("d/");

/// The tokenized argument tail: the text before the first prefix
/// (preamble) and each prefixed value, in occurrence order.
#[derive(Debug, Default)]
pub struct ArgumentMultimap {
    preamble: String,
    values: Vec<(Prefix, String)>,
}

impl ArgumentMultimap {
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// The value of the last occurrence of `prefix`, if present.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .iter()
            .rev()
            .find(|(p, _)| *p == prefix)
            .map(|(_, v)| v.as_str())
    }

    /// Every value supplied for `prefix`, in occurrence order.
    pub fn all_values(&self, prefix: Prefix) -> Vec<&str> {
        self.values
            .iter()
            .filter(|(p, _)| *p == prefix)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Fails if any of the given single-valued prefixes occurs more than
    /// once, naming all offenders.
    pub fn verify_no_duplicate_prefixes(&self, prefixes: &[Prefix]) -> Result<(), ParseError> {
        let duplicated: Vec<&str> = prefixes
            .iter()
            .filter(|p| self.values.iter().filter(|(q, _)| q == *p).count() > 1)
            .map(|p| p.0)
            .collect();
        if duplicated.is_empty() {
            return Ok(());
        }
        Err(ParseError::invalid_value(format!(
            "Multiple values specified for the following single-valued field(s): {}",
            duplicated.join(" ")
        )))
    }
}

/// Splits an argument tail into a preamble and prefixed values. A prefix
/// only counts when it starts a whitespace-delimited word; each value runs
/// until the next prefix and is trimmed.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut hits: Vec<(usize, Prefix)> = Vec::new();
    for &prefix in prefixes {
        let mut from = 0;
        while let Some(found) = args[from..].find(prefix.0) {
            let at = from + found;
            if at == 0 || args[..at].ends_with(char::is_whitespace) {
                hits.push((at, prefix));
            }
            from = at + prefix.0.len();
        }
    }
    hits.sort_by_key(|&(at, _)| at);

    let preamble_end = hits.first().map(|&(at, _)| at).unwrap_or(args.len());
    let preamble = args[..preamble_end].trim().to_string();

    let mut values = Vec::with_capacity(hits.len());
    for (i, &(at, prefix)) in hits.iter().enumerate() {
        let start = at + prefix.0.len();
        let end = hits.get(i + 1).map(|&(next, _)| next).unwrap_or(args.len());
        values.push((prefix, args[start..end].trim().to_string()));
    }

    ArgumentMultimap { preamble, values }
}
