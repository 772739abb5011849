use crate::errors::CommandError;

/// A 1-based position in the currently displayed card list.
///
/// Parsing accepts any unsigned integer; `resolve` rejects 0 and anything
/// past the end of the displayed view, so out-of-range input always surfaces
/// as the same displayed-index error regardless of which bound it violated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Index(u32);

impl Index {
    pub fn from_one_based(n: u32) -> Self {
        Index(n)
    }

    pub fn one_based(&self) -> u32 {
        self.0
    }

    /// Converts to a zero-based offset into a displayed list of
    /// `displayed_len` cards.
    pub fn resolve(&self, displayed_len: usize) -> Result<usize, CommandError> {
        if self.0 == 0 || self.0 as usize > displayed_len {
            return Err(CommandError::InvalidDisplayedIndex);
        }
        Ok(self.0 as usize - 1)
    }
}
