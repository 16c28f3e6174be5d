use crate::predicates::is_word_byte;

/// Driver state carried across steps of one conversion.
///
/// Owned by the rewrite context and discarded with it; nothing survives into
/// the next conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordState {
    /// Inside a word for the purposes of the word-internal tier.
    pub in_word: bool,
    /// The byte under the cursor starts a new word.
    ///
    /// Derived at the top of every step from the next byte and `in_word`;
    /// rules only read it.
    pub begin_word: bool,
    /// A `%` was seen on the current line, so the sentence mark is withheld.
    pub suppress_mark: bool,
    /// Occurrences of the alternating pattern seen in the current word.
    pub occurrences: u32,
}

impl WordState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recomputes `begin_word` for the next step.
    ///
    /// The per-word occurrence counter restarts whenever a new word begins.
    pub fn begin_step(&mut self, next: Option<u8>) {
        self.begin_word = next.is_some_and(is_word_byte) && !self.in_word;
        if self.begin_word {
            self.occurrences = 0;
        }
    }
}
