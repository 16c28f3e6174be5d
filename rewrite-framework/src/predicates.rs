//! Byte classes and boundary guards.
//!
//! The byte classes are plain functions; the guards are evaluated against a
//! [`RewriteContext`] by peeking one byte past the speculative cursor and
//! never move it.

use crate::context::RewriteContext;
use common_framework::Result;

/// Letters and apostrophe.
pub fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'\''
}

/// Bytes that may follow `<` to open a markup tag.
pub fn is_tag_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'/'
}

/// Bytes that may follow `&` to open an entity escape.
pub fn is_entity_start(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'#'
}

/// Bytes that end a command sequence.
pub fn is_command_end(byte: u8) -> bool {
    byte == b' ' || byte == b'\n'
}

/// A condition checked after a literal matched, before it is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// The match is followed by a non-word byte or end of stream.
    EndOfWord,
    /// The match is followed by another word byte.
    NotEndOfWord,
    /// The match is followed by a newline.
    EndOfLine,
    /// No `%` has been seen since the last newline.
    MarkEnabled,
}

impl Guard {
    pub fn holds<Ctx: RewriteContext>(self, ctx: &mut Ctx) -> Result<bool> {
        match self {
            Guard::EndOfWord => ctx.at_end_of_word(),
            Guard::NotEndOfWord => Ok(!ctx.at_end_of_word()?),
            Guard::EndOfLine => ctx.at_end_of_line(),
            Guard::MarkEnabled => Ok(!ctx.state().suppress_mark),
        }
    }

    /// Bytes this guard peeks past the end of the match.
    pub fn lookahead(self) -> usize {
        match self {
            Guard::MarkEnabled => 0,
            _ => 1,
        }
    }
}
