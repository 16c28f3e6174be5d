use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::Position;

/// Fatal conditions of a conversion run.
///
/// Malformed input is never an error: unterminated tags, escapes and command
/// sequences are echoed up to end of stream.
#[derive(Debug, Error)]
pub enum Error {
    /// The unread region of the lookahead buffer would exceed its capacity.
    ///
    /// A rule or predicate looked further ahead than the buffer was sized for.
    #[error("internal error: lookahead buffer of {capacity} bytes overflowed at {position}")]
    BufferOverflow { capacity: usize, position: Position },

    /// The named input could not be opened.
    #[error("can't open '{}': {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading the input or writing the output failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
