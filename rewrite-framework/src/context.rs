use crate::buffer::PushbackBuffer;
use crate::options::RewriterOptions;
use crate::predicates::{is_command_end, is_word_byte};
use crate::state::WordState;
use common_framework::{Checkpoint, Position, Result};
use std::io::{Read, Write};

/// Everything a rule can see and touch during one step.
///
/// Implementors supply the buffer, the driver state and the output sink; the
/// literal matcher, the boundary predicates and the echo helpers are provided
/// on top of those.
pub trait RewriteContext {
    type Source: Read;

    /// Returns a reference to the lookahead buffer.
    fn buffer(&self) -> &PushbackBuffer<Self::Source>;

    /// Returns a mutable reference to the lookahead buffer.
    fn buffer_mut(&mut self) -> &mut PushbackBuffer<Self::Source>;

    /// Returns the driver state.
    fn state(&self) -> &WordState;

    /// Returns the driver state mutably.
    fn state_mut(&mut self) -> &mut WordState;

    /// Writes bytes to the output.
    fn emit(&mut self, bytes: &[u8]) -> Result<()>;

    /// Flushes the output.
    fn flush(&mut self) -> Result<()>;

    /// Returns the committed position.
    fn position(&self) -> Position {
        self.buffer().position()
    }

    /// Reads the next byte speculatively.
    fn peek_next(&mut self) -> Result<Option<u8>> {
        self.buffer_mut().peek_next()
    }

    /// Returns the byte under the speculative cursor without advancing.
    fn lookahead(&mut self) -> Result<Option<u8>> {
        self.buffer_mut().peek()
    }

    /// Drops everything read since the last commit.
    fn rewind(&mut self) {
        self.buffer_mut().rewind();
    }

    /// Consumes everything read since the last commit.
    fn commit(&mut self) {
        self.buffer_mut().commit();
    }

    /// Saves the speculative cursor.
    fn checkpoint(&self) -> Checkpoint {
        self.buffer().checkpoint()
    }

    /// Restores the speculative cursor.
    fn restore(&mut self, checkpoint: Checkpoint) {
        self.buffer_mut().restore(checkpoint);
    }

    /// Tests whether `pattern` occurs at the committed position.
    ///
    /// On success the speculative cursor sits just past the match and nothing
    /// is committed yet. On failure the cursor is back at the committed
    /// position.
    fn try_match(&mut self, pattern: &[u8]) -> Result<bool> {
        self.rewind();
        for &expected in pattern {
            if self.peek_next()? != Some(expected) {
                self.rewind();
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// True when no input is buffered and the source is exhausted.
    fn at_end_of_stream(&mut self) -> Result<bool> {
        self.buffer_mut().at_end()
    }

    /// True when the next byte is not a word byte, or there is none.
    fn at_end_of_word(&mut self) -> Result<bool> {
        Ok(!self.lookahead()?.is_some_and(is_word_byte))
    }

    /// True when the next byte is a newline.
    fn at_end_of_line(&mut self) -> Result<bool> {
        Ok(self.lookahead()? == Some(b'\n'))
    }

    /// True when the next byte ends a command sequence.
    fn at_end_of_escaped_region(&mut self) -> Result<bool> {
        Ok(self.lookahead()?.is_some_and(is_command_end))
    }

    /// Commits the current match and writes its replacement.
    fn accept(&mut self, replacement: &[u8]) -> Result<()> {
        self.commit();
        self.emit(replacement)
    }

    /// Consumes one byte at the committed position and copies it out.
    fn echo(&mut self) -> Result<Option<u8>> {
        self.rewind();
        let byte = self.peek_next()?;
        if let Some(byte) = byte {
            self.commit();
            self.emit(&[byte])?;
        }
        Ok(byte)
    }

    /// Copies out bytes while `predicate` holds, returning how many.
    fn echo_while<F>(&mut self, mut predicate: F) -> Result<usize>
    where
        F: FnMut(u8) -> bool,
    {
        let mut count = 0;
        self.rewind();
        while let Some(byte) = self.peek_next()? {
            if !predicate(byte) {
                break;
            }
            self.commit();
            self.emit(&[byte])?;
            count += 1;
        }
        self.rewind();
        Ok(count)
    }
}

/// A context over any reader and writer.
pub struct DefaultContext<R, W> {
    buffer: PushbackBuffer<R>,
    sink: W,
    state: WordState,
    emitted: usize,
}

impl<R: Read, W: Write> DefaultContext<R, W> {
    pub fn new(source: R, sink: W) -> Self {
        Self::with_options(source, sink, &RewriterOptions::default())
    }

    pub fn with_options(source: R, sink: W, options: &RewriterOptions) -> Self {
        Self {
            buffer: PushbackBuffer::with_capacity(source, options.capacity),
            sink,
            state: WordState::new(),
            emitted: 0,
        }
    }

    /// Returns the number of bytes written so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Flushes and hands back the sink.
    pub fn finish(mut self) -> Result<W> {
        self.sink.flush()?;
        Ok(self.sink)
    }
}

impl<R: Read, W: Write> RewriteContext for DefaultContext<R, W> {
    type Source = R;

    fn buffer(&self) -> &PushbackBuffer<R> {
        &self.buffer
    }

    fn buffer_mut(&mut self) -> &mut PushbackBuffer<R> {
        &mut self.buffer
    }

    fn state(&self) -> &WordState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WordState {
        &mut self.state
    }

    fn emit(&mut self, bytes: &[u8]) -> Result<()> {
        self.sink.write_all(bytes)?;
        self.emitted += bytes.len();
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.sink.flush()?;
        Ok(())
    }
}
