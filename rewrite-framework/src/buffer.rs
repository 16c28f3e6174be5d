use common_framework::{Checkpoint, Error, Position, Result};
use std::io::{self, Bytes, Read};

/// A bounded pushback buffer giving rewindable lookahead over a byte stream.
///
/// Three cursors are kept as absolute stream offsets, with
/// `committed <= speculative <= fill` at all times:
///
/// - `committed`: everything before it has been consumed for good.
/// - `speculative`: where the next [`peek_next`](Self::peek_next) reads.
/// - `fill`: the furthest byte pulled from the underlying source.
///
/// Bytes in `committed..fill` live in a fixed ring of `capacity` slots and can
/// be replayed any number of times. Carriage returns are dropped as they are
/// pulled from the source, so no caller ever sees one.
pub struct PushbackBuffer<R> {
    source: Bytes<R>,
    slots: Box<[u8]>,
    committed: usize,
    speculative: usize,
    fill: usize,
    exhausted: bool,
    position: Position,
}

impl<R: Read> PushbackBuffer<R> {
    /// Lookahead capacity used when none is configured.
    pub const DEFAULT_CAPACITY: usize = 100;

    /// Creates a buffer with the default capacity.
    pub fn new(source: R) -> Self {
        Self::with_capacity(source, Self::DEFAULT_CAPACITY)
    }

    /// Creates a buffer holding at most `capacity` unread bytes.
    pub fn with_capacity(source: R, capacity: usize) -> Self {
        Self {
            source: source.bytes(),
            slots: vec![0; capacity.max(1)].into_boxed_slice(),
            committed: 0,
            speculative: 0,
            fill: 0,
            exhausted: false,
            position: Position::new(),
        }
    }

    /// Returns the number of ring slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the position of the committed cursor.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the committed offset.
    pub fn committed(&self) -> usize {
        self.committed
    }

    /// Returns the speculative offset.
    pub fn speculative(&self) -> usize {
        self.speculative
    }

    /// Returns the number of buffered bytes not yet committed.
    pub fn unread(&self) -> usize {
        self.fill - self.committed
    }

    /// Pulls the next non-CR byte from the source.
    fn fetch(&mut self) -> Result<Option<u8>> {
        if self.exhausted {
            return Ok(None);
        }
        loop {
            match self.source.next() {
                None => {
                    self.exhausted = true;
                    return Ok(None);
                }
                Some(Err(err)) if err.kind() == io::ErrorKind::Interrupted => continue,
                Some(Err(err)) => return Err(Error::Io(err)),
                Some(Ok(b'\r')) => continue,
                Some(Ok(byte)) => return Ok(Some(byte)),
            }
        }
    }

    /// Advances the speculative cursor by one byte and returns it.
    ///
    /// Returns `None` at end of stream; once the source is exhausted every
    /// further read past the buffered bytes returns `None` as well.
    pub fn peek_next(&mut self) -> Result<Option<u8>> {
        if self.speculative == self.fill {
            let Some(byte) = self.fetch()? else {
                return Ok(None);
            };
            if self.unread() >= self.capacity() {
                return Err(Error::BufferOverflow {
                    capacity: self.capacity(),
                    position: self.position,
                });
            }
            let slot = self.fill % self.capacity();
            self.slots[slot] = byte;
            self.fill += 1;
        }
        let byte = self.slots[self.speculative % self.capacity()];
        self.speculative += 1;
        Ok(Some(byte))
    }

    /// Returns the byte under the speculative cursor without moving it.
    pub fn peek(&mut self) -> Result<Option<u8>> {
        let checkpoint = self.checkpoint();
        let byte = self.peek_next()?;
        self.restore(checkpoint);
        Ok(byte)
    }

    /// Resets the speculative cursor to the committed one.
    pub fn rewind(&mut self) {
        self.speculative = self.committed;
    }

    /// Consumes everything read speculatively since the last commit.
    pub fn commit(&mut self) {
        for index in self.committed..self.speculative {
            self.position.advance(self.slots[index % self.slots.len()]);
        }
        self.committed = self.speculative;
    }

    /// Returns true when nothing is buffered and the source is exhausted.
    pub fn at_end(&mut self) -> Result<bool> {
        if self.committed < self.fill {
            return Ok(false);
        }
        let checkpoint = self.checkpoint();
        self.rewind();
        let byte = self.peek_next()?;
        self.restore(checkpoint);
        Ok(byte.is_none())
    }

    /// Saves the speculative cursor.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint::new(self.speculative)
    }

    /// Restores a speculative cursor saved since the last commit.
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        debug_assert!(checkpoint.index() >= self.committed && checkpoint.index() <= self.fill);
        self.speculative = checkpoint.index();
    }
}
