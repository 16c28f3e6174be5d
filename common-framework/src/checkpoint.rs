/// A saved speculative cursor.
///
/// Predicates take a checkpoint before peeking ahead and restore it afterwards,
/// so a lookahead never moves the cursor it was asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    /// Absolute byte index into the stream (not a ring slot).
    index: usize,
}

impl Checkpoint {
    /// Creates a checkpoint at the given absolute stream index.
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    /// Returns the absolute stream index stored in this checkpoint.
    pub fn index(&self) -> usize {
        self.index
    }
}
