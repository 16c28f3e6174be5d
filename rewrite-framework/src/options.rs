use crate::buffer::PushbackBuffer;

/// Settings for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriterOptions {
    /// Maximum number of unread bytes the lookahead buffer holds.
    ///
    /// Must exceed the longest lookahead of any rule in use.
    pub capacity: usize,
}

impl RewriterOptions {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }
}

impl Default for RewriterOptions {
    fn default() -> Self {
        Self {
            capacity: PushbackBuffer::<std::io::Empty>::DEFAULT_CAPACITY,
        }
    }
}
