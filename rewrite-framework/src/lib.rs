//! A single-pass streaming text rewriter.
//!
//! Input flows through a bounded [`PushbackBuffer`]; a [`Rewriter`] tries an
//! ordered table of [`RewriteRule`]s at every committed position and copies
//! the byte through when none applies.

pub mod buffer;
pub mod context;
pub mod options;
pub mod predicates;
pub mod rewriter;
pub mod rules;
pub mod scanners;
pub mod state;
pub mod traits;

pub use buffer::PushbackBuffer;
pub use common_framework::{Checkpoint, Error, Position, Result};
pub use context::{DefaultContext, RewriteContext};
pub use options::RewriterOptions;
pub use predicates::Guard;
pub use rewriter::{Rewriter, Step, Summary};
pub use rules::{LiteralRule, MarkEffect, Replacement, Tier, WordEffect};
pub use scanners::{CommandScanner, EntityScanner, TagScanner};
pub use state::WordState;
pub use traits::RewriteRule;
