use crate::context::{DefaultContext, RewriteContext};
use crate::options::RewriterOptions;
use crate::predicates::is_word_byte;
use crate::traits::RewriteRule;
use common_framework::Result;
use std::cmp::Reverse;
use std::io::{Read, Write};

/// Outcome of one driver step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The rule at this index of the sorted table was applied.
    Rewrote(usize),
    /// No rule applied; this byte was copied through.
    Passthrough(u8),
}

/// Totals for a finished conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Input bytes consumed, carriage returns excluded.
    pub consumed: usize,
    /// Rule applications, scanners included.
    pub rewrites: usize,
    /// Bytes copied through by the default case.
    pub passthrough: usize,
}

/// Drives a context through an ordered rule table until end of stream.
///
/// Each step applies exactly one action: the first rule, in priority order,
/// that accepts the input at the committed position, or else a one-byte
/// passthrough.
pub struct Rewriter<Ctx>
where
    Ctx: RewriteContext,
{
    context: Ctx,
    rules: Vec<Box<dyn RewriteRule<Ctx>>>,
    summary: Summary,
    halted: bool,
}

impl<Ctx> Rewriter<Ctx>
where
    Ctx: RewriteContext,
{
    /// Creates a new rewriter with the given context and rules.
    pub fn new(context: Ctx, rules: Vec<Box<dyn RewriteRule<Ctx>>>) -> Self {
        // Stable sort: table order decides within a priority.
        let mut sorted_rules = rules;
        sorted_rules.sort_by_key(|rule| Reverse(rule.priority()));

        let capacity = context.buffer().capacity();
        if let Some(rule) = sorted_rules.iter().find(|rule| rule.lookahead() >= capacity) {
            tracing::warn!(
                rule = %rule.describe(),
                lookahead = rule.lookahead(),
                capacity,
                "rule lookahead does not fit the buffer"
            );
        }

        Self {
            context,
            rules: sorted_rules,
            summary: Summary::default(),
            halted: false,
        }
    }

    /// Returns a reference to the context.
    pub fn context(&self) -> &Ctx {
        &self.context
    }

    /// Returns a mutable reference to the context.
    pub fn context_mut(&mut self) -> &mut Ctx {
        &mut self.context
    }

    /// Gives back the context.
    pub fn into_context(self) -> Ctx {
        self.context
    }

    /// Returns the totals so far.
    pub fn summary(&self) -> Summary {
        self.summary
    }

    /// Performs one driver step. Returns `None` at end of stream.
    ///
    /// The quick check skips rules that cannot match the next byte; every
    /// rule that is tried starts from, and on failure returns to, the
    /// committed position.
    pub fn step(&mut self) -> Result<Option<Step>> {
        if self.context.at_end_of_stream()? {
            return Ok(None);
        }

        self.context.rewind();
        let first_byte = self.context.lookahead()?;
        self.context.state_mut().begin_step(first_byte);
        let offset_before = self.context.buffer().committed();

        for (index, rule) in self.rules.iter_mut().enumerate() {
            if let Some(false) = rule.quick_check(first_byte) {
                continue;
            }
            self.context.rewind();
            if rule.try_apply(&mut self.context)? {
                debug_assert!(
                    self.context.buffer().committed() > offset_before,
                    "rule {} applied without consuming input",
                    rule.describe()
                );
                tracing::trace!(rule = %rule.describe(), at = %self.context.position(), "rewrite");
                self.summary.rewrites += 1;
                self.summary.consumed = self.context.buffer().committed();
                return Ok(Some(Step::Rewrote(index)));
            }
            self.context.rewind();
        }

        self.context.state_mut().in_word = first_byte.is_some_and(is_word_byte);
        let echoed = self.context.echo()?;
        self.summary.consumed = self.context.buffer().committed();
        match echoed {
            Some(byte) => {
                self.summary.passthrough += 1;
                Ok(Some(Step::Passthrough(byte)))
            }
            None => Ok(None),
        }
    }

    /// Runs to end of stream and flushes the output.
    ///
    /// The output is flushed even when the run fails, so everything produced
    /// before the error reaches the sink.
    pub fn run(&mut self) -> Result<Summary> {
        let outcome = self.by_ref().try_for_each(|step| step.map(|_| ()));
        let flushed = self.context.flush();
        outcome?;
        flushed?;

        tracing::debug!(
            consumed = self.summary.consumed,
            rewrites = self.summary.rewrites,
            passthrough = self.summary.passthrough,
            "conversion finished"
        );
        Ok(self.summary)
    }
}

impl<R, W> Rewriter<DefaultContext<R, W>>
where
    R: Read,
    W: Write,
{
    /// Creates a rewriter over a reader and writer with the given options.
    pub fn from_io(
        source: R,
        sink: W,
        options: &RewriterOptions,
        rules: Vec<Box<dyn RewriteRule<DefaultContext<R, W>>>>,
    ) -> Self {
        Self::new(DefaultContext::with_options(source, sink, options), rules)
    }
}

/// Each item is one driver step; iteration ends at end of stream or after
/// the first error.
impl<Ctx> Iterator for Rewriter<Ctx>
where
    Ctx: RewriteContext,
{
    type Item = Result<Step>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }
        match self.step() {
            Ok(Some(step)) => Some(Ok(step)),
            Ok(None) => {
                self.halted = true;
                None
            }
            Err(err) => {
                self.halted = true;
                Some(Err(err))
            }
        }
    }
}
