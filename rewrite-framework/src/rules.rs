use crate::context::RewriteContext;
use crate::predicates::Guard;
use crate::state::WordState;
use crate::traits::RewriteRule;
use common_framework::Result;

/// Priority group of a rule. Groups are tried from top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Regions copied through unmodified.
    Verbatim,
    /// Comment markers and line ends, checked regardless of word state.
    LineControl,
    /// Only at the first byte of a word.
    WordInitial,
    /// Only inside a word.
    WordInternal,
    /// Regardless of word state.
    Anywhere,
}

impl Tier {
    pub fn priority(self) -> i32 {
        match self {
            Tier::Verbatim => 50,
            Tier::LineControl => 40,
            Tier::WordInitial => 30,
            Tier::WordInternal => 20,
            Tier::Anywhere => 10,
        }
    }

    /// Whether rules of this tier are considered in the given state.
    pub fn admits(self, state: &WordState) -> bool {
        match self {
            Tier::WordInitial => state.begin_word,
            Tier::WordInternal => state.in_word,
            Tier::Verbatim | Tier::LineControl | Tier::Anywhere => true,
        }
    }
}

/// What a literal rule writes in place of its match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Replacement {
    /// The matched text itself.
    Echo,
    /// A fixed string.
    Fixed(&'static str),
    /// `first` on the first occurrence within a word, `repeat` afterwards.
    Alternating {
        first: &'static str,
        repeat: &'static str,
    },
}

/// Effect of an applied rule on word membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordEffect {
    Enter,
    Leave,
    Keep,
}

/// Effect of an applied rule on the sentence mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkEffect {
    Suppress,
    Restore,
    Keep,
}

/// A fixed pattern with a fixed replacement and fixed state effects.
#[derive(Debug, Clone)]
pub struct LiteralRule {
    tier: Tier,
    pattern: &'static str,
    replacement: Replacement,
    guards: Vec<Guard>,
    word: WordEffect,
    mark: MarkEffect,
}

impl LiteralRule {
    /// Creates a rule replacing `pattern` with `replacement` that enters the word.
    pub fn new(tier: Tier, pattern: &'static str, replacement: &'static str) -> Self {
        Self::with_replacement(tier, pattern, Replacement::Fixed(replacement))
    }

    pub fn with_replacement(tier: Tier, pattern: &'static str, replacement: Replacement) -> Self {
        Self {
            tier,
            pattern,
            replacement,
            guards: Vec::new(),
            word: WordEffect::Enter,
            mark: MarkEffect::Keep,
        }
    }

    /// Creates a rule that copies `pattern` through and only changes state.
    pub fn echo(tier: Tier, pattern: &'static str) -> Self {
        Self::with_replacement(tier, pattern, Replacement::Echo)
    }

    /// Adds a guard that must hold after the match.
    pub fn when(mut self, guard: Guard) -> Self {
        self.guards.push(guard);
        self
    }

    pub fn word_effect(mut self, effect: WordEffect) -> Self {
        self.word = effect;
        self
    }

    pub fn mark_effect(mut self, effect: MarkEffect) -> Self {
        self.mark = effect;
        self
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    fn replacement_for(&self, state: &mut WordState) -> &'static str {
        match self.replacement {
            Replacement::Echo => self.pattern,
            Replacement::Fixed(text) => text,
            Replacement::Alternating { first, repeat } => {
                state.occurrences += 1;
                if state.occurrences == 1 {
                    first
                } else {
                    repeat
                }
            }
        }
    }
}

impl<Ctx> RewriteRule<Ctx> for LiteralRule
where
    Ctx: RewriteContext,
{
    fn try_apply(&mut self, ctx: &mut Ctx) -> Result<bool> {
        if !self.tier.admits(ctx.state()) || !ctx.try_match(self.pattern.as_bytes())? {
            return Ok(false);
        }
        for guard in &self.guards {
            if !guard.holds(ctx)? {
                return Ok(false);
            }
        }

        let text = self.replacement_for(ctx.state_mut());
        ctx.accept(text.as_bytes())?;

        let state = ctx.state_mut();
        match self.word {
            WordEffect::Enter => state.in_word = true,
            WordEffect::Leave => state.in_word = false,
            WordEffect::Keep => {}
        }
        match self.mark {
            MarkEffect::Suppress => state.suppress_mark = true,
            MarkEffect::Restore => state.suppress_mark = false,
            MarkEffect::Keep => {}
        }
        Ok(true)
    }

    fn priority(&self) -> i32 {
        self.tier.priority()
    }

    fn lookahead(&self) -> usize {
        self.pattern.len() + self.guards.iter().map(|g| g.lookahead()).max().unwrap_or(0)
    }

    fn quick_check(&self, first_byte: Option<u8>) -> Option<bool> {
        let expected = self.pattern.as_bytes().first()?;
        Some(first_byte == Some(*expected))
    }

    fn describe(&self) -> String {
        format!("{:?} {:?}", self.tier, self.pattern)
    }
}
