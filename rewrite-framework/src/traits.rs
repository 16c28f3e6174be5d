use crate::context::RewriteContext;
use common_framework::Result;

/// A rewrite rule that operates on a context.
///
/// Rules are generic over the context, so the same rule works with any
/// reader/writer pair the context is built on.
pub trait RewriteRule<Ctx>
where
    Ctx: RewriteContext,
{
    /// Attempts to apply the rule at the committed position.
    ///
    /// Returns `Ok(true)` after committing the match and writing its output.
    /// Returns `Ok(false)` without committing anything; the rewriter rewinds
    /// whatever was read speculatively.
    fn try_apply(&mut self, ctx: &mut Ctx) -> Result<bool>;

    /// Returns the priority of this rule. Higher priority rules are tried first;
    /// rules of equal priority keep their table order.
    fn priority(&self) -> i32 {
        0
    }

    /// Bytes this rule may read past the committed position before deciding.
    fn lookahead(&self) -> usize {
        1
    }

    /// Quick check: returns whether this rule might match based on the first byte.
    ///
    /// - `Some(true)`  - This rule might match
    /// - `Some(false)` - This rule definitely won't match
    /// - `None`        - Unknown, need to try full match
    #[inline]
    fn quick_check(&self, first_byte: Option<u8>) -> Option<bool> {
        let _ = first_byte;
        None
    }

    /// Short label used in trace output.
    fn describe(&self) -> String {
        String::from("rule")
    }
}
