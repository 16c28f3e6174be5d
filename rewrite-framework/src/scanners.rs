//! Verbatim region scanners.
//!
//! Each scanner fires on a short trigger, copies its region to the output
//! byte by byte as it commits, and leaves the driver outside any word. Reaching
//! end of stream inside a region simply ends the region.

use crate::context::RewriteContext;
use crate::predicates::{is_entity_start, is_tag_start};
use crate::rules::Tier;
use crate::traits::RewriteRule;
use common_framework::Result;

/// A backslash command, copied until a space, a newline or end of stream.
pub struct CommandScanner;

impl<Ctx> RewriteRule<Ctx> for CommandScanner
where
    Ctx: RewriteContext,
{
    fn try_apply(&mut self, ctx: &mut Ctx) -> Result<bool> {
        if !ctx.try_match(b"\\")? {
            return Ok(false);
        }
        loop {
            ctx.echo()?;
            if ctx.at_end_of_stream()? || ctx.at_end_of_escaped_region()? {
                break;
            }
        }
        ctx.state_mut().in_word = false;
        Ok(true)
    }

    fn priority(&self) -> i32 {
        Tier::Verbatim.priority()
    }

    fn quick_check(&self, first_byte: Option<u8>) -> Option<bool> {
        Some(first_byte == Some(b'\\'))
    }

    fn describe(&self) -> String {
        String::from("command")
    }
}

/// A markup tag, copied through its closing `>`.
///
/// A `>` inside a double-quoted attribute value does not close the tag.
pub struct TagScanner;

impl<Ctx> RewriteRule<Ctx> for TagScanner
where
    Ctx: RewriteContext,
{
    fn try_apply(&mut self, ctx: &mut Ctx) -> Result<bool> {
        if !ctx.try_match(b"<")? || !ctx.peek_next()?.is_some_and(is_tag_start) {
            return Ok(false);
        }
        let mut quoted = false;
        ctx.echo_while(|byte| {
            let inside = quoted || byte != b'>';
            if byte == b'"' {
                quoted = !quoted;
            }
            inside
        })?;
        ctx.echo()?;
        ctx.state_mut().in_word = false;
        Ok(true)
    }

    fn priority(&self) -> i32 {
        Tier::Verbatim.priority()
    }

    fn lookahead(&self) -> usize {
        2
    }

    fn quick_check(&self, first_byte: Option<u8>) -> Option<bool> {
        Some(first_byte == Some(b'<'))
    }

    fn describe(&self) -> String {
        String::from("tag")
    }
}

/// An entity escape such as `&amp` or `&#233`, copied up to the first
/// non-alphanumeric byte.
pub struct EntityScanner;

impl<Ctx> RewriteRule<Ctx> for EntityScanner
where
    Ctx: RewriteContext,
{
    fn try_apply(&mut self, ctx: &mut Ctx) -> Result<bool> {
        if !ctx.try_match(b"&")? || !ctx.peek_next()?.is_some_and(is_entity_start) {
            return Ok(false);
        }
        // `&` and the byte that qualified it.
        ctx.echo()?;
        ctx.echo()?;
        ctx.echo_while(|byte| byte.is_ascii_alphanumeric())?;
        ctx.state_mut().in_word = false;
        Ok(true)
    }

    fn priority(&self) -> i32 {
        Tier::Verbatim.priority()
    }

    fn lookahead(&self) -> usize {
        2
    }

    fn quick_check(&self, first_byte: Option<u8>) -> Option<bool> {
        Some(first_byte == Some(b'&'))
    }

    fn describe(&self) -> String {
        String::from("entity")
    }
}
