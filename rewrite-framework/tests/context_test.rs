use pretty_assertions::assert_eq;
use rewrite_framework::{DefaultContext, Guard, RewriteContext, RewriterOptions};

fn context(input: &str) -> DefaultContext<&[u8], Vec<u8>> {
    DefaultContext::new(input.as_bytes(), Vec::new())
}

fn output(ctx: DefaultContext<&[u8], Vec<u8>>) -> String {
    String::from_utf8(ctx.finish().unwrap()).unwrap()
}

#[test]
fn test_try_match_success_leaves_cursor_past_match() {
    let mut ctx = context("tion!");
    assert!(ctx.try_match(b"tion").unwrap());
    assert_eq!(ctx.buffer().speculative(), 4);
    assert_eq!(ctx.buffer().committed(), 0);
    assert_eq!(ctx.peek_next().unwrap(), Some(b'!'));
}

#[test]
fn test_try_match_failure_rolls_back() {
    let mut ctx = context("tiny");
    assert!(!ctx.try_match(b"tion").unwrap());
    assert_eq!(ctx.buffer().speculative(), 0);
    assert_eq!(ctx.peek_next().unwrap(), Some(b't'));
}

#[test]
fn test_try_match_restarts_from_committed() {
    let mut ctx = context("abc");
    ctx.peek_next().unwrap();
    ctx.peek_next().unwrap();
    assert!(ctx.try_match(b"ab").unwrap());
}

#[test]
fn test_try_match_is_case_sensitive() {
    let mut ctx = context("The");
    assert!(!ctx.try_match(b"the").unwrap());
    assert!(ctx.try_match(b"The").unwrap());
}

#[test]
fn test_try_match_at_end_of_stream() {
    let mut ctx = context("th");
    assert!(!ctx.try_match(b"the").unwrap());
    assert_eq!(ctx.buffer().speculative(), 0);
}

#[test]
fn test_try_match_empty_pattern() {
    let mut ctx = context("x");
    assert!(ctx.try_match(b"").unwrap());
    assert_eq!(ctx.buffer().speculative(), 0);
}

#[test]
fn test_at_end_of_word() {
    let mut ctx = context("th e");
    assert!(ctx.try_match(b"th").unwrap());
    assert!(ctx.at_end_of_word().unwrap());
    assert_eq!(ctx.buffer().speculative(), 2);

    let mut ctx = context("then");
    assert!(ctx.try_match(b"th").unwrap());
    assert!(!ctx.at_end_of_word().unwrap());

    let mut ctx = context("th");
    assert!(ctx.try_match(b"th").unwrap());
    assert!(ctx.at_end_of_word().unwrap());
}

#[test]
fn test_apostrophe_is_part_of_word() {
    let mut ctx = context("n't");
    assert!(ctx.try_match(b"n").unwrap());
    assert!(!ctx.at_end_of_word().unwrap());
}

#[test]
fn test_at_end_of_line() {
    let mut ctx = context(".\n");
    assert!(ctx.try_match(b".").unwrap());
    assert!(ctx.at_end_of_line().unwrap());

    let mut ctx = context(".\r\n");
    assert!(ctx.try_match(b".").unwrap());
    assert!(ctx.at_end_of_line().unwrap());

    let mut ctx = context(".");
    assert!(ctx.try_match(b".").unwrap());
    assert!(!ctx.at_end_of_line().unwrap());
}

#[test]
fn test_at_end_of_escaped_region() {
    for (input, expected) in [("a b", true), ("a\nb", true), ("ab", false), ("a", false)] {
        let mut ctx = context(input);
        assert!(ctx.try_match(b"a").unwrap());
        assert_eq!(ctx.at_end_of_escaped_region().unwrap(), expected, "{input:?}");
    }
}

#[test]
fn test_at_end_of_stream() {
    let mut ctx = context("a");
    assert!(!ctx.at_end_of_stream().unwrap());
    ctx.echo().unwrap();
    assert!(ctx.at_end_of_stream().unwrap());
}

#[test]
fn test_guards() {
    let mut ctx = context("ab");
    assert!(ctx.try_match(b"a").unwrap());
    assert!(Guard::NotEndOfWord.holds(&mut ctx).unwrap());
    assert!(!Guard::EndOfWord.holds(&mut ctx).unwrap());
    assert!(!Guard::EndOfLine.holds(&mut ctx).unwrap());
    assert!(Guard::MarkEnabled.holds(&mut ctx).unwrap());

    ctx.state_mut().suppress_mark = true;
    assert!(!Guard::MarkEnabled.holds(&mut ctx).unwrap());
    assert_eq!(ctx.buffer().speculative(), 1);
}

#[test]
fn test_accept_commits_and_writes() {
    let mut ctx = context("tion");
    assert!(ctx.try_match(b"tion").unwrap());
    ctx.accept(b"shun").unwrap();
    assert_eq!(ctx.buffer().committed(), 4);
    assert_eq!(ctx.emitted(), 4);
    assert_eq!(output(ctx), "shun");
}

#[test]
fn test_echo() {
    let mut ctx = context("ab");
    assert_eq!(ctx.echo().unwrap(), Some(b'a'));
    assert_eq!(ctx.echo().unwrap(), Some(b'b'));
    assert_eq!(ctx.echo().unwrap(), None);
    assert_eq!(output(ctx), "ab");
}

#[test]
fn test_echo_while() {
    let mut ctx = context("abc123 rest");
    assert_eq!(ctx.echo_while(|b| b.is_ascii_alphanumeric()).unwrap(), 6);
    assert_eq!(ctx.buffer().speculative(), ctx.buffer().committed());
    assert_eq!(ctx.lookahead().unwrap(), Some(b' '));
    assert_eq!(output(ctx), "abc123");
}

#[test]
fn test_with_options_capacity() {
    let ctx = DefaultContext::with_options("x".as_bytes(), Vec::new(), &RewriterOptions::with_capacity(8));
    assert_eq!(ctx.buffer().capacity(), 8);
}
