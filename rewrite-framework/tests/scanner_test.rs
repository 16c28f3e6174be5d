use pretty_assertions::assert_eq;
use rewrite_framework::{
    CommandScanner, DefaultContext, EntityScanner, RewriteContext, RewriteRule, TagScanner,
};

type Ctx<'a> = DefaultContext<&'a [u8], Vec<u8>>;

/// Applies one scanner at the start of `input`.
///
/// Returns whether it fired, what it wrote, and how far it consumed.
fn scan<S>(mut scanner: S, input: &str) -> (bool, String, usize)
where
    S: for<'a> RewriteRule<Ctx<'a>>,
{
    let mut ctx = DefaultContext::new(input.as_bytes(), Vec::new());
    ctx.state_mut().in_word = true;
    let fired = scanner.try_apply(&mut ctx).unwrap();
    if fired {
        assert!(!ctx.state().in_word);
    }
    let consumed = ctx.buffer().committed();
    let written = String::from_utf8(ctx.finish().unwrap()).unwrap();
    (fired, written, consumed)
}

#[test]
fn test_command_until_space() {
    let (fired, out, consumed) = scan(CommandScanner, "\\textbf{the} the");
    assert!(fired);
    assert_eq!(out, "\\textbf{the}");
    assert_eq!(consumed, 12);
}

#[test]
fn test_command_until_newline() {
    let (_, out, _) = scan(CommandScanner, "\\\\\nnext");
    assert_eq!(out, "\\\\");
}

#[test]
fn test_command_lone_backslash_before_space() {
    let (fired, out, _) = scan(CommandScanner, "\\ x");
    assert!(fired);
    assert_eq!(out, "\\");
}

#[test]
fn test_command_runs_to_end_of_stream() {
    let (_, out, consumed) = scan(CommandScanner, "\\emph{unterminated");
    assert_eq!(out, "\\emph{unterminated");
    assert_eq!(consumed, 18);
}

#[test]
fn test_command_needs_backslash() {
    let (fired, out, consumed) = scan(CommandScanner, "text");
    assert!(!fired);
    assert_eq!(out, "");
    assert_eq!(consumed, 0);
}

#[test]
fn test_tag_simple() {
    let (fired, out, _) = scan(TagScanner, "<b>bold</b>");
    assert!(fired);
    assert_eq!(out, "<b>");
}

#[test]
fn test_tag_closing() {
    let (_, out, _) = scan(TagScanner, "</a> tail");
    assert_eq!(out, "</a>");
}

#[test]
fn test_tag_quoted_gt_does_not_close() {
    let input = r#"<tag attr="a>b">rest"#;
    let (_, out, _) = scan(TagScanner, input);
    assert_eq!(out, r#"<tag attr="a>b">"#);
}

#[test]
fn test_tag_unterminated() {
    let (fired, out, _) = scan(TagScanner, r#"<a href="x>"#);
    assert!(fired);
    assert_eq!(out, r#"<a href="x>"#);
}

#[test]
fn test_tag_requires_letter_or_slash() {
    for input in ["< b>", "<3", "<", "<>"] {
        let (fired, out, consumed) = scan(TagScanner, input);
        assert!(!fired, "{input:?}");
        assert_eq!(out, "");
        assert_eq!(consumed, 0);
    }
}

#[test]
fn test_entity_named() {
    let (fired, out, consumed) = scan(EntityScanner, "&amp;the");
    assert!(fired);
    assert_eq!(out, "&amp");
    assert_eq!(consumed, 4);
}

#[test]
fn test_entity_numeric() {
    let (_, out, _) = scan(EntityScanner, "&#233;");
    assert_eq!(out, "&#233");
}

#[test]
fn test_entity_at_end_of_stream() {
    let (_, out, _) = scan(EntityScanner, "&n");
    assert_eq!(out, "&n");
}

#[test]
fn test_entity_requires_alnum_or_hash() {
    for input in ["& the", "&", "&;"] {
        let (fired, _, consumed) = scan(EntityScanner, input);
        assert!(!fired, "{input:?}");
        assert_eq!(consumed, 0);
    }
}
