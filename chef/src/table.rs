use rewrite_framework::{
    CommandScanner, EntityScanner, Guard, LiteralRule, MarkEffect, Replacement, RewriteContext,
    RewriteRule, TagScanner, Tier, WordEffect,
};

/// Appended after a sentence that ends a line.
pub const BORK: &str = "Bork Bork Bork!";

const SENTENCE_END: &str = ".\nBork Bork Bork!";

const WORD_INITIAL: &[(&str, &str)] = &[
    ("e", "i"),
    ("E", "I"),
    ("o", "oo"),
    ("O", "Oo"),
    ("bork", "bork"),
    ("Bork", "Bork"),
];

const WORD_INTERNAL: &[(&str, &str)] = &[
    ("ew", "oo"),
    ("f", "ff"),
    ("ir", "ur"),
    ("ow", "oo"),
    ("o", "u"),
    ("u", "oo"),
    ("U", "Oo"),
    ("tion", "shun"),
];

/// Word-internal endings; each ends the word.
const WORD_FINAL: &[(&str, &str)] = &[("e", "e-a"), ("en", "ee"), ("th", "t")];

const ANYWHERE: &[(&str, &str)] = &[
    ("an", "un"),
    ("An", "Un"),
    ("au", "oo"),
    ("Au", "Oo"),
    ("the", "zee"),
    ("The", "Zee"),
    ("v", "f"),
    ("V", "F"),
    ("w", "v"),
    ("W", "V"),
];

/// Vowels rewritten only when the word goes on after them.
const INNER_VOWELS: &[(&str, &str)] = &[("a", "e"), ("A", "E")];

/// Builds the full table, in the order it must be tried.
///
/// Order within a tier matters: an earlier entry shadows any later entry that
/// matches at the same position.
pub fn rules<Ctx>() -> Vec<Box<dyn RewriteRule<Ctx>>>
where
    Ctx: RewriteContext,
{
    let mut table: Vec<Box<dyn RewriteRule<Ctx>>> = vec![
        Box::new(CommandScanner),
        Box::new(TagScanner),
        Box::new(EntityScanner),
        Box::new(
            LiteralRule::echo(Tier::LineControl, "%")
                .word_effect(WordEffect::Keep)
                .mark_effect(MarkEffect::Suppress),
        ),
        Box::new(
            LiteralRule::echo(Tier::LineControl, "\n")
                .word_effect(WordEffect::Leave)
                .mark_effect(MarkEffect::Restore),
        ),
    ];

    for &(pattern, replacement) in WORD_INITIAL {
        table.push(Box::new(LiteralRule::new(Tier::WordInitial, pattern, replacement)));
    }

    for &(pattern, replacement) in WORD_INTERNAL {
        table.push(Box::new(LiteralRule::new(Tier::WordInternal, pattern, replacement)));
    }
    table.push(Box::new(LiteralRule::with_replacement(
        Tier::WordInternal,
        "i",
        Replacement::Alternating {
            first: "ee",
            repeat: "i",
        },
    )));
    for &(pattern, replacement) in WORD_FINAL {
        table.push(Box::new(
            LiteralRule::new(Tier::WordInternal, pattern, replacement)
                .when(Guard::EndOfWord)
                .word_effect(WordEffect::Leave),
        ));
    }

    for &(pattern, replacement) in ANYWHERE {
        table.push(Box::new(LiteralRule::new(Tier::Anywhere, pattern, replacement)));
    }
    for &(pattern, replacement) in INNER_VOWELS {
        table.push(Box::new(
            LiteralRule::new(Tier::Anywhere, pattern, replacement).when(Guard::NotEndOfWord),
        ));
    }
    table.push(Box::new(
        LiteralRule::new(Tier::Anywhere, ".", SENTENCE_END)
            .when(Guard::EndOfLine)
            .when(Guard::MarkEnabled)
            .word_effect(WordEffect::Leave),
    ));

    table
}
