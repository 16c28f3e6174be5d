//! Mock Swedish, as spoken by a certain chef.
//!
//! English text goes in, "Swedish" comes out. Markup tags, entity escapes and
//! backslash commands are copied through untouched, and every sentence that
//! ends a line earns a "Bork Bork Bork!".

mod table;

pub use table::{rules, BORK};

use rewrite_framework::{Result, Rewriter, RewriterOptions, Summary};
use std::io::{Read, Write};

/// Converts everything `source` yields into `sink`.
pub fn encheferize<R: Read, W: Write>(source: R, sink: W) -> Result<Summary> {
    encheferize_with(source, sink, &RewriterOptions::default())
}

/// Like [`encheferize`], with explicit options.
pub fn encheferize_with<R: Read, W: Write>(
    source: R,
    sink: W,
    options: &RewriterOptions,
) -> Result<Summary> {
    let mut rewriter = Rewriter::from_io(source, sink, options, rules());
    rewriter.run()
}

/// Converts a string.
pub fn encheferize_str(input: &str) -> Result<String> {
    let mut output = Vec::with_capacity(input.len() + input.len() / 4);
    encheferize(input.as_bytes(), &mut output)?;
    Ok(String::from_utf8_lossy(&output).into_owned())
}
