// src/domain/rewrite.rs
// The fixture-removal rule: a single global regex replacement over one file's text.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Matches a `$fixtures` member declaration anywhere in the text, together with
/// an immediately preceding `/** Fixtures ... */` doc block when there is one.
/// Surrounding indentation and the line break are taken along, so a declaration
/// alone on its line removes the whole line.
///
/// The list literal ends at the first `]`. A value such as `'a]b'` therefore
/// cuts the match short and the rest of the declaration stays in the file.
static FIXTURE_DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        // optional doc block: `/**`, `* Fixtures`, further `*` lines, `*/`
        r"(?:[ \t]*/\*\*[ \t]*\r?\n",
        r"[ \t]*\*[ \t]*Fixtures[ \t]*\r?\n",
        r"(?:[ \t]*\*(?:[^/\r\n][^\r\n]*)?\r?\n)*?",
        r"[ \t]*\*/[ \t]*\r?\n)?",
        // declaration
        r"[ \t]*\b(?:public|protected)[ \t]+(?:array[ \t]+)?\$fixtures[ \t]*=[ \t]*",
        r"\[[^\]]*\]",
        r"[ \t]*;?[ \t]*(?:\r?\n)?",
    ))
    .expect("valid fixture declaration regex")
});

/// Outcome of running the rule over one file's text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// The resulting text (equal to the input when nothing matched)
    pub text: String,
    /// Whether `text` differs from the input
    pub changed: bool,
    /// Number of declarations excised
    pub removed: usize,
}

/// Remove every fixture declaration from `source` in one pass.
///
/// Never fails; text that doesn't fit the pattern comes back unchanged.
pub fn strip_fixtures(source: &str) -> Rewrite {
    let mut removed = 0;
    let text = FIXTURE_DECLARATION
        .replace_all(source, |_: &Captures<'_>| {
            removed += 1;
            ""
        })
        .into_owned();

    let changed = text != source;

    Rewrite {
        text,
        changed,
        removed,
    }
}
