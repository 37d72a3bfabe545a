//! Title quote normalization
//!
//! Rewrites `title: ""Value""` and `title: ''Value''` in frontmatter to
//! `title: "Value"`. Everything else in the document is left untouched.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Marker that must appear somewhere in the text before we look for titles.
const FRONTMATTER_DELIMITER: &str = "---";

/// Key whose value gets normalized.
const TITLE_KEY: &str = "title:";

/// `title:`, optional whitespace, then a run of 2+ double quotes or 2+ single
/// quotes around a lazily matched value, closed by a run of the same kind.
static MALFORMED_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex(r#"title:\s*(?:"{2,}(?P<dq>.*?)"{2,}|'{2,}(?P<sq>.*?)'{2,})"#)
});

fn compile_regex(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(compile_err) => panic!("hardcoded title pattern must compile: {compile_err}"),
    }
}

/// Cheap gate: only documents with a delimiter and a title key are scanned.
fn has_frontmatter_title(content: &str) -> bool {
    content.contains(FRONTMATTER_DELIMITER) && content.contains(TITLE_KEY)
}

/// Single substitution pass over the whole document.
fn replace_once(content: &str) -> Cow<'_, str> {
    MALFORMED_TITLE.replace_all(content, |caps: &regex::Captures<'_>| {
        let inner = caps
            .name("dq")
            .or_else(|| caps.name("sq"))
            .map(|m| m.as_str())
            .unwrap_or_default();
        format!("{TITLE_KEY} \"{inner}\"")
    })
}

/// Normalize malformed title quotes.
///
/// Returns the input borrowed when nothing changes. Substitution is repeated
/// until the text is stable, so the result is always a fixed point:
/// `normalize_title_quotes(normalize_title_quotes(x)) == normalize_title_quotes(x)`.
/// Each pass that changes anything makes the text strictly shorter.
pub fn normalize_title_quotes(content: &str) -> Cow<'_, str> {
    if !has_frontmatter_title(content) {
        return Cow::Borrowed(content);
    }

    let mut current = match replace_once(content) {
        Cow::Borrowed(_) => return Cow::Borrowed(content),
        Cow::Owned(fixed) => fixed,
    };

    loop {
        match replace_once(&current) {
            Cow::Borrowed(_) => break,
            Cow::Owned(next) => current = next,
        }
    }

    Cow::Owned(current)
}

/// Whether [`normalize_title_quotes`] would change `content`.
pub fn needs_fixing(content: &str) -> bool {
    matches!(normalize_title_quotes(content), Cow::Owned(_))
}
