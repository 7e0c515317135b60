//! Scalar escaping for XYML text
//!
//! A scalar is written plain unless a YAML reader could misread it, in which
//! case it is wrapped in double quotes. The trigger set is fixed: changing it
//! changes the bytes of every rendered document.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static NEEDS_QUOTING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#"""#,
        r"|:[[:space:]]",
        r"|[[:space:]]#",
        r"|\A[,\[\]{}#&*!|><%[:space:]@:'`]",
        r"|\A[?:-]\z",
        r"|:\z",
        r"|\n",
    ))
    .expect("quoting pattern is valid")
});

/// Whether `s` has to be quoted to survive a round trip through YAML.
pub fn needs_quoting(s: &str) -> bool {
    NEEDS_QUOTING.is_match(s)
}

/// Render a scalar for XYML text, quoting and escaping it when needed.
///
/// Inside quotes, backslash, newline, form feed and double quote are escaped.
pub fn render_scalar(s: &str) -> Cow<'_, str> {
    if !needs_quoting(s) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\u{0c}' => out.push_str("\\f"),
            '"' => out.push_str("\\\""),
            _ => out.push(c),
        }
    }
    out.push('"');
    Cow::Owned(out)
}
