//! Name formatting for service object metadata.
//!
//! System names are what the host platform addresses a property or method by;
//! display names are what a person reads in the designer. Display names are
//! derived from system names unless the caller supplies one.

use regex::Regex;
use std::sync::LazyLock;

static SIMPLE_ALPHANUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9]*$").expect("alphanumeric pattern is valid")
});

/// Removes every space character from `name`.
///
/// Nothing else is normalized: case, punctuation, tabs and other whitespace
/// are kept. Names differing only by spaces map to the same system name.
pub fn make_system_name(name: &str) -> String {
    name.replace(' ', "")
}

/// Turns a camel-cased identifier into a space-separated phrase.
///
/// ```text
/// "CamelCasing"   → "Camel Casing"
/// "This isSparta" → "This is Sparta"
/// "ABCWord"       → "ABC Word"
/// "SiteURL"       → "Site URL"
/// ```
///
/// Characters are never dropped, reordered or re-cased; only spaces are
/// inserted. An uppercase letter gets a space in front of it when it starts a
/// lowercase word, or when it follows a non-uppercase character other than the
/// very first one. Runs of capitals stay together. A two-character name such as
/// `"aB"` is left untouched.
pub fn humanize(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let Some((&first, _)) = chars.split_first() else {
        return String::new();
    };

    let mut text = String::with_capacity(name.len() + 10);
    text.push(first);

    for i in 1..chars.len() {
        let current = chars[i];
        let previous = chars[i - 1];

        if current.is_uppercase() && previous != ' ' {
            // Start of a word such as "Casing" in "CamelCasing"
            if chars.get(i + 1).is_some_and(|next| !next.is_uppercase()) {
                text.push(' ');
            }
            // Lowercase-to-uppercase transition, e.g. entering an acronym
            if i > 1 && !previous.is_uppercase() && !text.ends_with(' ') {
                text.push(' ');
            }
        }

        text.push(current);
    }

    text
}

/// True when `text` consists only of ASCII letters and digits. The empty
/// string qualifies.
///
/// Zone and identifier names are checked with this before they are used as
/// system names.
pub fn is_simple_alphanumeric(text: &str) -> bool {
    SIMPLE_ALPHANUMERIC.is_match(text)
}
