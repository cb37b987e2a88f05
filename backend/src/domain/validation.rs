//! Field validators used by the signup form.
//!
//! Every validator is a pure predicate: it never panics, never allocates
//! beyond what the comparison needs and always answers with a `bool`.

use std::sync::OnceLock;

use regex::Regex;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // One `@`, no whitespace, and at least one dot-separated label after
        // the domain's first label.
        let pattern = r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Return `true` when `value` has the shape of an email address.
///
/// # Examples
/// ```
/// use signup::domain::validation::is_email;
///
/// assert!(is_email("ada@example.com"));
/// assert!(!is_email("ada.example.com"));
/// ```
#[must_use]
pub fn is_email(value: &str) -> bool {
    email_regex().is_match(value)
}

/// Return `true` when `value` contains something other than whitespace.
#[must_use]
pub fn is_not_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Return `true` when `value` is at least `min` characters long.
///
/// Length is counted in Unicode scalar values, not bytes or UTF-16 code
/// units. A browser's `value.length` counts UTF-16 units, so `"😀😀😀"` is
/// six long in a client-side check but three here.
#[must_use]
pub fn has_min_length(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

/// Return `true` when both values are byte-for-byte identical.
#[must_use]
pub fn is_equal_to_other_value(value: &str, other: &str) -> bool {
    value == other
}
