//! Completion-text parsing for generated questions.
//!
//! These functions extract a structured two-option pair from the free-form
//! text a generation service returns. They are pure domain logic — no I/O,
//! just text pattern matching.
//!
//! The service is asked for the labeled form `Alternativ 1: ... /
//! Alternativ 2: ...`, but completions also come back in the colloquial
//! form `antingen X eller Y`. Both are handled. A side that cannot be
//! recovered is substituted with a fixed placeholder, so the result is
//! always a displayable pair; parsing never fails.

/// Placeholder shown when the first option cannot be recovered.
pub const OPTION1_PLACEHOLDER: &str = "Alternativ 1";
/// Placeholder shown when the second option cannot be recovered.
pub const OPTION2_PLACEHOLDER: &str = "Alternativ 2";

/// Label marking the first option, matched case-insensitively.
const OPTION1_LABEL: &str = "alternativ 1:";
/// Label marking the second option, matched case-insensitively.
const OPTION2_LABEL: &str = "alternativ 2:";
/// Colloquial lead-in to the first option ("antingen hoppa eller ...").
const EITHER_PREFIX: &str = "antingen ";
/// Colloquial delimiter between the options, surrounded by spaces.
const OR_DELIMITER: &str = " eller ";

/// A parsed two-option pair. Both sides are non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternativePair {
    pub option1: String,
    pub option2: String,
}

/// Parse completion text into a two-option pair.
///
/// Splits on the first case-insensitive `Alternativ 2:` label, falling back
/// to the first standalone `eller`. The first segment is stripped of its
/// `Alternativ 1:` label or leading `antingen`; both segments are trimmed.
/// An empty side gets its placeholder. Text without any delimiter keeps its
/// stripped content as the first option and takes the placeholder for the
/// second.
pub fn parse_alternatives(raw: &str) -> AlternativePair {
    let (first, second) = split_on_delimiter(raw);
    AlternativePair {
        option1: normalize(strip_first_option_marker(first), OPTION1_PLACEHOLDER),
        option2: normalize(second.unwrap_or(""), OPTION2_PLACEHOLDER),
    }
}

/// Split on the second-option delimiter, preferring the explicit label.
fn split_on_delimiter(raw: &str) -> (&str, Option<&str>) {
    if let Some(at) = find_ignore_ascii_case(raw, OPTION2_LABEL) {
        return (&raw[..at], Some(&raw[at + OPTION2_LABEL.len()..]));
    }
    if let Some(at) = find_ignore_ascii_case(raw, OR_DELIMITER) {
        return (&raw[..at], Some(&raw[at + OR_DELIMITER.len()..]));
    }
    (raw, None)
}

/// Drop a leading `Alternativ 1:` label or `antingen` from the segment.
fn strip_first_option_marker(segment: &str) -> &str {
    let trimmed = segment.trim_start();
    if let Some(rest) = strip_prefix_ignore_ascii_case(trimmed, OPTION1_LABEL) {
        return rest;
    }
    if let Some(rest) = strip_prefix_ignore_ascii_case(trimmed, EITHER_PREFIX) {
        return rest;
    }
    trimmed
}

fn normalize(segment: &str, placeholder: &str) -> String {
    let trimmed = segment.trim();
    if trimmed.is_empty() {
        placeholder.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Byte offset of the first case-insensitive occurrence of an ASCII needle.
///
/// The needle must be pure ASCII; the returned offset is then always a char
/// boundary in the haystack.
fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}

fn strip_prefix_ignore_ascii_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    if s.len() >= prefix.len()
        && s.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
    {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}
