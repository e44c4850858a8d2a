//! Character-safe string clipping.
//!
//! Log lines and process output are clipped by character count, never by
//! byte offset, so multi-byte UTF-8 content is never split.

/// Keep at most `max` leading characters of `s`.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Keep at most `max` trailing characters of `s`.
pub fn tail_chars(s: &str, max: usize) -> &str {
    if max == 0 {
        return "";
    }
    match s.char_indices().rev().nth(max - 1) {
        Some((idx, _)) => &s[idx..],
        None => s,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn truncate_is_bounded_prefix(s in ".*", max in 0usize..300) {
            let out = truncate_chars(&s, max);
            prop_assert!(out.chars().count() <= max);
            prop_assert!(s.starts_with(out));
        }

        #[test]
        fn tail_is_bounded_suffix(s in ".*", max in 0usize..300) {
            let out = tail_chars(&s, max);
            prop_assert!(out.chars().count() <= max);
            prop_assert!(s.ends_with(out));
        }
    }
}
