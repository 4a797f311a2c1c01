//! Value formatting: the pure transformation from raw input text to the
//! sanitized value the widget stores and displays.
//!
//! Sanitization never truncates — the input path enforces the slot-count cap
//! separately, so the formatter stays a plain string-to-string function.

/// Sanitize raw input according to the widget's filter flags.
///
/// Uppercasing happens first, then the alphanumeric filter strips every
/// character outside `[a-zA-Z0-9]`. With both flags set the result only ever
/// contains `[A-Z0-9]`.
pub fn sanitize(raw: &str, uppercase: bool, alpha_numeric: bool) -> String {
    let upper;
    let text = if uppercase {
        upper = raw.to_uppercase();
        upper.as_str()
    } else {
        raw
    };

    if alpha_numeric {
        text.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercases_before_filtering() {
        assert_eq!(sanitize("abc", true, true), "ABC");
    }

    #[test]
    fn strips_non_alphanumeric() {
        assert_eq!(sanitize("a1!b2", true, true), "A1B2");
        assert_eq!(sanitize("--", true, true), "");
    }

    #[test]
    fn both_flags_produce_upper_alnum_only() {
        let out = sanitize("aZ3-é ✓9_x", true, true);
        assert!(out.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        assert_eq!(out, "AZ39X");
    }

    #[test]
    fn no_uppercase_keeps_case() {
        assert_eq!(sanitize("aB1", false, true), "aB1");
    }

    #[test]
    fn no_filter_keeps_symbols() {
        assert_eq!(sanitize("a-b", false, false), "a-b");
        assert_eq!(sanitize("a-b", true, false), "A-B");
    }

    #[test]
    fn empty_input() {
        assert_eq!(sanitize("", true, true), "");
    }
}
