//! Loose string-to-scalar coercion
//!
//! Cells hold text. Reading them as numbers takes the longest numeric prefix
//! after leading whitespace and falls back to zero when there is none.

/// Numeric prefix of `s` after leading whitespace, and whether that prefix
/// carries a fraction or exponent.
fn numeric_prefix(s: &str) -> (&str, bool) {
    let trimmed =
        s.trim_start_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c'));
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let int_digits = end - int_start;

    let mut is_float = false;
    let mut frac_digits = 0;
    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        frac_digits = frac_end - end - 1;
        if int_digits > 0 || frac_digits > 0 {
            end = frac_end;
            is_float = true;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return ("", false);
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
            is_float = true;
        }
    }

    (&trimmed[..end], is_float)
}

/// Parse the leading numeric prefix of `s` as a float, or `0.0`.
pub fn to_float(s: &str) -> f64 {
    leading_float(s).unwrap_or(0.0)
}

/// Like [`to_float`], but `None` when `s` has no numeric prefix at all.
pub fn leading_float(s: &str) -> Option<f64> {
    let (prefix, _) = numeric_prefix(s);
    if prefix.is_empty() {
        return None;
    }
    prefix.parse::<f64>().ok()
}

/// Parse the leading numeric prefix of `s` as an integer, or `0`.
///
/// Fractions are truncated toward zero and out-of-range values saturate.
pub fn to_int(s: &str) -> i64 {
    let (prefix, is_float) = numeric_prefix(s);
    if prefix.is_empty() {
        return 0;
    }
    if is_float {
        // `as` saturates and maps NaN to 0
        return prefix.parse::<f64>().map(|f| f as i64).unwrap_or(0);
    }
    match prefix.parse::<i64>() {
        Ok(i) => i,
        Err(_) if prefix.starts_with('-') => i64::MIN,
        Err(_) => i64::MAX,
    }
}

/// `""` and `"0"` are false; every other string is true.
pub fn to_bool(s: &str) -> bool {
    !(s.is_empty() || s == "0")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_float() {
        assert_eq!(to_float("3.3"), 3.3);
        assert_eq!(to_float("  -1.5abc"), -1.5);
        assert_eq!(to_float("1e3"), 1000.0);
        assert_eq!(to_float("2e"), 2.0);
        assert_eq!(to_float(".5"), 0.5);
        assert_eq!(to_float("7."), 7.0);
        assert_eq!(to_float("abc"), 0.0);
        assert_eq!(to_float(""), 0.0);
        assert_eq!(to_float("-"), 0.0);
        assert_eq!(to_float("."), 0.0);
    }

    #[test]
    fn test_leading_float() {
        assert_eq!(leading_float("1.0 kg"), Some(1.0));
        assert_eq!(leading_float(" -2e1x"), Some(-20.0));
        assert_eq!(leading_float("kg"), None);
        assert_eq!(leading_float(""), None);
    }

    #[test]
    fn test_to_int() {
        assert_eq!(to_int("42"), 42);
        assert_eq!(to_int("3.9"), 3);
        assert_eq!(to_int("-3.9"), -3);
        assert_eq!(to_int("12abc"), 12);
        assert_eq!(to_int("1e3"), 1000);
        assert_eq!(to_int("\t+8"), 8);
        assert_eq!(to_int("n"), 0);
        assert_eq!(to_int("99999999999999999999"), i64::MAX);
        assert_eq!(to_int("-99999999999999999999"), i64::MIN);
    }

    #[test]
    fn test_to_bool() {
        assert!(!to_bool(""));
        assert!(!to_bool("0"));
        assert!(to_bool("0.0"));
        assert!(to_bool("false"));
        assert!(to_bool(" "));
        assert!(to_bool("1"));
    }
}
