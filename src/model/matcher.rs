//! Cell matchers used by equality checks and row search

use std::fmt;

use super::cell::{bool_to_string, float_to_string, Cell};
use super::coerce;

/// Either a literal expected value or a predicate over the raw cell value
pub enum Matcher<'a> {
    Literal(String),
    Predicate(Box<dyn Fn(&str) -> bool + 'a>),
}

impl<'a> Matcher<'a> {
    pub fn literal(value: impl Into<String>) -> Self {
        Matcher::Literal(value.into())
    }

    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&str) -> bool + 'a,
    {
        Matcher::Predicate(Box::new(f))
    }

    pub fn is_match(&self, raw: &str) -> bool {
        match self {
            Matcher::Literal(expected) => raw == expected,
            Matcher::Predicate(f) => f(raw),
        }
    }

    /// Diagnostic form: the literal itself, or `[function]` for a predicate
    pub fn describe(&self) -> String {
        match self {
            Matcher::Literal(expected) => expected.clone(),
            Matcher::Predicate(_) => "[function]".to_string(),
        }
    }
}

impl fmt::Debug for Matcher<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::Literal(expected) => f.debug_tuple("Literal").field(expected).finish(),
            Matcher::Predicate(_) => f.write_str("Predicate([function])"),
        }
    }
}

impl From<&str> for Matcher<'_> {
    fn from(s: &str) -> Self {
        Matcher::Literal(s.to_string())
    }
}

impl From<String> for Matcher<'_> {
    fn from(s: String) -> Self {
        Matcher::Literal(s)
    }
}

impl From<&String> for Matcher<'_> {
    fn from(s: &String) -> Self {
        Matcher::Literal(s.clone())
    }
}

impl From<&Cell> for Matcher<'_> {
    fn from(cell: &Cell) -> Self {
        Matcher::Literal(cell.value().to_string())
    }
}

impl From<i64> for Matcher<'_> {
    fn from(i: i64) -> Self {
        Matcher::Literal(i.to_string())
    }
}

impl From<i32> for Matcher<'_> {
    fn from(i: i32) -> Self {
        Matcher::Literal(i.to_string())
    }
}

impl From<usize> for Matcher<'_> {
    fn from(i: usize) -> Self {
        Matcher::Literal(i.to_string())
    }
}

impl From<f64> for Matcher<'_> {
    fn from(f: f64) -> Self {
        Matcher::Literal(float_to_string(f))
    }
}

impl From<bool> for Matcher<'_> {
    fn from(b: bool) -> Self {
        Matcher::Literal(bool_to_string(b))
    }
}

/// Options for building tolerant matchers from expected text
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MatchOptions {
    pub ignore_case: bool,
    pub ignore_whitespace: bool,
    pub numeric_tolerance: Option<f64>,
}

impl MatchOptions {
    pub fn new(ignore_case: bool, ignore_whitespace: bool, numeric_tolerance: Option<f64>) -> Self {
        Self {
            ignore_case,
            ignore_whitespace,
            numeric_tolerance,
        }
    }

    /// True when every comparison is an exact string compare
    pub fn is_exact(&self) -> bool {
        !self.ignore_case && !self.ignore_whitespace && self.numeric_tolerance.is_none()
    }

    /// Build a matcher for `expected`
    ///
    /// Exact options give a literal matcher, anything else a predicate.
    pub fn matcher(&self, expected: &str) -> Matcher<'static> {
        if self.is_exact() {
            return Matcher::literal(expected);
        }
        let options = *self;
        let expected = expected.to_string();
        Matcher::predicate(move |raw| options.equal(raw, &expected))
    }

    /// Compare a raw cell value with expected text
    ///
    /// Numeric tolerance reads both sides by their leading numeric prefix and
    /// only applies when both sides have one.
    pub fn equal(&self, raw: &str, expected: &str) -> bool {
        if let Some(tolerance) = self.numeric_tolerance {
            let numbers = (coerce::leading_float(raw), coerce::leading_float(expected));
            if let (Some(a), Some(b)) = numbers {
                if (a - b).abs() <= tolerance {
                    return true;
                }
            }
        }

        if self.ignore_case && raw.eq_ignore_ascii_case(expected) {
            return true;
        }

        if self.ignore_whitespace && raw.trim() == expected.trim() {
            return true;
        }

        raw == expected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_and_predicate() {
        assert!(Matcher::from("y").is_match("y"));
        assert!(!Matcher::from("y").is_match("Y"));
        assert!(Matcher::predicate(|v| v.len() == 2).is_match("ab"));
    }

    #[test]
    fn test_predicate_borrows_environment() {
        let wanted = String::from("3");
        let matcher = Matcher::predicate(|v| v == wanted);
        assert!(matcher.is_match("3"));
    }

    #[test]
    fn test_describe() {
        assert_eq!(Matcher::from("q").describe(), "q");
        assert_eq!(Matcher::from(7).describe(), "7");
        assert_eq!(Matcher::predicate(|_| true).describe(), "[function]");
        assert_eq!(
            format!("{:?}", Matcher::predicate(|_| true)),
            "Predicate([function])"
        );
    }

    #[test]
    fn test_exact_options_are_literal() {
        let matcher = MatchOptions::default().matcher("abc");
        assert!(matches!(matcher, Matcher::Literal(ref s) if s == "abc"));
    }

    #[test]
    fn test_case_insensitive() {
        let matcher = MatchOptions::new(true, false, None).matcher("Hello");
        assert!(matcher.is_match("hello"));
        assert!(!matcher.is_match("hell"));
    }

    #[test]
    fn test_ignore_whitespace() {
        let matcher = MatchOptions::new(false, true, None).matcher("x");
        assert!(matcher.is_match("  x "));
    }

    #[test]
    fn test_numeric_tolerance() {
        let options = MatchOptions::new(false, false, Some(0.01));
        assert!(options.equal("1.0", "1.005"));
        assert!(!options.equal("1.0", "1.02"));
        assert!(!options.equal("abc", "0"));
    }

    #[test]
    fn test_numeric_tolerance_ignores_unit_suffix() {
        let options = MatchOptions::new(false, false, Some(0.01));
        assert!(options.equal("1.0 kg", "1"));
        assert!(options.equal("2.499 EUR", "2.5"));
        assert!(!options.equal("1.5 kg", "1"));
        assert!(options.matcher("1").is_match("1.0 kg"));
    }

    #[test]
    fn test_non_finite_literal_matches_made_cell() {
        for f in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            let cell = Cell::make(f).unwrap();
            assert!(cell.equals(f), "{} did not match its own cell", f);
        }
        assert_eq!(Matcher::from(f64::INFINITY).describe(), "");
    }
}
