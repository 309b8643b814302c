//! Numeric-unit token extraction.
//!
//! A token is a run of ASCII digits, optionally followed (after any amount
//! of whitespace) by a run of ASCII letters naming the unit: `"500 ml"`,
//! `"2kg"`, `"10"`. Everything else in the text is skipped, so malformed
//! input simply yields fewer tokens.

use serde::{Deserialize, Serialize};

/// A `(magnitude, unit)` pair such as `10mm`. The unit may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NumericToken {
    pub magnitude: u64,
    pub unit: String,
}

impl NumericToken {
    pub fn new(magnitude: u64, unit: impl Into<String>) -> Self {
        Self {
            magnitude,
            unit: unit.into(),
        }
    }

    /// `true` when this (offered) token meets a `requested` minimum: the
    /// magnitude is at least as large and the unit agrees. A requested token
    /// with no unit accepts any unit.
    pub fn satisfies(&self, requested: &NumericToken) -> bool {
        self.magnitude >= requested.magnitude
            && (requested.unit.is_empty() || requested.unit.eq_ignore_ascii_case(&self.unit))
    }
}

/// Extract every numeric-unit token from `text`, in order of appearance.
///
/// ```rust
/// use matcher::numeric::{extract, NumericToken};
///
/// assert_eq!(
///     extract("10 mm tornillo 5"),
///     vec![NumericToken::new(10, "mm"), NumericToken::new(5, "")],
/// );
/// ```
pub fn extract(text: &str) -> Vec<NumericToken> {
    let mut tokens = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find(|c: char| c.is_ascii_digit()) {
        let from_digits = &rest[start..];
        let digits_len = from_digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(from_digits.len());
        let (digits, tail) = from_digits.split_at(digits_len);

        let after_space = tail.trim_start();
        let unit_len = after_space
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(after_space.len());
        let (unit, after_unit) = after_space.split_at(unit_len);

        // Runs too long for u64 saturate; such a quantity exceeds any request.
        let magnitude = digits.parse::<u64>().unwrap_or(u64::MAX);
        tokens.push(NumericToken::new(magnitude, unit));

        rest = if unit.is_empty() { tail } else { after_unit };
    }

    tokens
}

/// Whitespace-separated words of `text` that contain no digit.
pub fn keywords(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
        .filter(|word| !word.chars().any(|c| c.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(m: u64, u: &str) -> NumericToken {
        NumericToken::new(m, u)
    }

    #[test]
    fn extracts_in_order_with_optional_space_before_unit() {
        assert_eq!(extract("10 mm tornillo 5"), vec![tok(10, "mm"), tok(5, "")]);
        assert_eq!(extract("bolsa 2kg y 500 ml"), vec![tok(2, "kg"), tok(500, "ml")]);
    }

    #[test]
    fn digits_glued_to_letters_on_both_sides() {
        assert_eq!(extract("m10x20cm"), vec![tok(10, "x"), tok(20, "cm")]);
        assert_eq!(extract("10mm5"), vec![tok(10, "mm"), tok(5, "")]);
    }

    #[test]
    fn punctuation_breaks_the_unit() {
        assert_eq!(extract("1/2\""), vec![tok(1, ""), tok(2, "")]);
        assert_eq!(extract("3.5mm"), vec![tok(3, ""), tok(5, "mm")]);
    }

    #[test]
    fn text_without_digits_yields_nothing() {
        assert!(extract("tornillo acero").is_empty());
        assert!(extract("").is_empty());
    }

    #[test]
    fn overflowing_magnitudes_saturate() {
        let text = "99999999999999999999999kg 4l";
        assert_eq!(extract(text), vec![tok(u64::MAX, "kg"), tok(4, "l")]);
        assert!(tok(u64::MAX, "kg").satisfies(&tok(1_000_000, "KG")));
    }

    #[test]
    fn unit_is_ascii_only() {
        assert_eq!(extract("5µm"), vec![tok(5, "")]);
    }

    #[test]
    fn keywords_drop_any_word_with_a_digit() {
        let words: Vec<_> = keywords("tornillo 10mm acero m8 inox").collect();
        assert_eq!(words, ["tornillo", "acero", "inox"]);
    }

    #[test]
    fn satisfies_compares_magnitude_and_unit() {
        let offered = tok(10, "mm");
        assert!(offered.satisfies(&tok(8, "mm")));
        assert!(offered.satisfies(&tok(10, "MM")));
        assert!(offered.satisfies(&tok(8, "")));
        assert!(!offered.satisfies(&tok(12, "mm")));
        assert!(!offered.satisfies(&tok(10, "cm")));
    }
}
