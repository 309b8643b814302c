//! Product rows and the normalization applied to them at load time.

use serde::{Deserialize, Serialize};

/// One row of the product catalog.
///
/// Invariants held by every record that reaches a [`Catalog`](crate::Catalog):
/// text fields are never null (blank cells become `""`), `code` carries no
/// leading zeros, and `stock_quantity` is a plain non-negative integer.
/// Text case is preserved for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Article code with leading zeros removed.
    pub code: String,
    /// Free-text description, searchable.
    pub description: String,
    /// Manufacturer / brand, searchable.
    pub manufacturer: String,
    /// Category, searchable.
    pub category: String,
    /// Units summed across warehouses.
    pub stock_quantity: u64,
}

impl ProductRecord {
    /// Build a record, normalizing the code.
    pub fn new(
        code: impl AsRef<str>,
        description: impl Into<String>,
        manufacturer: impl Into<String>,
        category: impl Into<String>,
        stock_quantity: u64,
    ) -> Self {
        Self {
            code: normalize_code(code.as_ref()),
            description: description.into(),
            manufacturer: manufacturer.into(),
            category: category.into(),
            stock_quantity,
        }
    }

    /// Re-apply load-time normalization. Idempotent.
    pub fn normalized(mut self) -> Self {
        self.code = normalize_code(&self.code);
        self
    }
}

/// Normalize an article code: surrounding whitespace and leading `'0'`
/// characters are removed.
///
/// Whitespace and zeros are stripped together from the left so that the
/// result is a fixed point: `normalize_code(normalize_code(c)) == normalize_code(c)`.
///
/// ```rust
/// use catalog::normalize_code;
///
/// assert_eq!(normalize_code("0042"), "42");
/// assert_eq!(normalize_code(" 42 "), "42");
/// assert_eq!(normalize_code("000"), "");
/// ```
pub fn normalize_code(raw: &str) -> String {
    raw.trim_start_matches(|c: char| c == '0' || c.is_whitespace())
        .trim_end()
        .to_string()
}

/// Coerce a textual stock cell into a quantity.
///
/// Integers and numeric strings parse directly, fractional values are
/// truncated toward zero, and anything else (blank, text, negative, NaN)
/// becomes `0`. Returns `None` only to let callers count coercions; use
/// `unwrap_or(0)` for the quantity itself.
pub fn parse_stock(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return u64::try_from(value).ok();
    }
    trimmed.parse::<f64>().ok().and_then(stock_from_f64)
}

/// Truncate a float stock value, rejecting negatives and non-finite values.
pub(crate) fn stock_from_f64(value: f64) -> Option<u64> {
    if value.is_finite() && value >= 0.0 && value < u64::MAX as f64 {
        Some(value.trunc() as u64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_normalization_strips_leading_zeros() {
        assert_eq!(normalize_code("0042"), "42");
        assert_eq!(normalize_code("42"), "42");
        assert_eq!(normalize_code("0123"), "123");
        assert_eq!(normalize_code("1200"), "1200");
    }

    #[test]
    fn code_normalization_is_idempotent() {
        for raw in ["0042", "  007 ", "0 0 5", "A001", "", "000", "10-020"] {
            let once = normalize_code(raw);
            assert_eq!(normalize_code(&once), once, "not a fixed point for {raw:?}");
        }
    }

    #[test]
    fn code_normalization_keeps_alphanumeric_codes() {
        assert_eq!(normalize_code("00AB12"), "AB12");
        assert_eq!(normalize_code("A0012"), "A0012");
    }

    #[test]
    fn stock_parsing_coerces_garbage_to_none() {
        assert_eq!(parse_stock("15"), Some(15));
        assert_eq!(parse_stock(" 7 "), Some(7));
        assert_eq!(parse_stock("12.9"), Some(12));
        assert_eq!(parse_stock(""), None);
        assert_eq!(parse_stock("n/a"), None);
        assert_eq!(parse_stock("-3"), None);
        assert_eq!(parse_stock("NaN"), None);
    }

    #[test]
    fn record_constructor_normalizes_code() {
        let record = ProductRecord::new("000123", "Martillo 500g", "AcmeTools", "Herramientas", 20);
        assert_eq!(record.code, "123");
        assert_eq!(record.clone().normalized(), record);
    }
}
