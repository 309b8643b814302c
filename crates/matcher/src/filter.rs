//! Single-column fuzzy filtering.
//!
//! Every text search (description, category, brand) and the keyword stage of
//! need queries go through [`fuzzy_filter`]; only the column differs.

use std::fmt;

use catalog::ProductRecord;
use serde::{Deserialize, Serialize};

use crate::similarity::PartialMatcher;

/// Searchable text column of a [`ProductRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    Description,
    Manufacturer,
    Category,
}

impl Column {
    /// Borrow this column's value from `record`.
    pub fn value(self, record: &ProductRecord) -> &str {
        match self {
            Column::Description => &record.description,
            Column::Manufacturer => &record.manufacturer,
            Column::Category => &record.category,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Column::Description => "description",
            Column::Manufacturer => "manufacturer",
            Column::Category => "category",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keep the rows whose `column` fuzzily matches `text` at `threshold`.
/// Input order is preserved.
pub fn fuzzy_filter<'a, I>(rows: I, column: Column, text: &str, threshold: u8) -> Vec<&'a ProductRecord>
where
    I: IntoIterator<Item = &'a ProductRecord>,
{
    let matcher = PartialMatcher::new(text, threshold);
    rows.into_iter()
        .filter(|record| matcher.matches(column.value(record)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::similarity::DEFAULT_THRESHOLD;
    use catalog::Catalog;

    fn catalog() -> Catalog {
        Catalog::from_records([
            ProductRecord::new("1", "Tornillo 10mm acero", "Fixa", "Ferreteria", 40),
            ProductRecord::new("2", "Martillo 500g", "AcmeTools", "Herramientas", 3),
            ProductRecord::new("3", "Llave inglesa", "Acme", "Herramientas", 12),
            ProductRecord::new("4", "Pintura blanca 4l", "Colorex", "Pinturas", 0),
        ])
    }

    fn codes(rows: &[&ProductRecord]) -> Vec<String> {
        rows.iter().map(|r| r.code.clone()).collect()
    }

    #[test]
    fn filters_on_the_requested_column_only() {
        let catalog = catalog();
        let by_brand = fuzzy_filter(&catalog, Column::Manufacturer, "acme", DEFAULT_THRESHOLD);
        assert_eq!(codes(&by_brand), ["2", "3"]);

        let by_category =
            fuzzy_filter(&catalog, Column::Category, "herramienta", DEFAULT_THRESHOLD);
        assert_eq!(codes(&by_category), ["2", "3"]);

        let by_brand = fuzzy_filter(&catalog, Column::Manufacturer, "fixa", DEFAULT_THRESHOLD);
        assert_eq!(codes(&by_brand), ["1"]);
        let by_description = fuzzy_filter(&catalog, Column::Description, "fixa", DEFAULT_THRESHOLD);
        assert!(by_description.is_empty());
    }

    #[test]
    fn empty_text_keeps_every_row() {
        let catalog = catalog();
        let rows = fuzzy_filter(&catalog, Column::Category, "", DEFAULT_THRESHOLD);
        assert_eq!(rows.len(), catalog.len());
    }

    #[test]
    fn filters_compose_as_intersection() {
        let catalog = catalog();
        let first = fuzzy_filter(&catalog, Column::Category, "herramientas", DEFAULT_THRESHOLD);
        let both = fuzzy_filter(first, Column::Description, "llave", DEFAULT_THRESHOLD);
        assert_eq!(codes(&both), ["3"]);
    }

    #[test]
    fn column_names() {
        assert_eq!(Column::Manufacturer.to_string(), "manufacturer");
        let parsed: Column = serde_json::from_str("\"category\"").expect("lowercase name");
        assert_eq!(parsed, Column::Category);
    }
}
