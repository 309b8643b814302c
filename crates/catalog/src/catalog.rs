use std::slice;

use crate::record::{normalize_code, ProductRecord};

/// Ordered, read-only collection of product records.
///
/// A catalog is built once and never mutated afterwards, so it can be
/// shared across threads behind an `Arc` without any locking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<ProductRecord>,
}

impl Catalog {
    /// Build a catalog from records, normalizing each one. Source order is kept.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = ProductRecord>,
    {
        Self {
            records: records.into_iter().map(ProductRecord::normalized).collect(),
        }
    }

    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    pub fn iter(&self) -> slice::Iter<'_, ProductRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Exact lookup on the normalized code. Duplicate codes are all
    /// returned, in catalog order. A code that normalizes to nothing
    /// (`""`, `"000"`) matches no record, not the rows with blank codes.
    pub fn find_by_code<'a>(&'a self, code: &str) -> impl Iterator<Item = &'a ProductRecord> + 'a {
        let wanted = normalize_code(code);
        self.records
            .iter()
            .filter(move |r| !wanted.is_empty() && r.code == wanted)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ProductRecord;
    type IntoIter = slice::Iter<'a, ProductRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::from_records([
            ProductRecord::new("0010", "Tornillo 10mm acero", "Fixa", "Ferreteria", 40),
            ProductRecord::new("20", "Martillo 500g", "AcmeTools", "Herramientas", 3),
            ProductRecord::new("010", "Tornillo 10mm inox", "Fixa", "Ferreteria", 8),
        ])
    }

    #[test]
    fn find_by_code_normalizes_the_query() {
        let catalog = sample();
        let hits: Vec<_> = catalog.find_by_code("0020").collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].description, "Martillo 500g");
    }

    #[test]
    fn duplicate_codes_keep_catalog_order() {
        let catalog = sample();
        let hits: Vec<_> = catalog.find_by_code("10").map(|r| r.description.as_str()).collect();
        assert_eq!(hits, ["Tornillo 10mm acero", "Tornillo 10mm inox"]);
    }

    #[test]
    fn unknown_code_yields_nothing() {
        assert_eq!(sample().find_by_code("999").count(), 0);
    }

    #[test]
    fn all_zero_code_does_not_hit_blank_codes() {
        let catalog = Catalog::from_records([
            ProductRecord::new("", "Sin codigo", "Acme", "Varios", 2),
            ProductRecord::new("000", "Codigo en ceros", "Acme", "Varios", 5),
        ]);
        assert_eq!(catalog.records()[1].code, "");
        assert_eq!(catalog.find_by_code("000").count(), 0);
        assert_eq!(catalog.find_by_code("").count(), 0);
    }
}
