//! Mapping from catalog fields to source column headers.

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// Header names used to locate each required field in a tabular source.
///
/// Defaults follow the spreadsheet the catalog is exported from. Header
/// lookups compare trimmed names, so `" Descripcion "` in a source still
/// resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    #[serde(default = "default_code")]
    pub code: String,
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(default = "default_manufacturer")]
    pub manufacturer: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default = "default_stock_quantity")]
    pub stock_quantity: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            code: default_code(),
            description: default_description(),
            manufacturer: default_manufacturer(),
            category: default_category(),
            stock_quantity: default_stock_quantity(),
        }
    }
}

/// Positions of the required columns within a header row.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ColumnIndices {
    pub code: usize,
    pub description: usize,
    pub manufacturer: usize,
    pub category: usize,
    pub stock_quantity: usize,
}

impl ColumnMapping {
    /// Header names in field order: code, description, manufacturer,
    /// category, stock.
    pub fn required(&self) -> [&str; 5] {
        [
            self.code.as_str(),
            self.description.as_str(),
            self.manufacturer.as_str(),
            self.category.as_str(),
            self.stock_quantity.as_str(),
        ]
    }

    /// Resolve every required header against `headers`.
    pub(crate) fn resolve<'h, I>(&self, headers: I) -> Result<ColumnIndices, LoadError>
    where
        I: IntoIterator<Item = &'h str>,
    {
        let headers: Vec<&str> = headers.into_iter().map(str::trim).collect();
        let find = |wanted: &str| {
            headers
                .iter()
                .position(|h| *h == wanted.trim())
                .ok_or_else(|| LoadError::MissingColumn(wanted.to_string()))
        };

        Ok(ColumnIndices {
            code: find(&self.code)?,
            description: find(&self.description)?,
            manufacturer: find(&self.manufacturer)?,
            category: find(&self.category)?,
            stock_quantity: find(&self.stock_quantity)?,
        })
    }
}

fn default_code() -> String {
    "Codigo del Articulo".to_string()
}

fn default_description() -> String {
    "Descripcion".to_string()
}

fn default_manufacturer() -> String {
    "Fabricante".to_string()
}

fn default_category() -> String {
    "Categoria".to_string()
}

fn default_stock_quantity() -> String {
    "Suma Bodegas".to_string()
}
