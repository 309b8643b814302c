//! # Bodega Catalog (`catalog`)
//!
//! Holds the product table every inventory query runs against.
//!
//! A [`Catalog`] is loaded once from a tabular source (JSON, CSV or xlsx), normalized
//! on the way in, and is read-only afterwards. Normalization guarantees:
//!
//! - article codes are trimmed and carry no leading zeros ([`normalize_code`])
//! - blank text cells become empty strings
//! - stock quantities are non-negative integers; unparseable cells become 0
//!
//! ## Example
//!
//! ```rust
//! use catalog::{from_csv_reader, ColumnMapping};
//!
//! let csv = "Codigo del Articulo,Descripcion,Fabricante,Categoria,Suma Bodegas\n\
//!            0123,Martillo 500g,AcmeTools,Herramientas,20\n";
//! let catalog = from_csv_reader(csv.as_bytes(), &ColumnMapping::default())?;
//!
//! let hit = catalog.find_by_code("123").next().expect("present");
//! assert_eq!(hit.stock_quantity, 20);
//! # Ok::<(), catalog::LoadError>(())
//! ```

mod catalog;
mod columns;
mod error;
mod load;
mod record;

pub use crate::catalog::Catalog;
pub use crate::columns::ColumnMapping;
pub use crate::error::LoadError;
pub use crate::load::{
    from_csv_reader, from_json_str, from_xlsx_reader, load, LoadOptions, SourceFormat,
};
pub use crate::record::{normalize_code, parse_stock, ProductRecord};
