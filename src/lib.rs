//! Workspace umbrella crate for Bodega inventory queries.
//!
//! This crate stitches the catalog store and the matching engine together
//! behind one facade, [`Inventory`], and applies role-gated stock visibility
//! to every result.
//!
//! ## Operations
//!
//! | Method | Matching |
//! |--------|----------|
//! | [`Inventory::lookup_by_code`] | exact code, leading zeros ignored |
//! | [`Inventory::lookup_by_description`] | fuzzy on descriptions |
//! | [`Inventory::search_by_category`] | fuzzy on categories |
//! | [`Inventory::search_by_brand`] | fuzzy on manufacturers |
//! | [`Inventory::search_by_need`] | fuzzy keywords AND minimum quantities |
//! | [`Inventory::stock_query`] | code if given, otherwise description |
//!
//! Each returns [`QueryOutcome::Found`] with a non-empty list or
//! [`QueryOutcome::NotFound`]; only a stock query with neither code nor
//! description is an error ([`QueryError::InvalidQuery`]).
//!
//! ## Example
//!
//! ```rust
//! use bodega::{Catalog, Inventory, ProductRecord, QueryOutcome, VisibleStock};
//!
//! let inventory = Inventory::from_catalog(Catalog::from_records([ProductRecord::new(
//!     "123",
//!     "Martillo 500g",
//!     "AcmeTools",
//!     "Herramientas",
//!     20,
//! )]))?;
//!
//! let outcome = inventory.lookup_by_code("0123", "cliente");
//! assert_eq!(outcome.products()[0].stock, VisibleStock::Capped(10));
//!
//! let outcome = inventory.search_by_need("martillo 600g", "cliente");
//! assert_eq!(outcome, QueryOutcome::NotFound);
//! # Ok::<(), bodega::SetupError>(())
//! ```

pub mod config;
pub mod error;
pub mod facade;
pub mod visibility;

pub use catalog::{normalize_code, Catalog, LoadError, LoadOptions, ProductRecord, SourceFormat};
pub use matcher::{MatchConfig, MatchError, Matcher};

pub use crate::config::{BodegaConfig, ConfigLoadError};
pub use crate::error::{QueryError, SetupError};
pub use crate::facade::{Inventory, ProductView, QueryOutcome};
pub use crate::visibility::{visible_stock, Role, StockPolicy, UnknownRole, VisibleStock};
