//! # Bodega Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` answers text queries against a [`catalog::Catalog`]. It owns
//! every piece of matching logic in the system:
//!
//! - [`similarity`]: partial-ratio fuzzy scoring with a fixed acceptance
//!   threshold (70 by default).
//! - [`numeric`]: extraction of `number + unit` tokens such as `10mm` or
//!   `500 ml` from free text.
//! - [`filter`]: the single-column fuzzy filter behind description,
//!   category and brand searches.
//! - [`need`]: compound "need" queries that AND fuzzy keywords with
//!   minimum-quantity constraints.
//! - [`Matcher`]: the engine tying these together over a shared catalog.
//!
//! ## Example Usage
//!
//! ```rust
//! use catalog::{Catalog, ProductRecord};
//! use matcher::{Column, MatchConfig, Matcher};
//!
//! let catalog = Catalog::from_records([ProductRecord::new(
//!     "0123",
//!     "Tornillo 10mm acero",
//!     "Fixa",
//!     "Ferreteria",
//!     40,
//! )]);
//! let matcher = Matcher::new(catalog, MatchConfig::default())?;
//!
//! assert_eq!(matcher.by_code("123").len(), 1);
//! assert_eq!(matcher.by_column(Column::Manufacturer, "fixa").len(), 1);
//! assert_eq!(matcher.by_need("tornillo 8mm").len(), 1);
//! assert!(matcher.by_need("tornillo 12mm").is_empty());
//! # Ok::<(), matcher::MatchError>(())
//! ```
//!
//! ## Observability
//!
//! Each query emits a `tracing` debug event with the operation, the query
//! text and the hit count.

pub mod engine;
pub mod filter;
pub mod need;
pub mod numeric;
pub mod similarity;
pub mod types;

pub use crate::engine::Matcher;
pub use crate::filter::{fuzzy_filter, Column};
pub use crate::need::NeedQuery;
pub use crate::numeric::{extract, NumericToken};
pub use crate::similarity::{matches, partial_ratio, DEFAULT_THRESHOLD};
pub use crate::types::{MatchConfig, MatchError};
