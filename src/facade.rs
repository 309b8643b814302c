use std::path::Path;
use std::sync::Arc;

use catalog::{Catalog, ProductRecord};
use matcher::{Column, MatchConfig, Matcher};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::BodegaConfig;
use crate::error::{QueryError, SetupError};
use crate::visibility::{Role, StockPolicy, VisibleStock};

/// A matched product as shown to a caller, with role-gated stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductView {
    pub code: String,
    pub description: String,
    pub manufacturer: String,
    pub category: String,
    pub stock: VisibleStock,
}

impl ProductView {
    fn from_record(record: &ProductRecord, stock: VisibleStock) -> Self {
        Self {
            code: record.code.clone(),
            description: record.description.clone(),
            manufacturer: record.manufacturer.clone(),
            category: record.category.clone(),
            stock,
        }
    }
}

/// Result of a well-formed query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// At least one product matched, in catalog order.
    Found(Vec<ProductView>),
    /// The query matched no product.
    NotFound,
}

impl QueryOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, QueryOutcome::Found(_))
    }

    /// Matched products; empty for [`QueryOutcome::NotFound`].
    pub fn products(&self) -> &[ProductView] {
        match self {
            QueryOutcome::Found(views) => views,
            QueryOutcome::NotFound => &[],
        }
    }

    pub fn into_products(self) -> Option<Vec<ProductView>> {
        match self {
            QueryOutcome::Found(views) => Some(views),
            QueryOutcome::NotFound => None,
        }
    }
}

/// Single entry point for inventory queries.
///
/// Owns the [`Matcher`] (and through it the shared catalog) plus the stock
/// visibility policy. Cheap to clone; clones share the catalog.
#[derive(Debug, Clone)]
pub struct Inventory {
    matcher: Matcher,
    policy: StockPolicy,
}

impl Inventory {
    pub fn new(matcher: Matcher, policy: StockPolicy) -> Self {
        Self { matcher, policy }
    }

    /// Build an inventory over an in-memory catalog with default settings.
    pub fn from_catalog(catalog: Catalog) -> Result<Self, SetupError> {
        let matcher = Matcher::new(catalog, MatchConfig::default())?;
        Ok(Self::new(matcher, StockPolicy::default()))
    }

    /// Load the catalog at `path` and apply `config`.
    ///
    /// # Errors
    ///
    /// Fails if the catalog cannot be loaded or the config is invalid; a
    /// serving process should not start in either case.
    pub fn load(path: impl AsRef<Path>, config: &BodegaConfig) -> Result<Self, SetupError> {
        config.validate()?;
        let catalog = catalog::load(path.as_ref(), &config.catalog.load_options())?;
        let matcher = Matcher::with_catalog_arc(Arc::new(catalog), config.matcher)?;
        info!(
            products = matcher.catalog().len(),
            threshold = config.matcher.threshold,
            client_cap = config.visibility.client_cap,
            "inventory ready"
        );
        Ok(Self::new(matcher, config.stock_policy()))
    }

    pub fn catalog(&self) -> &Catalog {
        self.matcher.catalog()
    }

    pub fn policy(&self) -> &StockPolicy {
        &self.policy
    }

    /// Exact lookup by article code (leading zeros ignored).
    pub fn lookup_by_code(&self, code: &str, role: impl Into<Role>) -> QueryOutcome {
        self.render(self.matcher.by_code(code), role.into())
    }

    /// Fuzzy match of the whole text against descriptions.
    pub fn lookup_by_description(&self, text: &str, role: impl Into<Role>) -> QueryOutcome {
        self.render(self.matcher.by_column(Column::Description, text), role.into())
    }

    pub fn search_by_category(&self, name: &str, role: impl Into<Role>) -> QueryOutcome {
        self.render(self.matcher.by_column(Column::Category, name), role.into())
    }

    pub fn search_by_brand(&self, name: &str, role: impl Into<Role>) -> QueryOutcome {
        self.render(self.matcher.by_column(Column::Manufacturer, name), role.into())
    }

    /// Keyword + minimum-quantity search, e.g. `"tornillo 10mm"`.
    pub fn search_by_need(&self, text: &str, role: impl Into<Role>) -> QueryOutcome {
        self.render(self.matcher.by_need(text), role.into())
    }

    /// Stock query by code or description.
    ///
    /// Blank values count as absent. When both are given the code wins.
    ///
    /// # Errors
    ///
    /// [`QueryError::InvalidQuery`] when neither is supplied.
    pub fn stock_query(
        &self,
        code: Option<&str>,
        description: Option<&str>,
        role: impl Into<Role>,
    ) -> Result<QueryOutcome, QueryError> {
        fn present(value: Option<&str>) -> Option<&str> {
            value.filter(|s| !s.trim().is_empty())
        }
        match (present(code), present(description)) {
            (Some(code), _) => Ok(self.lookup_by_code(code, role)),
            (None, Some(text)) => Ok(self.lookup_by_description(text, role)),
            (None, None) => Err(QueryError::InvalidQuery),
        }
    }

    fn render(&self, hits: Vec<&ProductRecord>, role: Role) -> QueryOutcome {
        if hits.is_empty() {
            debug!(%role, "no products matched");
            return QueryOutcome::NotFound;
        }
        let views = hits
            .into_iter()
            .map(|record| {
                ProductView::from_record(record, self.policy.apply(record.stock_quantity, role))
            })
            .collect();
        QueryOutcome::Found(views)
    }
}
