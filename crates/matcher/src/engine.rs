use std::sync::Arc;

use catalog::{Catalog, ProductRecord};
use tracing::debug;

use crate::filter::{fuzzy_filter, Column};
use crate::need::NeedQuery;
use crate::types::{MatchConfig, MatchError};


/// Query engine over a shared, read-only catalog.
///
/// Every method is a pure scan of the catalog, so a single `Matcher` (or
/// clones of it, which share the catalog) can serve any number of threads.
#[derive(Debug, Clone)]
pub struct Matcher {
    catalog: Arc<Catalog>,
    config: MatchConfig,
}

impl Matcher {
    /// Construct a matcher that owns `catalog`.
    pub fn new(catalog: Catalog, config: MatchConfig) -> Result<Self, MatchError> {
        Self::with_catalog_arc(Arc::new(catalog), config)
    }

    /// Construct a matcher from a shared catalog handle.
    pub fn with_catalog_arc(catalog: Arc<Catalog>, config: MatchConfig) -> Result<Self, MatchError> {
        config.validate()?;
        Ok(Self { catalog, config })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Exact lookup by article code; the code is normalized first.
    pub fn by_code(&self, code: &str) -> Vec<&ProductRecord> {
        let hits: Vec<_> = self.catalog.find_by_code(code).collect();
        debug!(code, hits = hits.len(), "code lookup");
        hits
    }

    /// Fuzzy search on a single text column.
    pub fn by_column(&self, column: Column, text: &str) -> Vec<&ProductRecord> {
        let hits = fuzzy_filter(self.catalog.iter(), column, text, self.config.threshold);
        debug!(%column, text, hits = hits.len(), "column search");
        hits
    }

    /// Compound keyword + quantity search over descriptions.
    pub fn by_need(&self, text: &str) -> Vec<&ProductRecord> {
        let query = NeedQuery::parse(text);
        let hits = query.filter(self.catalog.iter(), self.config.threshold);
        debug!(
            text,
            keywords = query.keywords.len(),
            quantities = query.quantities.len(),
            hits = hits.len(),
            "need search"
        );
        hits
    }
}
