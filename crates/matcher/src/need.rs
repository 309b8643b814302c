//! Compound "need" queries: fuzzy keywords plus minimum quantities.
//!
//! `"tornillo 10mm"` asks for rows whose description fuzzily contains
//! *tornillo* **and** mentions some quantity of at least 10 mm. Each
//! requested quantity is checked independently against the description's
//! quantities, so one description number may satisfy several requests.

use catalog::ProductRecord;
use serde::{Deserialize, Serialize};

use crate::filter::{fuzzy_filter, Column};
use crate::numeric::{extract, keywords, NumericToken};

/// A parsed need query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeedQuery {
    /// Lower-cased words without digits; every one must match the description.
    pub keywords: Vec<String>,
    /// Requested minimum quantities; every one must be met by the description.
    pub quantities: Vec<NumericToken>,
}

impl NeedQuery {
    /// Split free text into keywords and numeric-unit tokens.
    ///
    /// ```rust
    /// use matcher::need::NeedQuery;
    /// use matcher::numeric::NumericToken;
    ///
    /// let q = NeedQuery::parse("Tornillo 10MM acero");
    /// assert_eq!(q.keywords, ["tornillo", "acero"]);
    /// assert_eq!(q.quantities, [NumericToken::new(10, "mm")]);
    /// ```
    pub fn parse(text: &str) -> Self {
        let lowered = text.to_lowercase();
        Self {
            keywords: keywords(&lowered).map(str::to_string).collect(),
            quantities: extract(&lowered),
        }
    }

    /// `true` when the query carries neither keywords nor quantities.
    pub fn is_unconstrained(&self) -> bool {
        self.keywords.is_empty() && self.quantities.is_empty()
    }

    /// Quantity stage: every requested token needs at least one description
    /// token that satisfies it.
    pub fn accepts_quantities(&self, description: &str) -> bool {
        if self.quantities.is_empty() {
            return true;
        }
        let offered = extract(&description.to_lowercase());
        self.quantities
            .iter()
            .all(|requested| offered.iter().any(|o| o.satisfies(requested)))
    }

    /// Run both stages over `rows`, preserving input order.
    pub fn filter<'a, I>(&self, rows: I, threshold: u8) -> Vec<&'a ProductRecord>
    where
        I: IntoIterator<Item = &'a ProductRecord>,
    {
        let mut candidates: Vec<&'a ProductRecord> = rows.into_iter().collect();
        for keyword in &self.keywords {
            if candidates.is_empty() {
                break;
            }
            candidates = fuzzy_filter(candidates, Column::Description, keyword, threshold);
        }
        candidates.retain(|record| self.accepts_quantities(&record.description));
        candidates
    }
}
