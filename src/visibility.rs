//! Role-gated stock visibility.
//!
//! Sellers (`vendedor`) always see exact quantities. Customers (`cliente`)
//! see exact quantities only up to a cap; above it they see `"+10"`.
//! Any role that is not recognised is treated as a customer, so a missing or
//! mistyped role can never reveal an exact high count.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Quantity above which customers only see the capped sentinel.
pub const DEFAULT_CLIENT_CAP: u64 = 10;

/// Caller role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Cliente,
    Vendedor,
}

/// A role name that is neither `cliente` nor `vendedor`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role '{0}'")]
pub struct UnknownRole(pub String);

impl Role {
    pub const ALL: [Role; 2] = [Role::Cliente, Role::Vendedor];

    /// Parse a caller-supplied role, falling back to [`Role::Cliente`] for
    /// missing or unrecognised values.
    pub fn parse_lenient(raw: Option<&str>) -> Role {
        raw.and_then(|r| r.parse().ok()).unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Cliente => "cliente",
            Role::Vendedor => "vendedor",
        }
    }
}

/// Strict, case-insensitive parse. Use [`Role::parse_lenient`] (or
/// `Role::from(&str)`) where unknown roles must degrade to `Cliente`.
impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cliente" => Ok(Role::Cliente),
            "vendedor" => Ok(Role::Vendedor),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

impl From<&str> for Role {
    fn from(raw: &str) -> Self {
        Role::parse_lenient(Some(raw))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stock value as shown to a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibleStock {
    /// The exact quantity.
    Exact(u64),
    /// "More than `cap`", shown as `+cap`.
    Capped(u64),
}

impl fmt::Display for VisibleStock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisibleStock::Exact(n) => write!(f, "{n}"),
            VisibleStock::Capped(cap) => write!(f, "+{cap}"),
        }
    }
}

/// Exact values serialize as numbers, capped ones as the `"+10"` string.
impl Serialize for VisibleStock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            VisibleStock::Exact(n) => serializer.serialize_u64(*n),
            VisibleStock::Capped(_) => serializer.collect_str(self),
        }
    }
}

/// Maps raw quantities to what a role may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockPolicy {
    client_cap: u64,
}

impl StockPolicy {
    pub fn new(client_cap: u64) -> Self {
        Self { client_cap }
    }

    pub fn client_cap(&self) -> u64 {
        self.client_cap
    }

    pub fn apply(&self, raw_quantity: u64, role: Role) -> VisibleStock {
        match role {
            Role::Cliente if raw_quantity > self.client_cap => VisibleStock::Capped(self.client_cap),
            _ => VisibleStock::Exact(raw_quantity),
        }
    }
}

impl Default for StockPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_CLIENT_CAP)
    }
}

/// Apply the default policy for a caller-supplied role string.
///
/// ```rust
/// use bodega::{visible_stock, VisibleStock};
///
/// assert_eq!(visible_stock(15, "cliente").to_string(), "+10");
/// assert_eq!(visible_stock(15, "VENDEDOR"), VisibleStock::Exact(15));
/// assert_eq!(visible_stock(5, "cliente"), VisibleStock::Exact(5));
/// ```
pub fn visible_stock(raw_quantity: u64, role: &str) -> VisibleStock {
    StockPolicy::default().apply(raw_quantity, Role::from(role))
}
