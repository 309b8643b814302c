//! API route handlers
//!
//! - `health`: liveness and readiness
//! - `menu`: role menu and per-role option instructions
//! - `stock`: stock query by code or description
//! - `search`: description, category, brand and need searches

pub mod health;
pub mod menu;
pub mod search;
pub mod stock;

use crate::error::{ServerError, ServerResult, MENU_PATH};
use axum::response::IntoResponse;
use axum::Json;
use bodega::ProductView;
use serde::Serialize;
use serde_json::json;

/// API version and base info
///
/// # Response
///
/// ```json
/// {
///   "name": "Bodega Server",
///   "version": "0.1.0",
///   "endpoints": ["..."]
/// }
/// ```
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "Bodega Server",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/menu",
            "/stock/",
            "/buscar/descripcion/",
            "/buscar/categoria/",
            "/buscar/marca/",
            "/buscar/necesidad/",
            "/health",
            "/ready"
        ]
    })))
}

/// 404 Not Found handler
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}

/// Product as returned by the stock and search endpoints, keyed by the
/// spreadsheet column names.
#[derive(Debug, Serialize)]
pub struct ProductDto {
    #[serde(rename = "Codigo del Articulo")]
    pub code: String,
    #[serde(rename = "Descripcion")]
    pub description: String,
    #[serde(rename = "Fabricante")]
    pub manufacturer: String,
    #[serde(rename = "Categoria")]
    pub category: String,
    #[serde(rename = "Stock")]
    pub stock: bodega::VisibleStock,
}

impl From<ProductView> for ProductDto {
    fn from(view: ProductView) -> Self {
        Self {
            code: view.code,
            description: view.description,
            manufacturer: view.manufacturer,
            category: view.category,
            stock: view.stock,
        }
    }
}

/// Search endpoint response
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub productos: Vec<ProductDto>,
    pub volver: &'static str,
}

impl SearchResponse {
    pub fn new(products: Vec<ProductView>) -> Self {
        Self {
            productos: products.into_iter().map(ProductDto::from).collect(),
            volver: MENU_PATH,
        }
    }
}

/// A missing required parameter is a bad request; an empty one is passed on.
pub(crate) fn required_param(value: Option<String>, name: &str) -> ServerResult<String> {
    value.ok_or_else(|| ServerError::BadRequest(format!("missing query parameter '{name}'")))
}
