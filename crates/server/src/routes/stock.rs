use crate::error::{ServerError, ServerResult};
use crate::routes::ProductDto;
use crate::state::ServerState;
use axum::extract::{Query, State};
use axum::Json;
use bodega::{QueryOutcome, Role};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Stock query parameters
#[derive(Debug, Default, Deserialize)]
pub struct StockParams {
    #[serde(default)]
    pub codigo: Option<String>,

    #[serde(default)]
    pub descripcion: Option<String>,

    /// `cliente` or `vendedor`; anything else is treated as `cliente`
    #[serde(default)]
    pub rol: Option<String>,
}

/// Stock query response
#[derive(Debug, Serialize)]
pub struct StockResponse {
    pub resultados: Vec<ProductDto>,
}

/// `GET /stock/?codigo=&descripcion=&rol=`
///
/// The code wins when both are given.
pub async fn stock_query(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<StockParams>,
) -> ServerResult<Json<StockResponse>> {
    let role = Role::parse_lenient(params.rol.as_deref());

    let outcome = state.inventory.stock_query(
        params.codigo.as_deref(),
        params.descripcion.as_deref(),
        role,
    )?;

    match outcome {
        QueryOutcome::Found(products) => Ok(Json(StockResponse {
            resultados: products.into_iter().map(ProductDto::from).collect(),
        })),
        QueryOutcome::NotFound => Err(ServerError::NoResults(
            "Artículo no encontrado".to_string(),
        )),
    }
}
