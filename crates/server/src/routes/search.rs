//! Fuzzy search endpoints.

use crate::error::{ServerError, ServerResult};
use crate::routes::{required_param, SearchResponse};
use crate::state::ServerState;
use axum::extract::{Query, State};
use axum::Json;
use bodega::{QueryOutcome, Role};
use serde::Deserialize;
use std::sync::Arc;

/// Parameters for `/buscar/descripcion/` and `/buscar/necesidad/`
#[derive(Debug, Default, Deserialize)]
pub struct TextParams {
    #[serde(default)]
    pub texto: Option<String>,
    #[serde(default)]
    pub rol: Option<String>,
}

/// Parameters for `/buscar/categoria/` and `/buscar/marca/`
#[derive(Debug, Default, Deserialize)]
pub struct NameParams {
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub rol: Option<String>,
}

fn respond(
    outcome: QueryOutcome,
    not_found: impl FnOnce() -> String,
) -> ServerResult<Json<SearchResponse>> {
    match outcome {
        QueryOutcome::Found(products) => Ok(Json(SearchResponse::new(products))),
        QueryOutcome::NotFound => Err(ServerError::NoResults(not_found())),
    }
}

pub async fn by_description(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<TextParams>,
) -> ServerResult<Json<SearchResponse>> {
    let texto = required_param(params.texto, "texto")?;
    let role = Role::parse_lenient(params.rol.as_deref());
    let outcome = state.inventory.lookup_by_description(&texto, role);
    respond(outcome, || {
        format!("No se encontraron productos que coincidan con '{texto}'")
    })
}

pub async fn by_category(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<NameParams>,
) -> ServerResult<Json<SearchResponse>> {
    let nombre = required_param(params.nombre, "nombre")?;
    let role = Role::parse_lenient(params.rol.as_deref());
    let outcome = state.inventory.search_by_category(&nombre, role);
    respond(outcome, || {
        format!("No se encontraron productos en la categoría '{nombre}'")
    })
}

pub async fn by_brand(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<NameParams>,
) -> ServerResult<Json<SearchResponse>> {
    let nombre = required_param(params.nombre, "nombre")?;
    let role = Role::parse_lenient(params.rol.as_deref());
    let outcome = state.inventory.search_by_brand(&nombre, role);
    respond(outcome, || {
        format!("No se encontraron productos de la marca '{nombre}'")
    })
}

/// Keywords plus minimum quantities, e.g. `texto=tornillo 10mm`.
pub async fn by_need(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<TextParams>,
) -> ServerResult<Json<SearchResponse>> {
    let texto = required_param(params.texto, "texto")?;
    let role = Role::parse_lenient(params.rol.as_deref());
    let outcome = state.inventory.search_by_need(&texto, role);
    respond(outcome, || {
        "No se encontraron productos que coincidan con la necesidad".to_string()
    })
}
