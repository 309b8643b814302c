//! Role selection menu and per-role option instructions.
//!
//! Both roles share one option table; only the `rol` suffix of each
//! instruction differs.

use crate::error::{ServerError, ServerResult};
use axum::extract::Path;
use axum::response::IntoResponse;
use axum::Json;
use bodega::Role;
use serde::Serialize;
use serde_json::json;

/// One numbered menu entry.
#[derive(Debug, Clone, Copy)]
pub struct MenuOption {
    pub action: &'static str,
    /// Usage template; the caller's role is appended as `&rol=...`.
    pub usage: &'static str,
}

pub const MENU_OPTIONS: [MenuOption; 6] = [
    MenuOption {
        action: "Consultar stock por código",
        usage: "/stock/?codigo=XXXX",
    },
    MenuOption {
        action: "Consultar stock por descripción",
        usage: "/stock/?descripcion=XXXX",
    },
    MenuOption {
        action: "Buscar productos por palabra clave en descripción",
        usage: "/buscar/descripcion/?texto=PALABRA",
    },
    MenuOption {
        action: "Buscar productos por categoría",
        usage: "/buscar/categoria/?nombre=PALABRA",
    },
    MenuOption {
        action: "Buscar productos por marca",
        usage: "/buscar/marca/?nombre=MARCA",
    },
    MenuOption {
        action: "Buscar productos por necesidad",
        usage: "/buscar/necesidad/?texto=FRASE",
    },
];

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct OptionResponse {
    pub accion: &'static str,
    pub instruccion: String,
}

/// Resolve option `number` (1-based) for `role`.
pub fn option_for(role: Role, number: usize) -> Option<OptionResponse> {
    let option = MENU_OPTIONS.get(number.checked_sub(1)?)?;
    Some(OptionResponse {
        accion: option.action,
        instruccion: format!("Usa {}&rol={}", option.usage, role),
    })
}

/// `GET /menu`
pub async fn main_menu() -> impl IntoResponse {
    let roles: serde_json::Map<String, serde_json::Value> = Role::ALL
        .iter()
        .enumerate()
        .map(|(i, role)| ((i + 1).to_string(), json!(capitalized(*role))))
        .collect();

    Json(json!({
        "mensaje": "Bienvenido al sistema. ¿Quién eres?",
        "opciones": roles,
    }))
}

/// `GET /menu/{rol}/opcion/{opcion}`
pub async fn menu_option(
    Path((rol, opcion)): Path<(String, String)>,
) -> ServerResult<Json<OptionResponse>> {
    let role: Role = rol.parse().map_err(|_| ServerError::NotFound)?;
    let number: usize = opcion
        .trim()
        .parse()
        .map_err(|_| ServerError::InvalidOption(opcion.clone()))?;

    option_for(role, number)
        .map(Json)
        .ok_or(ServerError::InvalidOption(opcion))
}

fn capitalized(role: Role) -> &'static str {
    match role {
        Role::Cliente => "Cliente",
        Role::Vendedor => "Vendedor",
    }
}
