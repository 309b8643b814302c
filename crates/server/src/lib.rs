//! Bodega Server - HTTP API for inventory queries
//!
//! This crate exposes the [`bodega::Inventory`] facade over HTTP. It supports:
//!
//! - **Menus**: the role selection menu and per-role option instructions
//! - **Stock**: lookup by article code or description
//! - **Search**: fuzzy search by description, category and brand, plus
//!   need queries such as `tornillo 10mm`
//! - **Health**: liveness and readiness probes
//!
//! Stock figures are gated by the `rol` query parameter; customers see
//! `"+10"` instead of exact counts above the configured cap.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe with catalog size
//! - `GET /menu` - Role selection
//! - `GET /menu/{rol}/opcion/{opcion}` - Option instructions for a role
//! - `GET /stock/?codigo=&descripcion=&rol=` - Stock query
//! - `GET /buscar/descripcion/?texto=&rol=` - Description search
//! - `GET /buscar/categoria/?nombre=&rol=` - Category search
//! - `GET /buscar/marca/?nombre=&rol=` - Brand search
//! - `GET /buscar/necesidad/?texto=&rol=` - Need search

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
