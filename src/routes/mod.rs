//! Rutas HTTP
//!
//! Cada archivo expone un `create_*_router()`; todas las rutas cuelgan de
//! la raíz con los paths que ya usan los clientes.

pub mod auth_routes;
pub mod beneficiario_routes;
pub mod contacto_routes;
pub mod health_routes;
pub mod registro_routes;
pub mod rol_routes;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_from_config;
use crate::state::AppState;

/// Router completo de la aplicación, con CORS y trazas por request
pub fn create_app_router(state: AppState) -> Router {
    let cors = cors_from_config(&state.config);

    Router::new()
        .merge(rol_routes::create_rol_router())
        .merge(auth_routes::create_auth_router())
        .merge(beneficiario_routes::create_beneficiario_router())
        .merge(registro_routes::create_registro_router())
        .merge(contacto_routes::create_contacto_router())
        .merge(health_routes::create_health_router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
