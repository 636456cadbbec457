//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use sqlx::MySqlPool;

use crate::config::EnvironmentConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: MySqlPool,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(pool: MySqlPool, config: EnvironmentConfig) -> Self {
        Self { pool, config }
    }
}
