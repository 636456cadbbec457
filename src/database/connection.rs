//! Proveedor de conexiones a MySQL
//!
//! El pool entrega una conexión por operación y la devuelve al salir del
//! scope, también en los caminos de error.

use sqlx::MySqlPool;
use tracing::{info, warn};

use crate::config::DatabaseConfig;

#[derive(Clone)]
pub struct DatabaseConnection {
    pool: MySqlPool,
}

impl DatabaseConnection {
    pub fn new(config: &DatabaseConfig) -> Self {
        info!("🗄️  Pool MySQL configurado para {}", config.display_target());
        Self {
            pool: config.create_pool(),
        }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Comprobar la conexión al arrancar; un fallo no detiene el servidor
    pub async fn check(&self) {
        match ping(&self.pool).await {
            Ok(()) => info!("✅ Conexión con la base de datos verificada"),
            Err(e) => warn!("⚠️  La base de datos no responde todavía: {}", e),
        }
    }
}

/// Ejecutar `SELECT 1` contra el pool
pub async fn ping(pool: &MySqlPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
