//! Configuración de base de datos
//!
//! Credenciales y límites del pool MySQL.

use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use std::fmt;
use std::time::Duration;

/// Configuración de la base de datos
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
    pub port: u16,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

// La contraseña no se imprime nunca
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"***")
            .field("database", &self.database)
            .field("port", &self.port)
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout", &self.acquire_timeout)
            .finish()
    }
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }

    /// Crear el pool sin abrir conexiones todavía.
    ///
    /// Cada request adquiere su conexión al usarla, así el servidor arranca
    /// aunque MySQL no esté disponible y los fallos se reportan por request.
    pub fn create_pool(&self) -> MySqlPool {
        MySqlPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
            .connect_lazy_with(self.connect_options())
    }

    /// Dirección legible para logs, sin credenciales
    pub fn display_target(&self) -> String {
        format!("mysql://***@{}:{}/{}", self.host, self.port, self.database)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DatabaseConfig {
        DatabaseConfig {
            host: "db.local".to_string(),
            user: "parqueadero".to_string(),
            password: "secreta".to_string(),
            database: "parqueadero".to_string(),
            port: 3306,
            max_connections: 10,
            acquire_timeout: Duration::from_secs(5),
        }
    }

    #[test]
    fn test_debug_hides_password() {
        let printed = format!("{:?}", sample());
        assert!(!printed.contains("secreta"));
        assert!(printed.contains("db.local"));
    }

    #[test]
    fn test_display_target_hides_credentials() {
        let target = sample().display_target();
        assert_eq!(target, "mysql://***@db.local:3306/parqueadero");
    }
}
