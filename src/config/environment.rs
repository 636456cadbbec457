//! Configuración de variables de entorno
//!
//! Este módulo carga la configuración del servidor y de la base de datos
//! desde el entorno del proceso.

use anyhow::{anyhow, Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

use super::database::DatabaseConfig;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    /// Vacío significa CORS permisivo (cualquier origen)
    pub cors_origins: Vec<String>,
    pub database: DatabaseConfig,
}

impl EnvironmentConfig {
    /// Cargar la configuración desde las variables de entorno del proceso
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Cargar la configuración usando una función de búsqueda arbitraria
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database = DatabaseConfig {
            host: required(&lookup, "DB_HOST")?,
            user: required(&lookup, "DB_USER")?,
            password: required(&lookup, "DB_PASSWORD")?,
            database: required(&lookup, "DB_NAME")?,
            port: parse("DB_PORT", required(&lookup, "DB_PORT")?)?,
            max_connections: optional(&lookup, "DB_MAX_CONNECTIONS", 10)?,
            acquire_timeout: Duration::from_secs(optional(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", 5)?),
        };

        let cors_origins = lookup("CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty() && s != "*")
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: optional(&lookup, "PORT", 8000)?,
            cors_origins,
            database,
        })
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn required<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).ok_or_else(|| anyhow!("{} must be set", key))
}

fn parse<T>(key: &str, raw: String) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse()
        .with_context(|| format!("{} must be a valid number", key))
}

fn optional<T, F>(lookup: &F, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => parse(key, raw),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    const DB_VARS: &[(&str, &str)] = &[
        ("DB_HOST", "localhost"),
        ("DB_USER", "root"),
        ("DB_PASSWORD", "root"),
        ("DB_NAME", "parqueadero"),
        ("DB_PORT", "3306"),
    ];

    #[test]
    fn test_defaults() {
        let config = EnvironmentConfig::from_lookup(lookup_from(DB_VARS)).unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.database.port, 3306);
        assert_eq!(config.database.max_connections, 10);
        assert!(config.cors_origins.is_empty());
        assert!(!config.is_production());
        assert_eq!(config.server_url(), "0.0.0.0:8000");
    }

    #[test]
    fn test_missing_db_var_fails() {
        let err = EnvironmentConfig::from_lookup(lookup_from(&DB_VARS[..4])).unwrap_err();
        assert!(err.to_string().contains("DB_PORT"));
    }

    #[test]
    fn test_invalid_port_fails() {
        let mut vars = DB_VARS.to_vec();
        vars[4] = ("DB_PORT", "tres mil");
        assert!(EnvironmentConfig::from_lookup(lookup_from(&vars)).is_err());
    }

    #[test]
    fn test_cors_origins() {
        let mut vars = DB_VARS.to_vec();
        vars.push(("CORS_ORIGINS", "http://a.com, http://b.com,"));
        let config = EnvironmentConfig::from_lookup(lookup_from(&vars)).unwrap();
        assert_eq!(config.cors_origins, vec!["http://a.com", "http://b.com"]);

        let mut vars = DB_VARS.to_vec();
        vars.push(("CORS_ORIGINS", "*"));
        let config = EnvironmentConfig::from_lookup(lookup_from(&vars)).unwrap();
        assert!(config.cors_origins.is_empty());
    }
}
