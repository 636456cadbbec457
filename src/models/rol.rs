//! Modelo de Rol (cuenta de empleado)

use serde::Serialize;
use sqlx::FromRow;

/// Fila de la tabla `roles`.
///
/// `contrasena` se guarda y se devuelve en texto plano, igual que en el
/// sistema existente.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Rol {
    pub id: i32,
    pub nombre: String,
    pub apellido: String,
    pub documento: String,
    pub usuario: String,
    pub contrasena: String,
    pub rol: String,
}

/// Resultado de un login de empleado
#[derive(Debug, Clone, FromRow)]
pub struct RolSesion {
    pub usuario: String,
    pub rol: String,
}
