//! Modelos de Beneficiario y Vehículo

use serde::Serialize;
use sqlx::FromRow;

/// Fila del LEFT JOIN beneficiarios ⟕ vehiculos.
///
/// Un beneficiario con N vehículos produce N filas; uno sin vehículos
/// produce una fila con `placa` y `tipovehiculo` nulos.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct BeneficiarioVehiculo {
    pub id: i32,
    pub nombre: String,
    pub apellido: String,
    pub documento: i64,
    pub usuario: String,
    pub contrasena: String,
    pub placa: Option<String>,
    pub tipovehiculo: Option<String>,
}

/// Datos impresos en la credencial QR (INNER JOIN, primera fila)
#[derive(Debug, Clone, FromRow)]
pub struct CredencialQr {
    pub nombre: String,
    pub apellido: String,
    pub documento: i64,
    pub placa: String,
    pub tipovehiculo: String,
}

#[derive(Debug, Clone)]
pub struct Vehiculo {
    pub placa: String,
    pub tipovehiculo: String,
}

/// Beneficiario nuevo junto con sus vehículos
#[derive(Debug, Clone)]
pub struct NuevoBeneficiario {
    pub nombre: String,
    pub apellido: String,
    pub documento: i64,
    pub telefono: i64,
    pub usuario: String,
    pub contrasena: String,
    pub vehiculos: Vec<Vehiculo>,
}

/// Cambios sobre un beneficiario existente
#[derive(Debug, Clone)]
pub struct CambiosBeneficiario {
    pub nombre: String,
    pub apellido: String,
    pub documento: i64,
    pub telefono: Option<i64>,
    pub usuario: String,
    pub contrasena: String,
    pub vehiculos: Vec<Vehiculo>,
}
