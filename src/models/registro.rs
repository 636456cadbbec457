//! Modelo de Registro (evento de ingreso/salida)
//!
//! La tabla `registros` la escribe el proceso de portería; este servicio
//! sólo la consulta.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Valor de `estado` para un vehículo que está dentro
pub const ESTADO_INGRESO: &str = "ingreso";

#[derive(Debug, Clone, FromRow)]
pub struct Registro {
    pub placa: String,
    pub documento: Option<i64>,
    pub estado: String,
    pub fecha_ingreso: Option<NaiveDateTime>,
    pub fecha_salida: Option<NaiveDateTime>,
    pub puesto: Option<i32>,
    pub valor_parqueo: Option<Decimal>,
}
