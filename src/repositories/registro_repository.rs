use chrono::NaiveDate;
use sqlx::MySqlPool;
use std::collections::HashSet;

use crate::models::registro::{Registro, ESTADO_INGRESO};
use crate::utils::errors::AppError;

/// Consultas de sólo lectura sobre `registros`
pub struct RegistroRepository {
    pool: MySqlPool,
}

impl RegistroRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Registro>, AppError> {
        let registros = sqlx::query_as::<_, Registro>(
            r#"
            SELECT placa, documento, estado, fecha_ingreso, fecha_salida, puesto, valor_parqueo
            FROM registros
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(registros)
    }

    /// Puestos con algún registro en estado `ingreso`
    pub async fn occupied_puestos(&self) -> Result<HashSet<i32>, AppError> {
        let filas: Vec<(Option<i32>,)> =
            sqlx::query_as("SELECT puesto FROM registros WHERE estado = ?")
                .bind(ESTADO_INGRESO)
                .fetch_all(&self.pool)
                .await?;

        Ok(filas.into_iter().filter_map(|(p,)| p).collect())
    }

    pub async fn count_ingresos_on(&self, fecha: NaiveDate) -> Result<i64, AppError> {
        let (total,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM registros WHERE DATE(fecha_ingreso) = ?")
                .bind(fecha)
                .fetch_one(&self.pool)
                .await?;

        Ok(total)
    }

    pub async fn count_salidas_on(&self, fecha: NaiveDate) -> Result<i64, AppError> {
        let (total,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM registros WHERE fecha_salida IS NOT NULL AND DATE(fecha_salida) = ?",
        )
        .bind(fecha)
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }
}
