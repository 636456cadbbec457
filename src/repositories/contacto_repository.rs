use sqlx::MySqlPool;

use crate::models::contacto::Contacto;
use crate::utils::errors::AppError;

pub struct ContactoRepository {
    pool: MySqlPool,
}

impl ContactoRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, contacto: &Contacto) -> Result<(), AppError> {
        sqlx::query("INSERT INTO contactos (nombre, telefono, email, mensaje) VALUES (?, ?, ?, ?)")
            .bind(&contacto.nombre)
            .bind(contacto.telefono)
            .bind(&contacto.email)
            .bind(&contacto.mensaje)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
