use sqlx::{MySql, MySqlPool, Transaction};

use crate::models::beneficiario::{
    BeneficiarioVehiculo, CambiosBeneficiario, CredencialQr, NuevoBeneficiario, Vehiculo,
};
use crate::utils::errors::AppError;

const SELECT_BENEFICIARIO_VEHICULO: &str = r#"
    SELECT
        b.id, b.nombre, b.apellido, b.documento, b.usuario, b.contrasena,
        v.placa, v.tipovehiculo
    FROM beneficiarios b
    LEFT JOIN vehiculos v ON b.documento = v.documento
"#;

/// Beneficiarios y sus vehículos; las escrituras compuestas van en una
/// sola transacción.
pub struct BeneficiarioRepository {
    pool: MySqlPool,
}

impl BeneficiarioRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Insertar beneficiario y vehículos. Devuelve `Conflict` si el documento
    /// ya existe, sin escribir nada.
    pub async fn create(&self, nuevo: &NuevoBeneficiario) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        if documento_exists(&mut tx, nuevo.documento).await? {
            tx.rollback().await?;
            return Err(documento_duplicado());
        }

        sqlx::query(
            "INSERT INTO beneficiarios (nombre, apellido, documento, telefono, usuario, contrasena) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&nuevo.nombre)
        .bind(&nuevo.apellido)
        .bind(nuevo.documento)
        .bind(nuevo.telefono)
        .bind(&nuevo.usuario)
        .bind(&nuevo.contrasena)
        .execute(&mut *tx)
        .await
        .map_err(|e| match e {
            // Otro request insertó el mismo documento entre la verificación y el INSERT
            sqlx::Error::Database(ref db) if db.is_unique_violation() => documento_duplicado(),
            other => AppError::Database(other),
        })?;

        for vehiculo in &nuevo.vehiculos {
            insert_vehiculo(&mut tx, nuevo.documento, vehiculo).await?;
        }

        tx.commit().await?;
        Ok(())
    }

    pub async fn list_all(&self) -> Result<Vec<BeneficiarioVehiculo>, AppError> {
        let filas = sqlx::query_as::<_, BeneficiarioVehiculo>(&format!(
            "{} ORDER BY b.id",
            SELECT_BENEFICIARIO_VEHICULO
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(filas)
    }

    /// Primera fila del join para el id; si tiene varios vehículos sólo
    /// aparece uno.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<BeneficiarioVehiculo>, AppError> {
        let fila = sqlx::query_as::<_, BeneficiarioVehiculo>(&format!(
            "{} WHERE b.id = ? LIMIT 1",
            SELECT_BENEFICIARIO_VEHICULO
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(fila)
    }

    /// Actualizar datos del beneficiario y de los vehículos que ya existen
    /// (por documento y placa). No inserta vehículos nuevos.
    ///
    /// Devuelve `NotFound` si el id no existe. Cualquier error revierte la
    /// transacción completa.
    pub async fn update(&self, id: i32, cambios: &CambiosBeneficiario) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let actual: Option<(i64,)> =
            sqlx::query_as("SELECT documento FROM beneficiarios WHERE id = ? FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        let Some((documento_anterior,)) = actual else {
            tx.rollback().await?;
            return Err(AppError::NotFound("Beneficiario no encontrado".to_string()));
        };

        sqlx::query(
            r#"
            UPDATE beneficiarios
            SET nombre = ?, apellido = ?, documento = ?, telefono = COALESCE(?, telefono),
                usuario = ?, contrasena = ?
            WHERE id = ?
            "#,
        )
        .bind(&cambios.nombre)
        .bind(&cambios.apellido)
        .bind(cambios.documento)
        .bind(cambios.telefono)
        .bind(&cambios.usuario)
        .bind(&cambios.contrasena)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        // Los vehículos siguen al beneficiario si cambió su documento
        if documento_anterior != cambios.documento {
            sqlx::query("UPDATE vehiculos SET documento = ? WHERE documento = ?")
                .bind(cambios.documento)
                .bind(documento_anterior)
                .execute(&mut *tx)
                .await?;
        }

        for vehiculo in &cambios.vehiculos {
            sqlx::query(
                "UPDATE vehiculos SET placa = ?, tipovehiculo = ? WHERE documento = ? AND placa = ?",
            )
            .bind(&vehiculo.placa)
            .bind(&vehiculo.tipovehiculo)
            .bind(cambios.documento)
            .bind(&vehiculo.placa)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Eliminar los vehículos del beneficiario y luego el beneficiario.
    /// Un id inexistente no elimina nada.
    pub async fn delete(&self, id: i32) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "DELETE FROM vehiculos WHERE documento = \
             (SELECT documento FROM beneficiarios WHERE id = ?)",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        let result = sqlx::query("DELETE FROM beneficiarios WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected())
    }

    /// Coincidencia exacta de usuario y contraseña (comparación binaria)
    pub async fn authenticate(
        &self,
        usuario: &str,
        contrasena: &str,
    ) -> Result<Option<String>, AppError> {
        let fila: Option<(String,)> = sqlx::query_as(
            r#"
            SELECT usuario FROM beneficiarios
            WHERE CAST(usuario AS BINARY) = CAST(? AS BINARY)
              AND CAST(contrasena AS BINARY) = CAST(? AS BINARY)
            LIMIT 1
            "#,
        )
        .bind(usuario)
        .bind(contrasena)
        .fetch_optional(&self.pool)
        .await?;

        Ok(fila.map(|(u,)| u))
    }

    /// Datos de la credencial: primera fila del INNER JOIN por usuario
    pub async fn find_credencial(&self, usuario: &str) -> Result<Option<CredencialQr>, AppError> {
        let fila = sqlx::query_as::<_, CredencialQr>(
            r#"
            SELECT b.nombre, b.apellido, b.documento, v.placa, v.tipovehiculo
            FROM beneficiarios b
            JOIN vehiculos v ON b.documento = v.documento
            WHERE b.usuario = ?
            LIMIT 1
            "#,
        )
        .bind(usuario)
        .fetch_optional(&self.pool)
        .await?;

        Ok(fila)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM beneficiarios")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }
}

async fn documento_exists(tx: &mut Transaction<'_, MySql>, documento: i64) -> Result<bool, AppError> {
    let fila: Option<(i64,)> =
        sqlx::query_as("SELECT documento FROM beneficiarios WHERE documento = ?")
            .bind(documento)
            .fetch_optional(&mut **tx)
            .await?;

    Ok(fila.is_some())
}

async fn insert_vehiculo(
    tx: &mut Transaction<'_, MySql>,
    documento: i64,
    vehiculo: &Vehiculo,
) -> Result<(), AppError> {
    sqlx::query("INSERT INTO vehiculos (placa, tipovehiculo, documento) VALUES (?, ?, ?)")
        .bind(&vehiculo.placa)
        .bind(&vehiculo.tipovehiculo)
        .bind(documento)
        .execute(&mut **tx)
        .await?;

    Ok(())
}

fn documento_duplicado() -> AppError {
    AppError::Conflict("El beneficiario ya está registrado.".to_string())
}
