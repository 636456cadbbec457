use sqlx::{Executor, MySqlConnection, MySqlPool};

use crate::dto::rol_dto::RolRequest;
use crate::models::rol::{Rol, RolSesion};
use crate::utils::errors::AppError;

const SELECT_ROL: &str =
    "SELECT id, nombre, apellido, documento, usuario, contrasena, rol FROM roles";

pub struct RolRepository {
    pool: MySqlPool,
}

impl RolRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, rol: &RolRequest) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO roles (nombre, apellido, usuario, contrasena, documento, rol) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&rol.nombre)
        .bind(&rol.apellido)
        .bind(&rol.usuario)
        .bind(&rol.contrasena)
        .bind(&rol.documento)
        .bind(&rol.rol)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn list_all(&self) -> Result<Vec<Rol>, AppError> {
        let roles = sqlx::query_as::<_, Rol>(&format!("{} ORDER BY id", SELECT_ROL))
            .fetch_all(&self.pool)
            .await?;

        Ok(roles)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Rol>, AppError> {
        let rol = sqlx::query_as::<_, Rol>(&format!("{} WHERE id = ?", SELECT_ROL))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(rol)
    }

    /// Sobrescribe todos los campos; si el id no existe no hace nada
    pub async fn update(&self, id: i32, rol: &RolRequest) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE roles
            SET nombre = ?, apellido = ?, usuario = ?, contrasena = ?, documento = ?, rol = ?
            WHERE id = ?
            "#,
        )
        .bind(&rol.nombre)
        .bind(&rol.apellido)
        .bind(&rol.usuario)
        .bind(&rol.contrasena)
        .bind(&rol.documento)
        .bind(&rol.rol)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Coincidencia exacta de usuario y contraseña, byte a byte: la
    /// collation por defecto de MySQL ignora mayúsculas y tildes.
    pub async fn authenticate(
        &self,
        usuario: &str,
        contrasena: &str,
    ) -> Result<Option<RolSesion>, AppError> {
        let sesion = sqlx::query_as::<_, RolSesion>(
            r#"
            SELECT usuario, rol FROM roles
            WHERE CAST(usuario AS BINARY) = CAST(? AS BINARY)
              AND CAST(contrasena AS BINARY) = CAST(? AS BINARY)
            LIMIT 1
            "#,
        )
        .bind(usuario)
        .bind(contrasena)
        .fetch_optional(&self.pool)
        .await?;

        Ok(sesion)
    }

    /// Eliminar un empleado y renumerar los ids restantes.
    ///
    /// Ambos pasos usan la misma conexión porque la renumeración depende de
    /// una variable de sesión de MySQL.
    pub async fn delete_and_resequence(&self, id: i32) -> Result<u64, AppError> {
        let mut conn = self.pool.acquire().await?;
        let eliminados = Self::delete(&mut conn, id).await?;
        Self::resequence_ids(&mut conn).await?;
        Ok(eliminados)
    }

    pub async fn delete(conn: &mut MySqlConnection, id: i32) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM roles WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected())
    }

    /// Mantenimiento de la tabla `roles`: deja los ids como 1..N conservando
    /// el orden relativo y reinicia AUTO_INCREMENT, de modo que el siguiente
    /// empleado recibe N+1. Cambia los ids de filas no relacionadas.
    pub async fn resequence_ids(conn: &mut MySqlConnection) -> Result<(), AppError> {
        // Protocolo de texto: sentencias de mantenimiento sin parámetros
        (&mut *conn).execute("SET @count = 0").await?;
        (&mut *conn)
            .execute("UPDATE roles SET id = (@count := @count + 1) ORDER BY id")
            .await?;
        // MySQL ajusta el valor a MAX(id) + 1
        (&mut *conn)
            .execute("ALTER TABLE roles AUTO_INCREMENT = 1")
            .await?;

        Ok(())
    }
}
