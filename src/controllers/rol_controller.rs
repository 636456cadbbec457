use sqlx::MySqlPool;
use tracing::info;

use crate::dto::common_dto::{InformacionResponse, ResultadoResponse};
use crate::dto::rol_dto::RolRequest;
use crate::models::rol::Rol;
use crate::repositories::rol_repository::RolRepository;
use crate::utils::errors::{not_found_error, AppError};

pub struct RolController {
    repository: RolRepository,
}

impl RolController {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            repository: RolRepository::new(pool),
        }
    }

    /// Registrar un empleado. No verifica que `usuario` sea único.
    pub async fn create(&self, request: RolRequest) -> Result<InformacionResponse, AppError> {
        self.repository.create(&request).await?;
        info!("👤 Empleado '{}' registrado con rol '{}'", request.usuario, request.rol);
        Ok(InformacionResponse::new("Rol registrado correctamente"))
    }

    pub async fn list(&self) -> Result<ResultadoResponse<Vec<Rol>>, AppError> {
        let roles = self.repository.list_all().await?;
        Ok(ResultadoResponse::new(roles))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<ResultadoResponse<Rol>, AppError> {
        let rol = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Empleado no encontrado"))?;

        Ok(ResultadoResponse::new(rol))
    }

    /// Sobrescribe el empleado; un id inexistente no es un error
    pub async fn update(
        &self,
        id: i32,
        request: RolRequest,
    ) -> Result<InformacionResponse, AppError> {
        let actualizados = self.repository.update(id, &request).await?;
        info!("✏️  Empleado {} actualizado ({} filas)", id, actualizados);
        Ok(InformacionResponse::new("empleado actualizado"))
    }

    /// Eliminar y renumerar: los ids de los demás empleados pueden cambiar
    pub async fn delete(&self, id: i32) -> Result<InformacionResponse, AppError> {
        let eliminados = self.repository.delete_and_resequence(id).await?;
        info!("🗑️  Empleado {} eliminado ({} filas), ids reorganizados", id, eliminados);
        Ok(InformacionResponse::new("Empleado eliminado y IDs reorganizados"))
    }
}
