use sqlx::MySqlPool;
use tracing::{info, warn};

use crate::dto::beneficiario_dto::{
    ActualizarBeneficiarioRequest, QrResponse, RegistrarBeneficiarioRequest,
    TotalBeneficiariosResponse,
};
use crate::dto::common_dto::{InformacionResponse, MensajeResponse, ResultadoResponse};
use crate::models::beneficiario::{BeneficiarioVehiculo, CambiosBeneficiario, NuevoBeneficiario};
use crate::repositories::beneficiario_repository::BeneficiarioRepository;
use crate::services::qr_service;
use crate::utils::errors::{not_found_error, AppError};

pub struct BeneficiarioController {
    repository: BeneficiarioRepository,
}

impl BeneficiarioController {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            repository: BeneficiarioRepository::new(pool),
        }
    }

    pub async fn register(
        &self,
        request: RegistrarBeneficiarioRequest,
    ) -> Result<MensajeResponse, AppError> {
        let nuevo = NuevoBeneficiario::from(request);

        if let Err(e) = self.repository.create(&nuevo).await {
            if matches!(e, AppError::Conflict(_)) {
                warn!("Documento {} ya registrado", nuevo.documento);
            }
            return Err(e);
        }

        info!(
            "🚗 Beneficiario {} registrado con {} vehículo(s)",
            nuevo.documento,
            nuevo.vehiculos.len()
        );
        Ok(MensajeResponse::new(
            "Beneficiario y vehículos registrados correctamente",
        ))
    }

    pub async fn list(&self) -> Result<ResultadoResponse<Vec<BeneficiarioVehiculo>>, AppError> {
        let filas = self.repository.list_all().await?;
        Ok(ResultadoResponse::new(filas))
    }

    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<ResultadoResponse<BeneficiarioVehiculo>, AppError> {
        let fila = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Beneficiario no encontrado"))?;

        Ok(ResultadoResponse::new(fila))
    }

    pub async fn update(
        &self,
        id: i32,
        request: ActualizarBeneficiarioRequest,
    ) -> Result<MensajeResponse, AppError> {
        let cambios = CambiosBeneficiario::from(request);
        self.repository.update(id, &cambios).await?;

        info!("✏️  Beneficiario {} actualizado", id);
        Ok(MensajeResponse::new(
            "Beneficiario y vehículos actualizados correctamente",
        ))
    }

    pub async fn delete(&self, id: i32) -> Result<InformacionResponse, AppError> {
        let eliminados = self.repository.delete(id).await?;
        info!("🗑️  Beneficiario {} eliminado ({} filas)", id, eliminados);
        Ok(InformacionResponse::new("Beneficiario eliminado correctamente"))
    }

    /// Credencial QR con los datos del beneficiario y un vehículo
    pub async fn qr(&self, usuario: &str) -> Result<QrResponse, AppError> {
        let credencial = self
            .repository
            .find_credencial(usuario)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("QR no encontrado para el usuario {}", usuario))
            })?;

        let texto = qr_service::texto_credencial(&credencial);
        let qr_code = qr_service::generar_base64_async(texto).await?;

        Ok(QrResponse { qr_code })
    }

    pub async fn total(&self) -> Result<TotalBeneficiariosResponse, AppError> {
        let total_beneficiarios = self.repository.count().await?;
        Ok(TotalBeneficiariosResponse {
            total_beneficiarios,
        })
    }
}
