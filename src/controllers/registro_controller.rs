use chrono::{Local, NaiveDate};
use sqlx::MySqlPool;

use crate::dto::common_dto::ResultadoResponse;
use crate::dto::registro_dto::{
    IngresoDiaResponse, PuestosResponse, RegistroResponse, SalidaDiaResponse,
};
use crate::repositories::registro_repository::RegistroRepository;
use crate::services::puesto_service;
use crate::utils::errors::AppError;

pub struct RegistroController {
    repository: RegistroRepository,
}

impl RegistroController {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            repository: RegistroRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<ResultadoResponse<Vec<RegistroResponse>>, AppError> {
        let registros = self.repository.list_all().await?;
        Ok(ResultadoResponse::new(
            registros.into_iter().map(RegistroResponse::from).collect(),
        ))
    }

    pub async fn puestos(&self) -> Result<PuestosResponse, AppError> {
        let ocupados = self.repository.occupied_puestos().await?;
        Ok(PuestosResponse {
            puestos: puesto_service::estado_puestos(&ocupados),
        })
    }

    /// Ingresos con fecha de hoy (reloj local, se evalúa en cada llamada)
    pub async fn ingreso_dia(&self) -> Result<IngresoDiaResponse, AppError> {
        let ingreso_dia = self.repository.count_ingresos_on(hoy()).await?;
        Ok(IngresoDiaResponse { ingreso_dia })
    }

    pub async fn salida_dia(&self) -> Result<SalidaDiaResponse, AppError> {
        let salida_dia = self.repository.count_salidas_on(hoy()).await?;
        Ok(SalidaDiaResponse { salida_dia })
    }
}

fn hoy() -> NaiveDate {
    Local::now().date_naive()
}
