use sqlx::MySqlPool;
use tracing::info;

use crate::dto::contacto_dto::{ContactoRequest, ContactoResponse};
use crate::models::contacto::Contacto;
use crate::repositories::contacto_repository::ContactoRepository;
use crate::utils::errors::AppError;

pub struct ContactoController {
    repository: ContactoRepository,
}

impl ContactoController {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            repository: ContactoRepository::new(pool),
        }
    }

    pub async fn submit(&self, request: ContactoRequest) -> Result<ContactoResponse, AppError> {
        let contacto = Contacto::from(request);
        self.repository.create(&contacto).await?;
        info!("✉️  Mensaje de contacto recibido de {}", contacto.nombre);
        Ok(ContactoResponse::from(contacto))
    }
}
