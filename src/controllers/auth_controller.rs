//! Inicio de sesión
//!
//! Empleados (`roles`) y beneficiarios son espacios de credenciales
//! distintos. La comparación es exacta y en texto plano.

use sqlx::MySqlPool;
use tracing::{info, warn};

use crate::dto::auth_dto::{AppLoginResponse, LoginRequest, RolLoginResponse};
use crate::repositories::beneficiario_repository::BeneficiarioRepository;
use crate::repositories::rol_repository::RolRepository;
use crate::utils::errors::{invalid_credentials, AppError};

pub struct AuthController {
    roles: RolRepository,
    beneficiarios: BeneficiarioRepository,
}

impl AuthController {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            roles: RolRepository::new(pool.clone()),
            beneficiarios: BeneficiarioRepository::new(pool),
        }
    }

    pub async fn login_rol(&self, request: LoginRequest) -> Result<RolLoginResponse, AppError> {
        let sesion = self
            .roles
            .authenticate(&request.usuario, &request.contrasena)
            .await?;

        match sesion {
            Some(sesion) => {
                info!("🔓 Empleado '{}' inició sesión", sesion.usuario);
                Ok(RolLoginResponse {
                    mensaje: "Inicio de sesión exitoso".to_string(),
                    usuario: sesion.usuario,
                    rol: sesion.rol,
                })
            }
            None => {
                warn!("🔒 Login de empleado fallido para '{}'", request.usuario);
                Err(invalid_credentials())
            }
        }
    }

    pub async fn login_app(&self, request: LoginRequest) -> Result<AppLoginResponse, AppError> {
        let usuario = self
            .beneficiarios
            .authenticate(&request.usuario, &request.contrasena)
            .await?;

        match usuario {
            Some(usuario) => {
                info!("🔓 Beneficiario '{}' inició sesión", usuario);
                Ok(AppLoginResponse::success(usuario))
            }
            None => {
                warn!("🔒 Login de beneficiario fallido para '{}'", request.usuario);
                Err(invalid_credentials())
            }
        }
    }
}
