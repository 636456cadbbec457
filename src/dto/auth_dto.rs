use serde::{Deserialize, Serialize};

// Login request (empleados y beneficiarios)
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub usuario: String,
    pub contrasena: String,
}

// Respuesta de /iniciar_sesion
#[derive(Debug, Serialize)]
pub struct RolLoginResponse {
    pub mensaje: String,
    pub usuario: String,
    pub rol: String,
}

// Respuesta de /login
#[derive(Debug, Serialize)]
pub struct AppLoginResponse {
    pub success: bool,
    pub message: String,
    pub usuario: String,
}

impl AppLoginResponse {
    pub fn success(usuario: String) -> Self {
        Self {
            success: true,
            message: "Inicio de sesión exitoso".to_string(),
            usuario,
        }
    }
}
