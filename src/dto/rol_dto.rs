use serde::Deserialize;

// Request para registrar o actualizar un empleado
#[derive(Debug, Deserialize)]
pub struct RolRequest {
    pub nombre: String,
    pub apellido: String,
    pub usuario: String,
    pub contrasena: String,
    pub documento: String,
    pub rol: String,
}
