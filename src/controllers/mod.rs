//! Controladores
//!
//! Reglas de cada caso de uso entre las rutas HTTP y los repositorios.

pub mod auth_controller;
pub mod beneficiario_controller;
pub mod contacto_controller;
pub mod registro_controller;
pub mod rol_controller;
