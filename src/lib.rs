//! Backend del parqueadero
//!
//! Registro de empleados, beneficiarios y vehículos, ocupación de puestos,
//! credenciales QR y formulario de contacto sobre MySQL.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use routes::create_app_router;
pub use state::AppState;
