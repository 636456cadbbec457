//! Services module
//!
//! Lógica de dominio que no depende de la base de datos: estado de los
//! puestos y generación de la credencial QR.

pub mod puesto_service;
pub mod qr_service;
