//! Objetos de transferencia (cuerpos JSON de request y response)
//!
//! Los nombres de campo son los del contrato HTTP existente y no se
//! renombran.

pub mod auth_dto;
pub mod beneficiario_dto;
pub mod common_dto;
pub mod contacto_dto;
pub mod registro_dto;
pub mod rol_dto;
