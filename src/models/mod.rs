//! Modelos del sistema
//!
//! Filas tal como salen del schema MySQL (`migrations/schema.sql`).

pub mod beneficiario;
pub mod contacto;
pub mod registro;
pub mod rol;
