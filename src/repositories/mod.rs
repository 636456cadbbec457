//! Repositorios
//!
//! Cada repositorio encapsula las consultas SQL de una tabla (o de un
//! grupo de tablas que se escriben juntas).

pub mod beneficiario_repository;
pub mod contacto_repository;
pub mod registro_repository;
pub mod rol_repository;
