//! Módulo de base de datos
//!
//! Maneja el pool de conexiones MySQL

pub mod connection;

pub use connection::DatabaseConnection;
