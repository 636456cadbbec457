//! Mensaje del formulario de contacto

#[derive(Debug, Clone)]
pub struct Contacto {
    pub nombre: String,
    pub telefono: i64,
    pub email: String,
    pub mensaje: String,
}
