use serde::{Deserialize, Serialize};

use super::common_dto::lenient_i64;
use crate::models::contacto::Contacto;

#[derive(Debug, Deserialize)]
pub struct ContactoRequest {
    pub nombre: String,
    #[serde(deserialize_with = "lenient_i64")]
    pub telefono: i64,
    pub email: String,
    pub mensaje: String,
}

impl From<ContactoRequest> for Contacto {
    fn from(r: ContactoRequest) -> Self {
        Contacto {
            nombre: r.nombre,
            telefono: r.telefono,
            email: r.email,
            mensaje: r.mensaje,
        }
    }
}

/// `datos` es el eco de los valores guardados, en orden de columna
#[derive(Debug, Serialize)]
pub struct ContactoResponse {
    pub mensaje: String,
    pub datos: (String, i64, String, String),
}

impl From<Contacto> for ContactoResponse {
    fn from(c: Contacto) -> Self {
        Self {
            mensaje: "Información enviada correctamente".to_string(),
            datos: (c.nombre, c.telefono, c.email, c.mensaje),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datos_is_positional_array() {
        let contacto = Contacto {
            nombre: "Luis".to_string(),
            telefono: 3001234567,
            email: "luis@correo.com".to_string(),
            mensaje: "Hola".to_string(),
        };
        let body = serde_json::to_value(ContactoResponse::from(contacto)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "mensaje": "Información enviada correctamente",
                "datos": ["Luis", 3001234567i64, "luis@correo.com", "Hola"]
            })
        );
    }
}
