use serde::{Deserialize, Deserializer, Serialize};

// {"resultado": ...}
#[derive(Debug, Serialize)]
pub struct ResultadoResponse<T> {
    pub resultado: T,
}

impl<T> ResultadoResponse<T> {
    pub fn new(resultado: T) -> Self {
        Self { resultado }
    }
}

// {"informacion": "..."}
#[derive(Debug, Serialize)]
pub struct InformacionResponse {
    pub informacion: String,
}

impl InformacionResponse {
    pub fn new(informacion: &str) -> Self {
        Self {
            informacion: informacion.to_string(),
        }
    }
}

// {"mensaje": "..."}
#[derive(Debug, Serialize)]
pub struct MensajeResponse {
    pub mensaje: String,
}

impl MensajeResponse {
    pub fn new(mensaje: &str) -> Self {
        Self {
            mensaje: mensaje.to_string(),
        }
    }
}

/// Acepta un entero JSON o un string numérico (`"1020"`), como hacen los
/// formularios web que ya consumen la API.
pub fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Numero {
        Entero(i64),
        Texto(String),
    }

    match Numero::deserialize(deserializer)? {
        Numero::Entero(n) => Ok(n),
        Numero::Texto(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("'{}' no es un número entero", s))),
    }
}

/// Variante opcional de [`lenient_i64`]
pub fn lenient_opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Envoltura(#[serde(deserialize_with = "lenient_i64")] i64);

    Ok(Option::<Envoltura>::deserialize(deserializer)?.map(|Envoltura(n)| n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Prueba {
        #[serde(deserialize_with = "lenient_i64")]
        documento: i64,
        #[serde(default, deserialize_with = "lenient_opt_i64")]
        telefono: Option<i64>,
    }

    #[test]
    fn test_lenient_accepts_number_and_string() {
        let a: Prueba = serde_json::from_str(r#"{"documento": 1020}"#).unwrap();
        assert_eq!(a.documento, 1020);
        assert_eq!(a.telefono, None);

        let b: Prueba =
            serde_json::from_str(r#"{"documento": " 1020 ", "telefono": "3001234567"}"#).unwrap();
        assert_eq!(b.documento, 1020);
        assert_eq!(b.telefono, Some(3001234567));

        let c: Prueba = serde_json::from_str(r#"{"documento": 1, "telefono": null}"#).unwrap();
        assert_eq!(c.telefono, None);
    }

    #[test]
    fn test_lenient_rejects_text() {
        assert!(serde_json::from_str::<Prueba>(r#"{"documento": "abc"}"#).is_err());
        assert!(serde_json::from_str::<Prueba>(r#"{"documento": 1.5}"#).is_err());
    }

    #[test]
    fn test_wrappers_serialize_with_contract_keys() {
        let body = serde_json::to_value(ResultadoResponse::new(Vec::<i32>::new())).unwrap();
        assert_eq!(body, serde_json::json!({ "resultado": [] }));

        let body = serde_json::to_value(InformacionResponse::new("ok")).unwrap();
        assert_eq!(body, serde_json::json!({ "informacion": "ok" }));
    }
}
