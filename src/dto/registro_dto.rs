use chrono::NaiveDateTime;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use crate::models::registro::Registro;

// Fila de /mostraregingresosalida
#[derive(Debug, Serialize)]
pub struct RegistroResponse {
    pub placa: String,
    pub documento: Option<i64>,
    pub estado: String,
    pub fecha_ingreso: Option<NaiveDateTime>,
    pub fecha_salida: Option<NaiveDateTime>,
    pub puesto: Option<i32>,
    pub valor_parqueo: Option<f64>,
}

impl From<Registro> for RegistroResponse {
    fn from(r: Registro) -> Self {
        Self {
            placa: r.placa,
            documento: r.documento,
            estado: r.estado,
            fecha_ingreso: r.fecha_ingreso,
            fecha_salida: r.fecha_salida,
            puesto: r.puesto,
            valor_parqueo: r.valor_parqueo.and_then(|v| v.to_f64()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EstadoPuesto {
    Ocupado,
    Disponible,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PuestoResponse {
    pub id: i32,
    pub estado: EstadoPuesto,
}

#[derive(Debug, Serialize)]
pub struct PuestosResponse {
    pub puestos: Vec<PuestoResponse>,
}

#[derive(Debug, Serialize)]
pub struct IngresoDiaResponse {
    pub ingreso_dia: i64,
}

#[derive(Debug, Serialize)]
pub struct SalidaDiaResponse {
    pub salida_dia: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    #[test]
    fn test_registro_serializes_like_existing_api() {
        let ingreso = NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();
        let registro = Registro {
            placa: "ABC123".to_string(),
            documento: Some(1020),
            estado: "ingreso".to_string(),
            fecha_ingreso: Some(ingreso),
            fecha_salida: None,
            puesto: Some(7),
            valor_parqueo: Some(Decimal::new(350050, 2)),
        };

        let body = serde_json::to_value(RegistroResponse::from(registro)).unwrap();
        assert_eq!(body["fecha_ingreso"], "2026-03-14T08:30:00");
        assert!(body["fecha_salida"].is_null());
        assert_eq!(body["valor_parqueo"], 3500.5);
        assert_eq!(body["puesto"], 7);
    }

    #[test]
    fn test_estado_puesto_lowercase() {
        let puesto = PuestoResponse {
            id: 3,
            estado: EstadoPuesto::Ocupado,
        };
        assert_eq!(
            serde_json::to_value(puesto).unwrap(),
            serde_json::json!({ "id": 3, "estado": "ocupado" })
        );
    }
}
