use serde::{Deserialize, Serialize};

use super::common_dto::{lenient_i64, lenient_opt_i64};
use crate::models::beneficiario::{CambiosBeneficiario, NuevoBeneficiario, Vehiculo};

#[derive(Debug, Deserialize)]
pub struct VehiculoRequest {
    pub placa: String,
    pub tipovehiculo: String,
}

impl From<VehiculoRequest> for Vehiculo {
    fn from(v: VehiculoRequest) -> Self {
        Vehiculo {
            placa: v.placa,
            tipovehiculo: v.tipovehiculo,
        }
    }
}

// Request para registrar un beneficiario con sus vehículos
#[derive(Debug, Deserialize)]
pub struct RegistrarBeneficiarioRequest {
    pub nombre: String,
    pub apellido: String,
    #[serde(deserialize_with = "lenient_i64")]
    pub documento: i64,
    #[serde(deserialize_with = "lenient_i64")]
    pub telefono: i64,
    pub usuario: String,
    pub contrasena: String,
    #[serde(default)]
    pub vehiculos: Vec<VehiculoRequest>,
}

impl From<RegistrarBeneficiarioRequest> for NuevoBeneficiario {
    fn from(r: RegistrarBeneficiarioRequest) -> Self {
        NuevoBeneficiario {
            nombre: r.nombre,
            apellido: r.apellido,
            documento: r.documento,
            telefono: r.telefono,
            usuario: r.usuario,
            contrasena: r.contrasena,
            vehiculos: r.vehiculos.into_iter().map(Vehiculo::from).collect(),
        }
    }
}

// Request para actualizar un beneficiario; sólo actualiza vehículos existentes
#[derive(Debug, Deserialize)]
pub struct ActualizarBeneficiarioRequest {
    pub nombre: String,
    pub apellido: String,
    #[serde(deserialize_with = "lenient_i64")]
    pub documento: i64,
    #[serde(default, deserialize_with = "lenient_opt_i64")]
    pub telefono: Option<i64>,
    pub usuario: String,
    pub contrasena: String,
    #[serde(default)]
    pub vehiculos: Option<Vec<VehiculoRequest>>,
}

impl From<ActualizarBeneficiarioRequest> for CambiosBeneficiario {
    fn from(r: ActualizarBeneficiarioRequest) -> Self {
        CambiosBeneficiario {
            nombre: r.nombre,
            apellido: r.apellido,
            documento: r.documento,
            telefono: r.telefono,
            usuario: r.usuario,
            contrasena: r.contrasena,
            vehiculos: r
                .vehiculos
                .unwrap_or_default()
                .into_iter()
                .map(Vehiculo::from)
                .collect(),
        }
    }
}

// Response de /obtener_qr
#[derive(Debug, Serialize)]
pub struct QrResponse {
    pub qr_code: String,
}

// Response de /total_bene
#[derive(Debug, Serialize)]
pub struct TotalBeneficiariosResponse {
    pub total_beneficiarios: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registrar_without_vehiculos() {
        let request: RegistrarBeneficiarioRequest = serde_json::from_str(
            r#"{"nombre":"Ana","apellido":"Gil","documento":1020,"telefono":"3001234567",
                "usuario":"ana","contrasena":"123"}"#,
        )
        .unwrap();
        let nuevo = NuevoBeneficiario::from(request);
        assert!(nuevo.vehiculos.is_empty());
        assert_eq!(nuevo.telefono, 3001234567);
    }

    #[test]
    fn test_actualizar_null_vehiculos() {
        let request: ActualizarBeneficiarioRequest = serde_json::from_str(
            r#"{"nombre":"Ana","apellido":"Gil","documento":1020,
                "usuario":"ana","contrasena":"123","vehiculos":null}"#,
        )
        .unwrap();
        let cambios = CambiosBeneficiario::from(request);
        assert!(cambios.vehiculos.is_empty());
        assert_eq!(cambios.telefono, None);
    }
}
