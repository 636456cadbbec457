//! Credencial QR del beneficiario
//!
//! Texto fijo con los datos del beneficiario y su vehículo, renderizado
//! como PNG y codificado en base64.

use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{ImageFormat, Luma};
use qrcode::QrCode;

use crate::models::beneficiario::CredencialQr;
use crate::utils::errors::AppError;

/// Tamaño en píxeles de cada módulo del QR
const MODULE_PX: u32 = 10;

pub fn texto_credencial(c: &CredencialQr) -> String {
    format!(
        "Nombre: {}\nApellido: {}\nDocumento: {}\nPlaca: {}\nTipo de vehículo: {}",
        c.nombre, c.apellido, c.documento, c.placa, c.tipovehiculo
    )
}

/// Renderizar `texto` como QR en PNG
pub fn generar_png(texto: &str) -> Result<Vec<u8>, AppError> {
    let code = QrCode::new(texto.as_bytes()).map_err(|e| AppError::Qr(e.to_string()))?;
    let imagen = code
        .render::<Luma<u8>>()
        .module_dimensions(MODULE_PX, MODULE_PX)
        .quiet_zone(true)
        .build();

    let mut png = Cursor::new(Vec::new());
    imagen
        .write_to(&mut png, ImageFormat::Png)
        .map_err(|e| AppError::Qr(e.to_string()))?;

    Ok(png.into_inner())
}

/// PNG del QR en base64 (alfabeto estándar, con padding)
pub fn generar_base64(texto: &str) -> Result<String, AppError> {
    generar_png(texto).map(|png| STANDARD.encode(png))
}

/// Igual que [`generar_base64`] pero fuera del runtime async
pub async fn generar_base64_async(texto: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || generar_base64(&texto))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn credencial() -> CredencialQr {
        CredencialQr {
            nombre: "Ana".to_string(),
            apellido: "Gil".to_string(),
            documento: 1020,
            placa: "ABC123".to_string(),
            tipovehiculo: "carro".to_string(),
        }
    }

    #[test]
    fn test_texto_credencial_layout() {
        assert_eq!(
            texto_credencial(&credencial()),
            "Nombre: Ana\nApellido: Gil\nDocumento: 1020\nPlaca: ABC123\nTipo de vehículo: carro"
        );
    }

    #[test]
    fn test_generar_png_signature() {
        let png = generar_png(&texto_credencial(&credencial())).unwrap();
        assert_eq!(&png[..8], &PNG_SIGNATURE);
    }

    #[tokio::test]
    async fn test_base64_decodes_to_png() {
        let encoded = generar_base64_async(texto_credencial(&credencial()))
            .await
            .unwrap();
        let decoded = STANDARD.decode(encoded).unwrap();
        assert_eq!(&decoded[..8], &PNG_SIGNATURE);
    }
}
