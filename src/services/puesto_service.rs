//! Estado de ocupación de los puestos
//!
//! Los puestos son fijos y van del 1 al [`TOTAL_PUESTOS`].

use std::collections::HashSet;

use crate::dto::registro_dto::{EstadoPuesto, PuestoResponse};

/// Cantidad de puestos del parqueadero
pub const TOTAL_PUESTOS: i32 = 20;

/// Estado de cada puesto, en orden de id.
///
/// Un puesto está ocupado si aparece en `ocupados`; los ids fuera de
/// 1..=TOTAL_PUESTOS se ignoran.
pub fn estado_puestos(ocupados: &HashSet<i32>) -> Vec<PuestoResponse> {
    (1..=TOTAL_PUESTOS)
        .map(|id| PuestoResponse {
            id,
            estado: if ocupados.contains(&id) {
                EstadoPuesto::Ocupado
            } else {
                EstadoPuesto::Disponible
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_available_when_empty() {
        let puestos = estado_puestos(&HashSet::new());
        assert_eq!(puestos.len(), 20);
        assert!(puestos.iter().all(|p| p.estado == EstadoPuesto::Disponible));
        assert_eq!(puestos.first().map(|p| p.id), Some(1));
        assert_eq!(puestos.last().map(|p| p.id), Some(20));
    }

    #[test]
    fn test_marks_occupied_and_ignores_out_of_range() {
        let ocupados: HashSet<i32> = [1, 7, 20, 21, 0, -3].into_iter().collect();
        let puestos = estado_puestos(&ocupados);

        assert_eq!(puestos.len(), 20);
        for p in &puestos {
            let esperado = if [1, 7, 20].contains(&p.id) {
                EstadoPuesto::Ocupado
            } else {
                EstadoPuesto::Disponible
            };
            assert_eq!(p.estado, esperado, "puesto {}", p.id);
        }
    }
}
