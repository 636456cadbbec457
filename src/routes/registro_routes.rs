use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::registro_controller::RegistroController;
use crate::dto::common_dto::ResultadoResponse;
use crate::dto::registro_dto::{
    IngresoDiaResponse, PuestosResponse, RegistroResponse, SalidaDiaResponse,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_registro_router() -> Router<AppState> {
    Router::new()
        .route("/mostraregingresosalida", get(mostrar_ingreso_salida))
        .route("/puestos/", get(puestos))
        .route("/puestos", get(puestos))
        .route("/ingreso_dia", get(ingreso_dia))
        .route("/salida_dia", get(salida_dia))
}

async fn mostrar_ingreso_salida(
    State(state): State<AppState>,
) -> Result<Json<ResultadoResponse<Vec<RegistroResponse>>>, AppError> {
    let controller = RegistroController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn puestos(State(state): State<AppState>) -> Result<Json<PuestosResponse>, AppError> {
    let controller = RegistroController::new(state.pool.clone());
    let response = controller.puestos().await?;
    Ok(Json(response))
}

async fn ingreso_dia(State(state): State<AppState>) -> Result<Json<IngresoDiaResponse>, AppError> {
    let controller = RegistroController::new(state.pool.clone());
    let response = controller.ingreso_dia().await?;
    Ok(Json(response))
}

async fn salida_dia(State(state): State<AppState>) -> Result<Json<SalidaDiaResponse>, AppError> {
    let controller = RegistroController::new(state.pool.clone());
    let response = controller.salida_dia().await?;
    Ok(Json(response))
}
