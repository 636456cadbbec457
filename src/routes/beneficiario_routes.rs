use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::beneficiario_controller::BeneficiarioController;
use crate::dto::beneficiario_dto::{
    ActualizarBeneficiarioRequest, QrResponse, RegistrarBeneficiarioRequest,
    TotalBeneficiariosResponse,
};
use crate::dto::common_dto::{InformacionResponse, MensajeResponse, ResultadoResponse};
use crate::models::beneficiario::BeneficiarioVehiculo;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_beneficiario_router() -> Router<AppState> {
    Router::new()
        .route("/registrar_bene", post(registrar_bene))
        .route("/mostrarbeneficiarios", get(mostrar_beneficiarios))
        .route("/buscarbeneficiario/:id", get(buscar_beneficiario))
        .route("/actualizarbeneficiario/:id", put(actualizar_beneficiario))
        .route("/eliminarbeneficiario/:id", delete(eliminar_beneficiario))
        .route("/obtener_qr/:usuario", get(obtener_qr))
        .route("/total_bene", get(total_bene))
}

async fn registrar_bene(
    State(state): State<AppState>,
    Json(request): Json<RegistrarBeneficiarioRequest>,
) -> Result<Json<MensajeResponse>, AppError> {
    let controller = BeneficiarioController::new(state.pool.clone());
    let response = controller.register(request).await?;
    Ok(Json(response))
}

async fn mostrar_beneficiarios(
    State(state): State<AppState>,
) -> Result<Json<ResultadoResponse<Vec<BeneficiarioVehiculo>>>, AppError> {
    let controller = BeneficiarioController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn buscar_beneficiario(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ResultadoResponse<BeneficiarioVehiculo>>, AppError> {
    let controller = BeneficiarioController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn actualizar_beneficiario(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<ActualizarBeneficiarioRequest>,
) -> Result<Json<MensajeResponse>, AppError> {
    let controller = BeneficiarioController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn eliminar_beneficiario(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<InformacionResponse>, AppError> {
    let controller = BeneficiarioController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}

async fn obtener_qr(
    State(state): State<AppState>,
    Path(usuario): Path<String>,
) -> Result<Json<QrResponse>, AppError> {
    let controller = BeneficiarioController::new(state.pool.clone());
    let response = controller.qr(&usuario).await?;
    Ok(Json(response))
}

async fn total_bene(
    State(state): State<AppState>,
) -> Result<Json<TotalBeneficiariosResponse>, AppError> {
    let controller = BeneficiarioController::new(state.pool.clone());
    let response = controller.total().await?;
    Ok(Json(response))
}
