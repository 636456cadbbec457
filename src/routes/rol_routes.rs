use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::rol_controller::RolController;
use crate::dto::common_dto::{InformacionResponse, ResultadoResponse};
use crate::dto::rol_dto::RolRequest;
use crate::models::rol::Rol;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_rol_router() -> Router<AppState> {
    Router::new()
        .route("/registrar_rol", post(registrar_rol))
        .route("/mostrarempleados", get(mostrar_empleados))
        .route("/buscarempleado/:id", get(buscar_empleado))
        .route("/actualizarempleado/:id", put(actualizar_empleado))
        .route("/eliminarempleados/:id", delete(eliminar_empleado))
}

async fn registrar_rol(
    State(state): State<AppState>,
    Json(request): Json<RolRequest>,
) -> Result<Json<InformacionResponse>, AppError> {
    let controller = RolController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn mostrar_empleados(
    State(state): State<AppState>,
) -> Result<Json<ResultadoResponse<Vec<Rol>>>, AppError> {
    let controller = RolController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn buscar_empleado(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ResultadoResponse<Rol>>, AppError> {
    let controller = RolController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn actualizar_empleado(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<RolRequest>,
) -> Result<Json<InformacionResponse>, AppError> {
    let controller = RolController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn eliminar_empleado(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<InformacionResponse>, AppError> {
    let controller = RolController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
