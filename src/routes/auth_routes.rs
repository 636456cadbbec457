use axum::{extract::State, routing::post, Json, Router};

use crate::controllers::auth_controller::AuthController;
use crate::dto::auth_dto::{AppLoginResponse, LoginRequest, RolLoginResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/iniciar_sesion", post(iniciar_sesion))
        .route("/login", post(login))
}

// Login de empleados
async fn iniciar_sesion(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<RolLoginResponse>, AppError> {
    let controller = AuthController::new(state.pool.clone());
    let response = controller.login_rol(request).await?;
    Ok(Json(response))
}

// Login de beneficiarios desde la app
async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AppLoginResponse>, AppError> {
    let controller = AuthController::new(state.pool.clone());
    let response = controller.login_app(request).await?;
    Ok(Json(response))
}
