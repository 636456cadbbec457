use axum::{extract::State, routing::post, Json, Router};

use crate::controllers::contacto_controller::ContactoController;
use crate::dto::contacto_dto::{ContactoRequest, ContactoResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_contacto_router() -> Router<AppState> {
    Router::new().route("/contactar", post(contactar))
}

async fn contactar(
    State(state): State<AppState>,
    Json(request): Json<ContactoRequest>,
) -> Result<Json<ContactoResponse>, AppError> {
    let controller = ContactoController::new(state.pool.clone());
    let response = controller.submit(request).await?;
    Ok(Json(response))
}
