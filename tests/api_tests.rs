//! Pruebas del router completo sin base de datos disponible.
//!
//! El pool apunta a un puerto cerrado, así que todo lo que llega a MySQL
//! debe terminar en 503 y todo lo que se rechaza antes no debe tocarlo.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use parqueadero_backend::config::EnvironmentConfig;
use parqueadero_backend::{create_app_router, AppState};

fn create_test_app() -> Router {
    let config = EnvironmentConfig::from_lookup(|key| {
        let value = match key {
            "DB_HOST" => "127.0.0.1",
            "DB_USER" => "parqueadero",
            "DB_PASSWORD" => "parqueadero",
            "DB_NAME" => "parqueadero",
            "DB_PORT" => "1",
            "DB_ACQUIRE_TIMEOUT_SECS" => "1",
            _ => return None,
        };
        Some(value.to_string())
    })
    .unwrap();

    let pool = config.database.create_pool();
    create_app_router(AppState::new(pool, config))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_unreachable_database_is_service_unavailable() {
    let (status, body) = send(create_test_app(), get("/puestos/")).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "SERVICE_UNAVAILABLE");
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn test_login_without_database_is_not_unauthorized() {
    let (status, _) = send(
        create_test_app(),
        json_request(
            Method::POST,
            "/login",
            json!({ "usuario": "ana", "contrasena": "123" }),
        ),
    )
    .await;

    // Nunca se confunde un fallo de conexión con credenciales inválidas
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_invalid_payload_is_rejected() {
    let (status, _) = send(
        create_test_app(),
        json_request(
            Method::POST,
            "/registrar_bene",
            json!({
                "nombre": "Ana",
                "apellido": "Gil",
                "documento": "no-es-numero",
                "telefono": 300,
                "usuario": "ana",
                "contrasena": "123"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_missing_content_type_is_rejected() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/contactar")
        .body(Body::from(r#"{"nombre":"Luis"}"#))
        .unwrap();
    let (status, _) = send(create_test_app(), request).await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let (status, _) = send(create_test_app(), get("/buscarempleado/abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (status, _) = send(create_test_app(), get("/no-existe")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wrong_method_is_rejected() {
    let (status, _) = send(create_test_app(), get("/registrar_rol")).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_health_reports_database_down() {
    let (status, body) = send(create_test_app(), get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "down");
}

#[tokio::test]
async fn test_cors_preflight_allows_any_origin() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/contactar")
        .header(header::ORIGIN, "http://frontend.local")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = create_test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://frontend.local"
    );
}
