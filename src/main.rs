use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use parqueadero_backend::config::EnvironmentConfig;
use parqueadero_backend::database::DatabaseConnection;
use parqueadero_backend::{create_app_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🅿️  Parqueadero - API de gestión");
    info!("================================");

    let config = EnvironmentConfig::from_env()?;

    // El pool es perezoso: el servidor arranca aunque MySQL no responda
    let db_connection = DatabaseConnection::new(&config.database);
    db_connection.check().await;

    let addr: SocketAddr = config.server_url().parse()?;
    let app_state = AppState::new(db_connection.pool().clone(), config);
    let app = create_app_router(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("👤 Empleados: /registrar_rol /mostrarempleados /buscarempleado/:id /actualizarempleado/:id /eliminarempleados/:id");
    info!("🔐 Sesión: /iniciar_sesion (empleados) /login (beneficiarios)");
    info!("🚗 Beneficiarios: /registrar_bene /mostrarbeneficiarios /buscarbeneficiario/:id /actualizarbeneficiario/:id /eliminarbeneficiario/:id /obtener_qr/:usuario /total_bene");
    info!("📋 Registros: /mostraregingresosalida /puestos/ /ingreso_dia /salida_dia");
    info!("✉️  Contacto: /contactar");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("No se pudo instalar el manejador de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("No se pudo instalar el manejador de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
