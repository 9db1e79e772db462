use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};

use fleet_maintenance::config::environment::EnvironmentConfig;
use fleet_maintenance::database;
use fleet_maintenance::repositories::PostgresFleetStore;
use fleet_maintenance::routes::create_app_router;
use fleet_maintenance::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🛠️  Fleet Maintenance - Seguimiento de flotas industriales");
    info!("=========================================================");

    // Inicializar base de datos
    let pool = match database::create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    if let Ok(url) = std::env::var("DATABASE_URL") {
        info!("✅ PostgreSQL conectado: {}", database::mask_database_url(&url));
    }

    // Inicializar almacén de documentos de flota
    let store = PostgresFleetStore::new(pool)
        .await
        .map_err(|e| anyhow::anyhow!("Error inicializando almacén: {}", e))?;

    let config = EnvironmentConfig::default();
    let app_state = AppState::new(Arc::new(store), config.clone());
    let app = create_app_router(app_state);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🏢 Empresas:");
    info!("   POST /api/company/register - Registrar empresa");
    info!("   GET  /api/company - Listar empresas");
    info!("   GET  /api/company/:id - Obtener empresa");
    info!("🚜 Vehículos:");
    info!("   POST /api/company/:company_id/vehicle - Dar de alta vehículo");
    info!("   GET  /api/company/:company_id/vehicle/:id/status - Estado y vida útil");
    info!("   POST /api/company/:company_id/vehicle/:id/reading - Registro diario");
    info!("   POST /api/company/:company_id/vehicle/:id/service - Certificar service");
    info!("   POST /api/company/:company_id/vehicle/:id/toggle - Parada técnica / puesta en marcha");
    info!("   GET  /api/company/:company_id/vehicle/:id/report - Expediente técnico");
    info!("🚨 Alertas:");
    info!("   GET  /api/alerts - Alertas de toda la flota");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
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
