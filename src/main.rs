use anyhow::Result;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};
use dotenvy::dotenv;

use transit_marketplace::config::environment::EnvironmentConfig;
use transit_marketplace::create_app;
use transit_marketplace::database::{create_pool, run_migrations};
use transit_marketplace::services::bootstrap::seed_admin_account;
use transit_marketplace::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::default();

    // Configurar logging, más verboso fuera de producción
    let log_level = if config.is_development() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(log_level).init();

    info!("🚐 Fika Transit & Advertising Marketplace API");
    info!("=============================================");

    // Inicializar base de datos
    let pool = match create_pool().await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    run_migrations(&pool).await?;
    info!("✅ Migraciones aplicadas");

    // Sembrar la cuenta admin cuando está configurada
    seed_admin_account(&pool, &config).await?;

    let addr: SocketAddr = config.server_addr().parse()?;
    let state = AppState::new(pool, config);
    let app = create_app(state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🔑 Endpoints de Auth:");
    info!("   POST /api/auth/signup - Crear cuenta");
    info!("   POST /api/auth/login - Login");
    info!("   POST /api/auth/logout - Logout");
    info!("   GET  /api/auth/session - Principal de la sesión");
    info!("   GET  /api/auth/me - Usuario actual + profile");
    info!("🧭 Role router:");
    info!("   GET  /api/route-me - Destino del dashboard del caller");
    info!("🚌 Endpoints de Operator:");
    info!("   GET  /api/operator/dashboard - Estado de vista del operator");
    info!("   POST /api/operator/profile - Crear profile de operator");
    info!("   POST /api/operator/routes - Agregar route");
    info!("   POST /api/operator/vehicles - Agregar vehículo");
    info!("   POST /api/operator/assignments - Asignar driver");
    info!("📢 Endpoints de Advertiser:");
    info!("   GET  /api/advertiser/dashboard - Estado de vista del advertiser");
    info!("   POST /api/advertiser/profile - Crear profile de advertiser");
    info!("   POST /api/advertiser/campaigns - Crear campaña");
    info!("🏪 Endpoints de Venue:");
    info!("   GET  /api/venue/dashboard - Estado de vista del venue");
    info!("   POST /api/venue/profile - Registrar venue");
    info!("🚗 Endpoints de Driver:");
    info!("   GET  /api/driver/dashboard - Estado de vista del driver");
    info!("   POST /api/driver/trips/start - Iniciar trip");
    info!("   POST /api/driver/trips/end - Terminar trip");
    info!("   POST /api/driver/ad-plays - Registrar ad play (stub)");
    info!("🧳 Endpoints de Passenger:");
    info!("   GET  /api/passenger/dashboard - Vista placeholder");
    info!("🛡️ Endpoints de Admin:");
    info!("   GET  /api/admin/dashboard - Estado de vista de moderación");
    info!("   PUT  /api/admin/operators/:id/status - Moderar operator");
    info!("   PUT  /api/admin/advertisers/:id/status - Moderar advertiser");
    info!("   PUT  /api/admin/venues/:id/status - Moderar venue");

    // Iniciar servidor en background
    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Error del servidor: {}", e);
                e
            })
    });

    // Esperar a que el servidor termine
    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminó con error: {}", e);
    }

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
