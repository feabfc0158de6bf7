//! Guestbook Service - signature CRUD over JSON/HTTP
//!
//! Opens the signature database named by `DATABASE_URL` and serves the
//! guestbook API until Ctrl-C or SIGTERM.

use guestbook_service::{app::build_router, settings::Settings, storage::SignatureStore, telemetry};

#[tokio::main]
async fn main() {
    let settings = Settings::from_env();
    telemetry::init_tracing();

    tracing::info!("Starting guestbook service...");

    if let Err(message) = settings.validate() {
        tracing::error!("{message}");
        std::process::exit(1);
    }

    let Some(db_path) = settings.database_path() else {
        std::process::exit(1);
    };
    let store = match SignatureStore::open(db_path) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "Failed to open signature database");
            std::process::exit(1);
        }
    };

    let app = build_router(&settings, store);

    let addr = settings.socket_addr();
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %addr, "Failed to bind listener");
            std::process::exit(1);
        }
    };
    tracing::info!(
        public_dir = %settings.public_dir().display(),
        "Server is listening on port {}!",
        settings.port()
    );

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "Server error");
    }

    tracing::info!("Guestbook service stopped");
    telemetry::shutdown_tracing();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
