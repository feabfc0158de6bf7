//! Seed the guestbook with dummy signatures.
//!
//! Usage: `seed [N]` (default 10). Reads `DATABASE_URL` the same way as the
//! server.

use guestbook_service::{seed, settings::Settings, storage::SignatureStore, telemetry};

const DEFAULT_COUNT: usize = 10;

fn main() {
    let settings = Settings::from_env();
    telemetry::init_tracing();

    let count = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<usize>() {
            Ok(count) => count,
            Err(e) => {
                tracing::error!(arg = %arg, error = %e, "Invalid signature count");
                std::process::exit(1);
            }
        },
        None => DEFAULT_COUNT,
    };

    if let Err(message) = settings.validate() {
        tracing::error!("{message}");
        std::process::exit(1);
    }
    let Some(db_path) = settings.database_path() else {
        std::process::exit(1);
    };

    let result = SignatureStore::open(db_path)
        .and_then(|store| seed::add_dummy_signatures(&store, count));
    match result {
        Ok(created) => tracing::info!(count = created.len(), "Seeded guestbook"),
        Err(e) => {
            tracing::error!(error = %e, "Seeding failed");
            std::process::exit(1);
        }
    }

    telemetry::shutdown_tracing();
}
