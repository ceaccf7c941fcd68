//! The formcraft API server binary.
//!
//! Loads settings from a TOML file given as the first argument (defaults
//! apply when omitted or missing), sets up logging, and serves the form
//! API over the JSON-backed store.

use formcraft_core::logging::setup_logging;
use formcraft_core::{FormcraftResult, Settings};

#[tokio::main]
async fn main() -> FormcraftResult<()> {
    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::from_toml_file(&path)?,
        None if std::path::Path::new("formcraft.toml").exists() => {
            Settings::from_toml_file("formcraft.toml")?
        }
        None => Settings::default(),
    };

    setup_logging(&settings);
    tracing::info!(
        bind_addr = %settings.bind_addr,
        db_path = %settings.db_path.display(),
        "starting formcraft server"
    );

    formcraft_server::run(settings).await
}
