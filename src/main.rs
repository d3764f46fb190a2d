//! NutriLog
//!
//! Console tracker for foods, macros, and daily calorie goals.

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

mod app;
mod build_info;
mod cli;
mod models;
mod nutrition;
mod store;

use app::AppState;
use store::DataStore;

/// Get the data directory from environment or use default
fn get_data_dir() -> PathBuf {
    std::env::var("NUTRILOG_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let mut path = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()))
                .unwrap_or_else(|| PathBuf::from("."));

            // Go up from target/release or target/debug to project root
            if path.ends_with("release") || path.ends_with("debug") {
                if let Some(parent) = path.parent() {
                    if let Some(grandparent) = parent.parent() {
                        path = grandparent.to_path_buf();
                    }
                }
            }

            path.push("data");
            path
        })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr so tracing never interleaves with the menu on stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("nutrilog=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let data_dir = get_data_dir();
    tracing::info!(dir = %data_dir.display(), "opening data directory");

    let store = DataStore::new(&data_dir)?;
    let mut state = AppState::load(&store)?;

    cli::run(&mut state, &store)?;

    Ok(())
}
