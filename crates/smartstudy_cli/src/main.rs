//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `smartstudy_core` linkage without a windowed shell.
//! - Print the resolved data layout and preference state.

use smartstudy_core::{init_logging, AppConfig, RecordStore};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("smartstudy_core ping={}", smartstudy_core::ping());
    println!("smartstudy_core version={}", smartstudy_core::core_version());

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("config error: {err}");
            return ExitCode::FAILURE;
        }
    };
    println!("data_root={}", config.paths.root().display());

    if let Err(err) = init_logging(&config.log_level, &config.paths.logs_dir()) {
        eprintln!("logging disabled: {err}");
    }

    match RecordStore::open(config.paths).and_then(|store| store.preferences()) {
        Ok(preferences) => {
            println!("theme={:?}", preferences.mode);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("store error: {err}");
            ExitCode::FAILURE
        }
    }
}
