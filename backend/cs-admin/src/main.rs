//! cs-admin - Clearspace connection settings tool
//!
//! Reads and edits the persisted `clearspace.*` properties.
//!
//! # Examples
//!
//! ```bash
//! # Point at a Clearspace host
//! cs-admin set-host cs.example.org
//! cs-admin set-port 8443
//!
//! # Show the derived URI, overriding the path for this run only
//! cs-admin uri --path community
//!
//! # Dump the settings (shared secret redacted)
//! cs-admin show --pretty
//! ```

use cs_admin::{AdminErrorResult, Cli, apply_session_overrides, execute, logger};
use cs_config::Config;
use cs_settings::{ConnectionSettings, PropertyStore, TomlPropertyStore, global};

use std::process::ExitCode;

use clap::Parser;
use log::debug;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> AdminErrorResult<ExitCode> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    // Wire the persistent store into the process-wide settings
    let properties_path = config.properties_path()?;
    let store: Box<dyn PropertyStore> = Box::new(TomlPropertyStore::open(&properties_path)?);
    let shared = global::install(ConnectionSettings::new(store))?;
    let settings = &*shared;
    debug!("Using property store {}", properties_path.display());

    apply_session_overrides(&cli, settings);

    let output = execute(&cli.command, settings, cli.pretty)?;
    println!("{}", output.text);

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
