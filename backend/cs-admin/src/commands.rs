use crate::{AdminError, AdminErrorResult, Cli};

use cs_settings::{ConnectionSettings, HOST_KEY, PORT_KEY, PropertyStore, SHARED_SECRET_KEY};

use clap::Subcommand;
use log::info;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the current settings as JSON (shared secret redacted)
    Show,

    /// Print the connection URI
    Uri,

    /// Run the connection check (placeholder, performs no network I/O)
    Test,

    /// Set and persist the service host
    SetHost {
        /// Host name, e.g. cs.example.org
        host: String,
    },

    /// Set and persist the service port
    SetPort {
        #[arg(allow_negative_numbers = true)]
        port: i32,
    },

    /// Set and persist the shared secret
    SetSecret { secret: String },

    /// Remove the persisted host
    ClearHost,

    /// Remove the persisted shared secret
    ClearSecret,
}

/// Result of a command: text for stdout and whether the process should
/// exit successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub success: bool,
}

impl CommandOutput {
    fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            success: true,
        }
    }
}

/// Apply the session-only flags before any command runs.
pub fn apply_session_overrides<S: PropertyStore>(cli: &Cli, settings: &ConnectionSettings<S>) {
    if let Some(ref path) = cli.path {
        settings.set_path(path.clone());
    }
    if cli.insecure {
        settings.set_secure(false);
    }
}

pub fn execute<S: PropertyStore>(
    command: &Commands,
    settings: &ConnectionSettings<S>,
    pretty: bool,
) -> AdminErrorResult<CommandOutput> {
    let output = match command {
        Commands::Show => {
            let snapshot = settings.snapshot();
            let json = if pretty {
                serde_json::to_string_pretty(&snapshot)
            } else {
                serde_json::to_string(&snapshot)
            }
            .map_err(AdminError::from_json)?;
            CommandOutput::ok(json)
        }

        Commands::Uri => CommandOutput::ok(settings.connection_uri()),

        Commands::Test => {
            let success = settings.test_connection();
            CommandOutput {
                text: String::from(if success { "ok" } else { "failed" }),
                success,
            }
        }

        Commands::SetHost { host } => {
            settings.set_host(host.clone());
            info!("Updated {HOST_KEY}");
            CommandOutput::ok(format!("{HOST_KEY} = {host}"))
        }

        Commands::SetPort { port } => {
            settings.set_port(*port);
            info!("Updated {PORT_KEY}");
            CommandOutput::ok(format!("{PORT_KEY} = {port}"))
        }

        Commands::SetSecret { secret } => {
            settings.set_shared_secret(secret.clone());
            info!("Updated {SHARED_SECRET_KEY}");
            CommandOutput::ok(format!("{SHARED_SECRET_KEY} updated"))
        }

        Commands::ClearHost => {
            settings.clear_host();
            info!("Removed {HOST_KEY}");
            CommandOutput::ok(format!("{HOST_KEY} removed"))
        }

        Commands::ClearSecret => {
            settings.clear_shared_secret();
            info!("Removed {SHARED_SECRET_KEY}");
            CommandOutput::ok(format!("{SHARED_SECRET_KEY} removed"))
        }
    };

    Ok(output)
}
