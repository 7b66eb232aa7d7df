//! Connection settings for a remote Clearspace service.
//!
//! [`ConnectionSettings`] holds host, port, path, shared secret and the
//! transport security flag. Host, port and shared secret are written through
//! to an injected [`PropertyStore`] under the `clearspace.` namespace; path and
//! the security flag live for the session only.

mod connection_settings;
mod connection_snapshot;
mod error;
pub mod global;
mod memory_property_store;
mod property_store;
mod toml_property_store;

#[cfg(test)]
mod tests;

pub use connection_settings::{ConnectionSettings, parse_port};
pub use connection_snapshot::ConnectionSnapshot;
pub use error::{SettingsError, SettingsErrorResult};
pub use memory_property_store::MemoryPropertyStore;
pub use property_store::PropertyStore;
pub use toml_property_store::TomlPropertyStore;

pub const HOST_KEY: &str = "clearspace.host";
pub const PORT_KEY: &str = "clearspace.port";
pub const PATH_KEY: &str = "clearspace.path";
pub const SHARED_SECRET_KEY: &str = "clearspace.sharedSecret";
pub const SECURE_KEY: &str = "clearspace.secure";

pub const DEFAULT_PORT: i32 = 80;
pub const DEFAULT_PATH: &str = "clearspace";
pub const DEFAULT_SECURE: bool = true;

/// Host the connection stub reports as unreachable.
const UNREACHABLE_HOST: &str = "notlocalhost";
/// Rendered in place of an unset host in the connection URI.
const UNSET_HOST: &str = "null";
const REDACTED: &str = "<redacted>";
