use crate::{DEFAULT_PATH, DEFAULT_PORT, DEFAULT_SECURE, REDACTED, UNSET_HOST};

use std::fmt;

use serde::{Serialize, Serializer};

/// Point-in-time copy of the connection fields.
///
/// `Debug` and `Serialize` never expose the shared secret.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionSnapshot {
    pub host: Option<String>,
    pub port: i32,
    /// URI path without the leading `/`
    pub path: String,
    #[serde(serialize_with = "redact")]
    pub shared_secret: Option<String>,
    pub secure: bool,
}

impl Default for ConnectionSnapshot {
    fn default() -> Self {
        Self {
            host: None,
            port: DEFAULT_PORT,
            path: String::from(DEFAULT_PATH),
            shared_secret: None,
            secure: DEFAULT_SECURE,
        }
    }
}

impl ConnectionSnapshot {
    pub fn scheme(&self) -> &'static str {
        if self.secure { "https" } else { "http" }
    }

    /// `{scheme}://{host}:{port}/{path}`, no escaping. An unset host renders
    /// as `null`, which yields an unusable URI.
    pub fn connection_uri(&self) -> String {
        format!(
            "{}://{}:{}/{}",
            self.scheme(),
            self.host.as_deref().unwrap_or(UNSET_HOST),
            self.port,
            self.path
        )
    }
}

impl fmt::Debug for ConnectionSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionSnapshot")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("path", &self.path)
            .field("shared_secret", &self.shared_secret.as_ref().map(|_| REDACTED))
            .field("secure", &self.secure)
            .finish()
    }
}

fn redact<S: Serializer>(secret: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
    match secret {
        Some(_) => serializer.serialize_some(REDACTED),
        None => serializer.serialize_none(),
    }
}
