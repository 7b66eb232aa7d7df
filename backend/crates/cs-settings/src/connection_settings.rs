use crate::{
    ConnectionSnapshot, DEFAULT_PORT, DEFAULT_SECURE, HOST_KEY, PATH_KEY, PORT_KEY, PropertyStore,
    REDACTED, SECURE_KEY, SHARED_SECRET_KEY, SettingsError, SettingsErrorResult, UNREACHABLE_HOST,
};

use std::fmt;

use log::{debug, error, warn};
use parking_lot::Mutex;

/// Connection parameters for the Clearspace service.
///
/// Host, port and shared secret are written through to the backing store on
/// every change. Path and the secure flag are read from the store once at
/// construction and only kept in memory afterwards.
///
/// Fields and store share one lock, so a setter updates both atomically.
/// Concurrent setters are last-writer-wins.
pub struct ConnectionSettings<S> {
    inner: Mutex<Inner<S>>,
}

struct Inner<S> {
    fields: ConnectionSnapshot,
    store: S,
}

impl<S: PropertyStore> ConnectionSettings<S> {
    /// Build settings from whatever `store` currently holds.
    ///
    /// Never fails: a malformed port is logged and the default kept.
    pub fn new(store: S) -> Self {
        let mut fields = ConnectionSnapshot::default();

        if let Some(raw) = store.get(SECURE_KEY) {
            fields.secure = parse_secure(&raw);
        }
        if let Some(host) = store.get(HOST_KEY) {
            fields.host = Some(host);
        }
        if let Some(raw) = store.get(PORT_KEY) {
            fields.port = parse_port(&raw).unwrap_or_else(|e| {
                error!("{e}; keeping port {DEFAULT_PORT}");
                DEFAULT_PORT
            });
        }
        if let Some(path) = store.get(PATH_KEY) {
            fields.path = path;
        }
        fields.shared_secret = store.get(SHARED_SECRET_KEY);

        debug!(
            "Created connection settings: host={}, port={}, path={}, shared_secret={}, secure={}",
            fields.host.as_deref().unwrap_or("<unset>"),
            fields.port,
            fields.path,
            if fields.shared_secret.is_some() {
                REDACTED
            } else {
                "<unset>"
            },
            if fields.secure { "yes" } else { "no" }
        );

        Self {
            inner: Mutex::new(Inner { fields, store }),
        }
    }

    /// Service host, e.g. `cs.example.org`.
    pub fn host(&self) -> Option<String> {
        self.inner.lock().fields.host.clone()
    }

    /// Set and persist the host. No format validation.
    pub fn set_host(&self, host: impl Into<String>) {
        let host = host.into();
        let mut inner = self.inner.lock();
        inner.store.put(HOST_KEY, &host);
        inner.fields.host = Some(host);
    }

    /// Unset the host and remove it from the store.
    pub fn clear_host(&self) {
        let mut inner = self.inner.lock();
        inner.store.remove(HOST_KEY);
        inner.fields.host = None;
    }

    pub fn port(&self) -> i32 {
        self.inner.lock().fields.port
    }

    /// Set and persist the port. Any value is accepted, including zero and
    /// negatives.
    pub fn set_port(&self, port: i32) {
        let mut inner = self.inner.lock();
        inner.store.put(PORT_KEY, &port.to_string());
        inner.fields.port = port;
    }

    /// URI path without the leading `/`.
    pub fn path(&self) -> String {
        self.inner.lock().fields.path.clone()
    }

    /// Session only, not persisted.
    pub fn set_path(&self, path: impl Into<String>) {
        self.inner.lock().fields.path = path.into();
    }

    pub fn shared_secret(&self) -> Option<String> {
        self.inner.lock().fields.shared_secret.clone()
    }

    /// Set and persist the shared secret. Stored as-is.
    pub fn set_shared_secret(&self, secret: impl Into<String>) {
        let secret = secret.into();
        let mut inner = self.inner.lock();
        inner.store.put(SHARED_SECRET_KEY, &secret);
        inner.fields.shared_secret = Some(secret);
    }

    /// Unset the shared secret and remove it from the store.
    pub fn clear_shared_secret(&self) {
        let mut inner = self.inner.lock();
        inner.store.remove(SHARED_SECRET_KEY);
        inner.fields.shared_secret = None;
    }

    /// Whether the connection uses https.
    pub fn is_secure(&self) -> bool {
        self.inner.lock().fields.secure
    }

    /// Session only, not persisted.
    pub fn set_secure(&self, secure: bool) {
        self.inner.lock().fields.secure = secure;
    }

    /// `{scheme}://{host}:{port}/{path}`.
    ///
    /// With no host configured the URI contains the literal `null` host;
    /// callers get it back unchanged and a warning is logged.
    pub fn connection_uri(&self) -> String {
        let inner = self.inner.lock();
        if inner.fields.host.is_none() {
            warn!("Building connection URI without a configured host");
        }
        inner.fields.connection_uri()
    }

    /// Placeholder connectivity check. No network I/O happens: only the
    /// host `notlocalhost` reports failure.
    pub fn test_connection(&self) -> bool {
        let inner = self.inner.lock();
        let reachable = inner.fields.host.as_deref() != Some(UNREACHABLE_HOST);
        debug!(
            "Connection test (stub) for {}: {}",
            inner.fields.host.as_deref().unwrap_or("<unset>"),
            if reachable { "ok" } else { "failed" }
        );
        reachable
    }

    pub fn snapshot(&self) -> ConnectionSnapshot {
        self.inner.lock().fields.clone()
    }

    /// Consume the settings and return the backing store.
    pub fn into_store(self) -> S {
        self.inner.into_inner().store
    }
}

impl<S> fmt::Debug for ConnectionSettings<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionSettings")
            .field("fields", &self.inner.lock().fields)
            .finish_non_exhaustive()
    }
}

/// Parse a stored port value.
///
/// Callers that must not fail collapse the error to [`DEFAULT_PORT`].
pub fn parse_port(raw: &str) -> SettingsErrorResult<i32> {
    raw.parse::<i32>().map_err(|e| SettingsError::invalid_port(raw, e))
}

/// Only an explicit `false` (any case) or `0` disables https.
fn parse_secure(raw: &str) -> bool {
    if raw.eq_ignore_ascii_case("false") || raw == "0" {
        false
    } else {
        DEFAULT_SECURE
    }
}
