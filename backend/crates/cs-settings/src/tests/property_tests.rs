use crate::tests::settings_with;
use crate::{DEFAULT_PORT, PORT_KEY, PropertyStore, SECURE_KEY, SHARED_SECRET_KEY};

use proptest::prelude::*;

// =========================================================================
// Property-Based Tests - Construction
// =========================================================================

proptest! {
    #[test]
    fn given_any_integer_port_when_constructed_then_port_parsed(port in any::<i32>()) {
        let (settings, _store) = settings_with(&[(PORT_KEY, port.to_string().as_str())]);
        prop_assert_eq!(settings.port(), port);
    }

    #[test]
    fn given_non_numeric_port_when_constructed_then_default(raw in "[a-zA-Z ._]{1,12}") {
        let (settings, _store) = settings_with(&[(PORT_KEY, raw.as_str())]);
        prop_assert_eq!(settings.port(), DEFAULT_PORT);
    }

    #[test]
    fn given_random_secure_value_when_constructed_then_secure_unless_falsy(raw in "[a-zA-Z0-9]{0,8}") {
        let (settings, _store) = settings_with(&[(SECURE_KEY, raw.as_str())]);
        let falsy = raw.eq_ignore_ascii_case("false") || raw == "0";
        prop_assert_eq!(settings.is_secure(), !falsy);
    }

    // =====================================================================
    // Property-Based Tests - Write-through
    // =====================================================================

    #[test]
    fn given_any_secret_when_set_then_round_trips(secret in any::<String>()) {
        let (settings, store) = settings_with(&[]);
        settings.set_shared_secret(secret.clone());
        prop_assert_eq!(settings.shared_secret(), Some(secret.clone()));
        prop_assert_eq!(store.get(SHARED_SECRET_KEY), Some(secret));
    }

    #[test]
    fn given_any_port_when_set_then_reconstruction_agrees(port in any::<i32>()) {
        let (settings, store) = settings_with(&[]);
        settings.set_port(port);
        let reloaded = crate::ConnectionSettings::new(store);
        prop_assert_eq!(reloaded.port(), port);
    }

    #[test]
    fn given_any_host_when_test_connection_then_false_only_for_notlocalhost(host in "[a-z.]{0,15}") {
        let (settings, _store) = settings_with(&[]);
        settings.set_host(host.clone());
        prop_assert_eq!(settings.test_connection(), host != "notlocalhost");
    }
}
