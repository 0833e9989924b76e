use lexaid::domain::{ApiKey, CredentialSource};

#[test]
fn given_server_and_client_keys_when_resolving_then_server_key_wins() {
    let key = ApiKey::resolve(Some("server-key"), Some("client-key")).unwrap();

    assert_eq!(key.expose(), "server-key");
    assert_eq!(key.source(), CredentialSource::Server);
}

#[test]
fn given_blank_server_key_when_resolving_then_client_key_is_used() {
    let key = ApiKey::resolve(Some("   "), Some("client-key")).unwrap();

    assert_eq!(key.expose(), "client-key");
    assert_eq!(key.source(), CredentialSource::Client);
}

#[test]
fn given_no_usable_key_when_resolving_then_none() {
    assert!(ApiKey::resolve(None, Some("")).is_none());
    assert!(ApiKey::resolve(None, None).is_none());
}

#[test]
fn given_key_when_debug_formatting_then_secret_is_hidden() {
    let key = ApiKey::new("AIzaSecret", CredentialSource::Server);

    let debug = format!("{key:?}");

    assert!(!debug.contains("AIzaSecret"), "{debug}");
}
