//! ---
//! nrpc_section: "05-testing"
//! nrpc_subsection: "integration-tests"
//! nrpc_type: "source"
//! nrpc_scope: "code"
//! nrpc_description: "Integration tests for version negotiation."
//! nrpc_version: "v1.1.1"
//! nrpc_owner: "tbd"
//! ---
use nanorpc_config::ToolConfig;
use nanorpc_version::{HandshakeError, HandshakePolicy, Hello, Version};

fn peer(json: &str) -> Hello {
    serde_json::from_str(json).expect("valid hello")
}

#[test]
fn hello_round_trip_between_peers() {
    let local = Hello::local();
    let wire = serde_json::to_string(&local).expect("serialize");
    let remote = peer(&wire);
    assert_eq!(
        local.accept(&remote, HandshakePolicy::Exact),
        Ok(Version::new(1, 1, 1))
    );
}

#[test]
fn older_patch_peer_is_negotiated_down() {
    let remote = peer(r#"{"library":"nanorpc","version":"1.0.3"}"#);
    assert_eq!(
        Hello::local().accept(&remote, HandshakePolicy::Compatible),
        Ok(Version::new(1, 0, 3))
    );
}

#[test]
fn malformed_peer_version_fails_to_decode() {
    let result = serde_json::from_str::<Hello>(r#"{"library":"nanorpc","version":"1.0"}"#);
    assert!(result.is_err());
}

#[test]
fn configured_policy_drives_negotiation() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("nanorpc.toml");
    std::fs::write(&path, "[handshake]\npolicy = \"exact\"\n").expect("write config");
    let config = ToolConfig::from_path(&path).expect("config parses");

    let remote = peer(r#"{"library":"nanorpc","version":"1.1.0"}"#);
    let err = Hello::local()
        .accept(&remote, config.handshake.policy)
        .expect_err("exact policy rejects 1.1.0");
    assert!(matches!(err, HandshakeError::Mismatch { .. }));
}
