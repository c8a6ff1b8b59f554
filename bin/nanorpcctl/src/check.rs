//! ---
//! nrpc_section: "04-cli"
//! nrpc_subsection: "module"
//! nrpc_type: "source"
//! nrpc_scope: "code"
//! nrpc_description: "Control CLI exposing the library release."
//! nrpc_version: "v1.1.1"
//! nrpc_owner: "tbd"
//! ---
use anyhow::{Context, Result};
use nanorpc_logging::{log_handshake_event, HandshakeOutcome, LogContext};
use nanorpc_version::{check, negotiate, HandshakePolicy, Version, LIBRARY, VERSION_STRING};

/// Check `peer` against the local release and describe the verdict.
///
/// `exact` forces [`HandshakePolicy::Exact`] over the configured policy.
pub fn run(peer: &str, exact: bool, configured: HandshakePolicy) -> Result<String> {
    let peer_version: Version = peer
        .parse()
        .with_context(|| format!("invalid peer version {peer:?}"))?;
    let policy = if exact {
        HandshakePolicy::Exact
    } else {
        configured
    };
    let peer_label = peer_version.to_string();
    let ctx = LogContext::new()
        .with_component("check")
        .with_local_version(VERSION_STRING)
        .with_peer_version(&peer_label);

    match negotiate(LIBRARY, peer_version, policy) {
        Ok(agreed) => {
            let verdict = check(LIBRARY, peer_version);
            log_handshake_event(
                Some(&ctx),
                "handshake.check",
                "peer version accepted",
                HandshakeOutcome::Accepted,
            );
            Ok(format!(
                "{peer_version}: {} (negotiated {agreed})",
                verdict.as_str()
            ))
        }
        Err(err) => {
            log_handshake_event(
                Some(&ctx),
                "handshake.check",
                &err.to_string(),
                HandshakeOutcome::Rejected,
            );
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_release_is_exact() {
        let line = run("1.1.1", false, HandshakePolicy::Compatible).expect("accepted");
        assert_eq!(line, "1.1.1: exact (negotiated 1.1.1)");
    }

    #[test]
    fn newer_minor_negotiates_down() {
        let line = run("1.5.0", false, HandshakePolicy::Compatible).expect("accepted");
        assert_eq!(line, "1.5.0: compatible (negotiated 1.1.1)");
    }

    #[test]
    fn exact_flag_overrides_policy() {
        let err = run("1.1.2", true, HandshakePolicy::Compatible).expect_err("rejected");
        assert!(err.to_string().contains("exact version required"));
    }

    #[test]
    fn malformed_peer_is_reported() {
        let err = run("one.two", false, HandshakePolicy::Compatible).expect_err("bad input");
        assert!(err.to_string().contains("invalid peer version"));
    }
}
