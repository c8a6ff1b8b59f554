//! ---
//! nrpc_section: "01-version-descriptor"
//! nrpc_subsection: "module"
//! nrpc_type: "source"
//! nrpc_scope: "code"
//! nrpc_description: "Library version descriptor and handshake helpers."
//! nrpc_version: "v1.1.1"
//! nrpc_owner: "tbd"
//! ---
//! Version negotiation between two peers.
//!
//! Peers exchange a [`Hello`] and agree on the lower of the two releases when
//! they share a major line. On the `0.x` line the minor must match too.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::library::LIBRARY;
use crate::version::Version;

/// Library name carried in every [`Hello`].
pub const LIBRARY_NAME: &str = "nanorpc";

/// Verdict of comparing two releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compatibility {
    /// Both sides run the same release.
    Exact,
    /// Releases differ but share a compatible line.
    Compatible,
    /// Releases cannot interoperate.
    Incompatible,
}

impl Compatibility {
    /// Stable lowercase label.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Compatibility::Exact => "exact",
            Compatibility::Compatible => "compatible",
            Compatibility::Incompatible => "incompatible",
        }
    }
}

/// How strict negotiation is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HandshakePolicy {
    /// Accept any [`Compatibility::Compatible`] peer.
    #[default]
    Compatible,
    /// Accept only an identical release.
    Exact,
}

/// Negotiation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandshakeError {
    /// The releases are on different lines.
    #[error("peer version {peer} is incompatible with local version {local}")]
    Incompatible {
        /// Local release.
        local: Version,
        /// Peer release.
        peer: Version,
    },
    /// Exact policy in force and the releases differ.
    #[error("exact version required: local {local}, peer {peer}")]
    Mismatch {
        /// Local release.
        local: Version,
        /// Peer release.
        peer: Version,
    },
    /// Peer identified itself as a different library.
    #[error("peer library {0:?} is not {name:?}", name = LIBRARY_NAME)]
    UnknownLibrary(String),
}

/// Compare a local release against a peer release.
#[must_use]
pub fn check(local: Version, peer: Version) -> Compatibility {
    if local == peer {
        return Compatibility::Exact;
    }
    let same_line = match (local.major(), peer.major()) {
        (0, 0) => local.minor() == peer.minor(),
        (l, p) => l == p,
    };
    if same_line {
        Compatibility::Compatible
    } else {
        Compatibility::Incompatible
    }
}

/// Agree on a release both sides can speak.
///
/// Returns the lower of the two versions, or an error when `policy` rejects
/// the pair.
pub fn negotiate(
    local: Version,
    peer: Version,
    policy: HandshakePolicy,
) -> Result<Version, HandshakeError> {
    match (check(local, peer), policy) {
        (Compatibility::Exact, _) => Ok(local),
        (Compatibility::Compatible, HandshakePolicy::Compatible) => Ok(local.min(peer)),
        (Compatibility::Compatible, HandshakePolicy::Exact) => {
            Err(HandshakeError::Mismatch { local, peer })
        }
        (Compatibility::Incompatible, _) => Err(HandshakeError::Incompatible { local, peer }),
    }
}

/// Opening message of a handshake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hello {
    /// Library identifier, [`LIBRARY_NAME`] for nanorpc peers.
    pub library: String,
    /// Release the sender runs.
    pub version: Version,
}

impl Hello {
    /// Hello advertising this build's library release.
    #[must_use]
    pub fn local() -> Self {
        Self {
            library: LIBRARY_NAME.to_owned(),
            version: LIBRARY,
        }
    }

    /// Validate a peer's hello and negotiate the session version.
    pub fn accept(&self, peer: &Hello, policy: HandshakePolicy) -> Result<Version, HandshakeError> {
        if peer.library != self.library {
            return Err(HandshakeError::UnknownLibrary(peer.library.clone()));
        }
        negotiate(self.version, peer.version, policy)
    }
}
