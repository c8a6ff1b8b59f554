//! ---
//! nrpc_section: "01-version-descriptor"
//! nrpc_subsection: "module"
//! nrpc_type: "source"
//! nrpc_scope: "code"
//! nrpc_description: "Library version descriptor and handshake helpers."
//! nrpc_version: "v1.1.1"
//! nrpc_owner: "tbd"
//! ---
use std::fmt;

use serde::Serialize;

use crate::library::VERSION_STRING;

const UNKNOWN: &str = "UNKNOWN";

/// Resolves a `vergen` variable at compile time, `UNKNOWN` when not emitted.
macro_rules! build_env {
    ($name:literal) => {
        match option_env!($name) {
            Some(value) => value,
            None => UNKNOWN,
        }
    };
}

/// Library release plus the build metadata baked in by `build.rs`.
///
/// `Display` renders the one-line [`banner`](Self::banner).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    /// Library release string, always [`VERSION_STRING`] for [`BuildInfo::CURRENT`].
    pub version: &'static str,
    /// Short git commit hash.
    pub git_sha: &'static str,
    /// RFC 3339 build timestamp.
    pub build_timestamp: &'static str,
    /// Target triple.
    pub target: &'static str,
    /// Cargo optimisation level.
    pub opt_level: &'static str,
}

impl BuildInfo {
    /// Metadata of this build.
    pub const CURRENT: BuildInfo = BuildInfo {
        version: VERSION_STRING,
        git_sha: build_env!("VERGEN_GIT_SHA"),
        build_timestamp: build_env!("VERGEN_BUILD_TIMESTAMP"),
        target: build_env!("VERGEN_CARGO_TARGET_TRIPLE"),
        opt_level: build_env!("VERGEN_CARGO_OPT_LEVEL"),
    };

    /// Same as [`BuildInfo::CURRENT`].
    #[must_use]
    pub const fn current() -> Self {
        Self::CURRENT
    }

    /// e.g. `1.1.1 (3f2a9c1)`.
    #[must_use]
    pub fn cli_string(&self) -> String {
        format!("{} ({})", self.version, self.git_sha)
    }

    /// e.g. `nanorpc v1.1.1 (git 3f2a9c1)`.
    #[must_use]
    pub fn banner(&self) -> String {
        self.to_string()
    }

    /// Banner followed by one `Label: value` line per metadata field.
    #[must_use]
    pub fn extended(&self) -> String {
        let details = [
            ("Built", self.build_timestamp),
            ("Target", self.target),
            ("Opt-level", self.opt_level),
        ];
        details
            .iter()
            .fold(self.banner(), |mut out, (label, value)| {
                out.push_str(&format!("\n{label}: {value}"));
                out
            })
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "nanorpc v{} (git {})", self.version, self.git_sha)
    }
}

/// Long version text for the CLI `-V` flag.
#[must_use]
pub fn clap_long_version() -> String {
    BuildInfo::CURRENT.extended()
}
