//! ---
//! nrpc_section: "02-logging"
//! nrpc_subsection: "module"
//! nrpc_type: "source"
//! nrpc_scope: "code"
//! nrpc_description: "Structured logging adapters and sinks."
//! nrpc_version: "v1.1.1"
//! nrpc_owner: "tbd"
//! ---
#![warn(missing_docs)]

//! `tracing` setup and handshake-aware logging helpers.

use std::io::IsTerminal;

use serde::{Deserialize, Serialize};
use tracing::Level;
use tracing_subscriber::{fmt as subscriber_fmt, prelude::*, EnvFilter, Layer, Registry};

pub mod macros;

#[doc(hidden)]
pub use tracing;

/// Environment variable overriding the log filter.
pub const LOG_ENV: &str = "NANORPC_LOG";

const DEFAULT_DIRECTIVE: &str = "info";

/// Output format of the installed subscriber.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LogFormat {
    /// Human readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Initialize a baseline subscriber writing pretty lines to stderr.
pub fn init() {
    init_with(LogFormat::Pretty, None, None);
}

/// Initialize a subscriber with the given format and filter.
///
/// Filter precedence: `directive`, then `NANORPC_LOG`, then `RUST_LOG`, then
/// `fallback` (typically the configured filter), then `info`. Output goes to
/// stderr, with ANSI colours only on a terminal. Calling this more than once is
/// harmless; only the first subscriber is installed.
pub fn init_with(format: LogFormat, directive: Option<&str>, fallback: Option<&str>) {
    let chosen = resolve_directive(directive, fallback, |key| std::env::var(key).ok());
    let filter = build_filter(chosen);
    let layer = match format {
        LogFormat::Pretty => subscriber_fmt::layer()
            .with_target(true)
            .with_ansi(std::io::stderr().is_terminal())
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Json => subscriber_fmt::layer()
            .with_target(false)
            .json()
            .with_writer(std::io::stderr)
            .boxed(),
    };
    let _ = Registry::default().with(filter).with(layer).try_init();
}

fn resolve_directive(
    directive: Option<&str>,
    fallback: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> Option<String> {
    directive
        .map(str::to_owned)
        .or_else(|| env(LOG_ENV))
        .or_else(|| env(EnvFilter::DEFAULT_ENV))
        .or_else(|| fallback.map(str::to_owned))
}

fn build_filter(directive: Option<String>) -> EnvFilter {
    match directive {
        Some(directive) => EnvFilter::try_new(&directive).unwrap_or_else(|err| {
            eprintln!(
                "invalid log directive {directive:?} ({err}); defaulting to {DEFAULT_DIRECTIVE}"
            );
            EnvFilter::new(DEFAULT_DIRECTIVE)
        }),
        None => EnvFilter::new(DEFAULT_DIRECTIVE),
    }
}

/// Structured logging context propagated by the convenience macros.
#[derive(Debug, Default, Clone)]
pub struct LogContext<'a> {
    /// Component emitting the event.
    pub component: Option<&'a str>,
    /// Remote peer identifier.
    pub peer: Option<&'a str>,
    /// Release of the local library.
    pub local_version: Option<&'a str>,
    /// Release advertised by the peer.
    pub peer_version: Option<&'a str>,
}

impl<'a> LogContext<'a> {
    /// Create an empty logging context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a component name.
    pub fn with_component(mut self, component: &'a str) -> Self {
        self.component = Some(component);
        self
    }

    /// Attach a peer identifier.
    pub fn with_peer(mut self, peer: &'a str) -> Self {
        self.peer = Some(peer);
        self
    }

    /// Attach the local library release.
    pub fn with_local_version(mut self, version: &'a str) -> Self {
        self.local_version = Some(version);
        self
    }

    /// Attach the peer's release.
    pub fn with_peer_version(mut self, version: &'a str) -> Self {
        self.peer_version = Some(version);
        self
    }
}

/// Outcome of a version handshake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandshakeOutcome {
    /// The peer was accepted.
    Accepted,
    /// The peer was turned away.
    Rejected,
}

impl HandshakeOutcome {
    fn as_str(&self) -> &'static str {
        match self {
            HandshakeOutcome::Accepted => "accepted",
            HandshakeOutcome::Rejected => "rejected",
        }
    }
}

/// Emit a standardized handshake event.
pub fn log_handshake_event(
    context: Option<&LogContext>,
    event: &str,
    message: &str,
    outcome: HandshakeOutcome,
) {
    let ctx = context.cloned().unwrap_or_default();
    match outcome {
        HandshakeOutcome::Accepted => tracing::event!(
            Level::INFO,
            event,
            outcome = outcome.as_str(),
            component = ctx.component.unwrap_or(""),
            peer = ctx.peer.unwrap_or(""),
            local_version = ctx.local_version.unwrap_or(""),
            peer_version = ctx.peer_version.unwrap_or(""),
            message = %message
        ),
        HandshakeOutcome::Rejected => tracing::event!(
            Level::WARN,
            event,
            outcome = outcome.as_str(),
            component = ctx.component.unwrap_or(""),
            peer = ctx.peer.unwrap_or(""),
            local_version = ctx.local_version.unwrap_or(""),
            peer_version = ctx.peer_version.unwrap_or(""),
            message = %message
        ),
    }
}
