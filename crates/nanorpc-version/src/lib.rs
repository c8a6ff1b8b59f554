//! ---
//! nrpc_section: "01-version-descriptor"
//! nrpc_subsection: "module"
//! nrpc_type: "source"
//! nrpc_scope: "code"
//! nrpc_description: "Library version descriptor and handshake helpers."
//! nrpc_version: "v1.1.1"
//! nrpc_owner: "tbd"
//! ---
#![warn(missing_docs)]

//! Release identity of the nanorpc library.
//!
//! The [`library`] module holds the compile-time descriptor. [`Version`] carries
//! it around as a value, [`build_info`] wraps it with build metadata for
//! `--version` output, and [`handshake`] decides whether two peers can talk.

pub mod build_info;
pub mod handshake;
pub mod library;
mod version;

pub use build_info::{clap_long_version, BuildInfo};
pub use handshake::{
    check, negotiate, Compatibility, HandshakeError, HandshakePolicy, Hello, LIBRARY_NAME,
};
pub use library::{LibraryVersion, LIBRARY, MAJOR, MINOR, PATCH, VERSION_STRING};
pub use version::{ParseVersionError, SemverConversionError, Version};
