//! ---
//! nrpc_section: "04-cli"
//! nrpc_subsection: "module"
//! nrpc_type: "source"
//! nrpc_scope: "code"
//! nrpc_description: "Control CLI exposing the library release."
//! nrpc_version: "v1.1.1"
//! nrpc_owner: "tbd"
//! ---
use anyhow::Result;
use nanorpc_config::OutputFormat;
use nanorpc_version::{BuildInfo, Hello, LibraryVersion};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct VersionReport {
    major: u32,
    minor: u32,
    patch: u32,
    version: &'static str,
}

pub fn render(format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Text => LibraryVersion::as_str().to_owned(),
        OutputFormat::Json => serde_json::to_string(&VersionReport {
            major: LibraryVersion::major(),
            minor: LibraryVersion::minor(),
            patch: LibraryVersion::patch(),
            version: LibraryVersion::as_str(),
        })?,
        OutputFormat::Extended => BuildInfo::current().extended(),
    };
    Ok(rendered)
}

pub fn hello() -> Result<String> {
    Ok(serde_json::to_string(&Hello::local())?)
}
