//! ---
//! nrpc_section: "01-version-descriptor"
//! nrpc_subsection: "build"
//! nrpc_type: "source"
//! nrpc_scope: "code"
//! nrpc_description: "Build script capturing git and cargo metadata."
//! nrpc_version: "v1.1.1"
//! nrpc_owner: "tbd"
//! ---
use vergen::EmitBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Missing git metadata (source tarballs) must not break the build.
    EmitBuilder::builder()
        .build_timestamp()
        .all_cargo()
        .git_sha(true)
        .emit()?;
    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}
