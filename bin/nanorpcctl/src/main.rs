//! ---
//! nrpc_section: "04-cli"
//! nrpc_subsection: "binary"
//! nrpc_type: "source"
//! nrpc_scope: "code"
//! nrpc_description: "Control CLI exposing the library release."
//! nrpc_version: "v1.1.1"
//! nrpc_owner: "tbd"
//! ---
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use nanorpc_config::{LoadedToolConfig, OutputFormat, ToolConfig};
use nanorpc_logging as logging;
use nanorpc_version::clap_long_version;

mod check;
mod show;

const CONFIG_CANDIDATES: [&str; 2] = ["nanorpc.toml", "configs/nanorpc.toml"];

#[derive(Debug, Parser)]
#[command(
    author,
    disable_version_flag = true,
    about = "nanorpc release information and handshake checks",
    long_about = None
)]
struct Cli {
    #[arg(
        short = 'V',
        long = "version",
        action = ArgAction::SetTrue,
        help = "Print extended version information and exit"
    )]
    version: bool,
    #[arg(long, global = true, value_name = "PATH", help = "Configuration file to use")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Print the library release")]
    Show {
        #[arg(long, value_enum, help = "Output format (defaults to the configured one)")]
        format: Option<FormatArg>,
    },
    #[command(about = "Check whether a peer release can interoperate with this one")]
    Check {
        #[arg(value_name = "PEER_VERSION")]
        peer: String,
        #[arg(long, help = "Require an identical release")]
        exact: bool,
    },
    #[command(about = "Print the handshake hello message as JSON")]
    Hello,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
    Extended,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Extended => OutputFormat::Extended,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.version {
        println!("{}", clap_long_version());
        return Ok(());
    }
    let loaded = match &cli.config {
        Some(path) => LoadedToolConfig {
            config: ToolConfig::from_path(path)?,
            source: Some(path.clone()),
        },
        None => ToolConfig::load_with_source(&CONFIG_CANDIDATES)?,
    };
    let config = loaded.config;
    logging::init_with(
        config.logging.format,
        None,
        config.logging.filter.as_deref(),
    );
    match &loaded.source {
        Some(path) => logging::rpc_debug!("configuration resolved from {}", path.display()),
        None => logging::rpc_debug!("configuration resolved from defaults"),
    }

    match cli.command.unwrap_or(Commands::Show { format: None }) {
        Commands::Show { format } => {
            let format = format.map_or(config.output.format, OutputFormat::from);
            println!("{}", show::render(format)?);
        }
        Commands::Check { peer, exact } => {
            let line = check::run(&peer, exact, config.handshake.policy)?;
            println!("{line}");
        }
        Commands::Hello => println!("{}", show::hello()?),
    }
    Ok(())
}
