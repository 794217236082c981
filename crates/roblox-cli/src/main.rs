/*
[INPUT]:  CLI arguments, optional YAML configuration file, ROBLOX_AUTHORIZATION env
[OUTPUT]: Pretty-printed JSON result of one Roblox API command on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or output format
*/

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use roblox_cli::{CliConfig, Command};

#[derive(Parser, Debug)]
#[command(name = "roblox-cli", version, about = "Roblox users and game pass client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    #[arg(long = "dry-run")]
    dry_run: bool,
    /// `.ROBLOSECURITY` token, overrides the config file
    #[arg(long, env = "ROBLOX_AUTHORIZATION", hide_env_values = true)]
    authorization: Option<String>,
    /// Base-url template, overrides the config file
    #[arg(long = "base-url", value_name = "URL")]
    base_url: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let mut config = load_config(args.config_path.as_ref())?;
    if let Some(token) = args.authorization {
        config.authorization = Some(token);
    }
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    config.validate().context("validate config")?;
    info!(
        base_url = %config.base_url,
        authenticated = config.authorization.is_some(),
        "configuration loaded"
    );

    if args.dry_run {
        info!("dry-run requested; configuration validated");
        return Ok(());
    }

    let Some(command) = args.command else {
        bail!("no command given, see --help");
    };

    let roblox = config.build_roblox()?;
    let outcome = roblox_cli::run(&roblox, &command).await;
    if let Err(err) = roblox.close() {
        warn!(error = %err, "close client");
    }

    let value = outcome?;
    let rendered = serde_json::to_string_pretty(&value).context("render output")?;
    println!("{rendered}");
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<CliConfig> {
    match path {
        Some(path) => CliConfig::from_file(path).context("load config"),
        None => Ok(CliConfig::default()),
    }
}
