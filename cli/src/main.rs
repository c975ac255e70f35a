//! rBridge command line: the swap core without the UI.

use anyhow::{bail, Context};
use clap::Parser;
use rbridge_transfer::{BridgeConfig, TransferBuilder, TransferPreview, TransferRequest};
use rbridge_types::{ChainId, DecimalSpec, DisplayMode, NativeAmount};
use rbridge_utils::LogFormat;
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "rbridge", about = "rBridge swap helper: validate recipients and convert amounts")]
struct Cli {
    /// Path to a TOML configuration file. File settings are the base;
    /// CLI flags and env vars override them.
    #[arg(long, env = "RBRIDGE_CONFIG")]
    config: Option<PathBuf>,

    /// Base-unit exponent of the native chain (e.g. 12).
    #[arg(long, env = "RBRIDGE_BASE_UNIT_EXPONENT")]
    base_unit_exponent: Option<u32>,

    /// Fractional digits shown and accepted by the destination chain (e.g. 6).
    #[arg(long, env = "RBRIDGE_DISPLAY_EXPONENT")]
    display_exponent: Option<u32>,

    /// Destination chain identifier (2 = Ethereum).
    #[arg(long, env = "RBRIDGE_DEST_CHAIN")]
    dest_chain: Option<u8>,

    /// Always print exactly `display_exponent` fractional digits.
    #[arg(long, env = "RBRIDGE_FIXED")]
    fixed: bool,

    /// Log format: "human" or "json".
    #[arg(long, env = "RBRIDGE_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "RBRIDGE_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Check whether a string is a valid, checksum-correct EVM address.
    CheckAddress { address: String },

    /// Print an address in EIP-55 checksummed form.
    Checksum { address: String },

    /// Render a native base-unit amount for display.
    Display { amount: String },

    /// Convert a display amount back to native base units.
    Parse { amount: String },

    /// Validate a bridge transfer and print the request with a preview.
    Transfer {
        /// Recipient EVM address.
        #[arg(long)]
        to: String,

        /// Amount in display units (e.g. "1.5").
        #[arg(long, conflicts_with = "raw_amount", required_unless_present = "raw_amount")]
        amount: Option<String>,

        /// Amount in native base units.
        #[arg(long)]
        raw_amount: Option<String>,

        /// Sender's transferable balance in base units, if known.
        #[arg(long)]
        available: Option<String>,

        /// Estimated bridge fee in base units, if known.
        #[arg(long)]
        fee: Option<String>,
    },
}

#[derive(Serialize)]
struct TransferOutput {
    request: TransferRequest,
    preview: TransferPreview,
}

/// Merge file configuration (if any) with CLI overrides.
fn resolve_config(cli: &Cli) -> anyhow::Result<BridgeConfig> {
    let base = match &cli.config {
        Some(path) => BridgeConfig::from_toml_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => BridgeConfig::default(),
    };

    let decimals = DecimalSpec::new(
        cli.base_unit_exponent
            .unwrap_or(base.decimals.base_unit_exponent()),
        cli.display_exponent
            .unwrap_or(base.decimals.display_exponent()),
    )?;

    Ok(BridgeConfig {
        dest_chain: cli.dest_chain.map(ChainId::new).unwrap_or(base.dest_chain),
        decimals,
        display_mode: if cli.fixed {
            DisplayMode::Fixed
        } else {
            base.display_mode
        },
        log_format: cli.log_format.unwrap_or(base.log_format),
        log_level: cli.log_level.clone().unwrap_or(base.log_level),
    })
}

fn parse_base_units(field: &str, raw: &str) -> anyhow::Result<NativeAmount> {
    raw.parse()
        .with_context(|| format!("--{field} must be a plain integer in base units"))
}

/// Execute a command, returning the text to print on success.
fn run(command: Command, config: &BridgeConfig) -> anyhow::Result<String> {
    match command {
        Command::CheckAddress { address } => {
            if rbridge_crypto::is_valid_address(&address) {
                return Ok("valid".to_string());
            }
            let reason = if rbridge_crypto::has_valid_format(&address) {
                "checksum mismatch"
            } else {
                "not 40 hex characters"
            };
            bail!("invalid address: {reason}")
        }
        Command::Checksum { address } => rbridge_crypto::to_checksum_address(&address)
            .with_context(|| format!("invalid address: {address}")),
        Command::Display { amount } => {
            let amount = parse_base_units("amount", &amount)?;
            Ok(rbridge_converter::to_display_with(
                &amount,
                config.decimals,
                config.display_mode,
            ))
        }
        Command::Parse { amount } => {
            let native = rbridge_converter::from_display(&amount, config.decimals)?;
            Ok(native.to_string())
        }
        Command::Transfer {
            to,
            amount,
            raw_amount,
            available,
            fee,
        } => {
            let mut builder = TransferBuilder::from_config(config).recipient(to);
            builder = match (amount, raw_amount) {
                (Some(display), _) => builder.display_amount(&display)?,
                (None, Some(raw)) => builder.amount(parse_base_units("raw-amount", &raw)?),
                (None, None) => builder,
            };
            if let Some(available) = available {
                builder = builder.available(parse_base_units("available", &available)?);
            }
            let fee = fee
                .map(|f| parse_base_units("fee", &f))
                .transpose()?;

            let request = builder.build()?;
            let preview =
                TransferPreview::new(&request, fee.as_ref(), config.decimals, config.display_mode);
            if preview.receives_nothing() {
                tracing::warn!(fee = ?preview.fee, "estimated fee consumes the whole amount");
            }
            Ok(serde_json::to_string_pretty(&TransferOutput { request, preview })?)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    rbridge_utils::init_logging(config.log_format, &config.log_level);
    tracing::debug!(?config, "resolved configuration");

    match run(cli.command, &config) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
