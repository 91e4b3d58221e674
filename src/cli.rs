//! Command line interface.

use crate::config::{
    default_output, LookupSettings, API_KEY_ENV, DEFAULT_AGGREGATE_INPUT, DEFAULT_API_BASE_URL,
    DEFAULT_DELAY_MSEC, DEFAULT_TIMEOUT_SECS, EXPLODE_IPS_COLUMN, EXPLODE_MASK_COLUMN,
    EXPLODE_NETWORK_COLUMN,
};
use crate::explode::{explode_file, ExplodeColumns};
use crate::output::print_summary;
use crate::processing::Containment;
use crate::reputation::lookup_file;
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

/// Spreadsheet IPv4 aggregation and file-hash lookup tools
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging (ignored when log4rs.yml is present)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge IPv4 addresses into minimal covering subnets per /24
    Aggregate {
        /// CSV file whose first column holds IP lists
        #[arg(short, long, default_value = DEFAULT_AGGREGATE_INPUT)]
        input: PathBuf,

        /// Output CSV (default: dated file in the working directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Treat the first row as data instead of a header
        #[arg(long)]
        no_headers: bool,

        /// Keep every member off the network and broadcast address
        #[arg(long)]
        strict_usable: bool,
    },

    /// Expand network/mask/IP-list rows into one row per IP
    Explode {
        /// CSV file with network, mask and IP-list columns
        #[arg(short, long)]
        input: PathBuf,

        /// Output CSV (default: dated file in the working directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(long, default_value = EXPLODE_NETWORK_COLUMN)]
        network_column: String,

        #[arg(long, default_value = EXPLODE_MASK_COLUMN)]
        mask_column: String,

        #[arg(long, default_value = EXPLODE_IPS_COLUMN)]
        ips_column: String,
    },

    /// Look up file hashes against the reputation API
    Lookup {
        /// .txt (one hash per line) or .csv (first column) file
        #[arg(short, long)]
        input: PathBuf,

        /// Output CSV (default: dated file in the working directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// API key
        #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
        api_key: Option<String>,

        #[arg(long, default_value = DEFAULT_API_BASE_URL)]
        base_url: String,

        /// Per-request timeout in seconds
        #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
        timeout: u64,

        /// Pause between requests in milliseconds
        #[arg(long, default_value_t = DEFAULT_DELAY_MSEC)]
        delay_ms: u64,
    },
}

/// Execute the parsed command.
pub async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Commands::Aggregate {
            input,
            output,
            no_headers,
            strict_usable,
        } => {
            let output = output.unwrap_or_else(|| default_output("aggregate"));
            let containment = if strict_usable {
                Containment::Usable
            } else {
                Containment::Block
            };
            let aggregation = crate::run_aggregate(&input, &output, !no_headers, containment)?;
            print_summary(&aggregation.stats, &output);
        }
        Commands::Explode {
            input,
            output,
            network_column,
            mask_column,
            ips_column,
        } => {
            let output = output.unwrap_or_else(|| default_output("explode"));
            let columns = ExplodeColumns {
                network: network_column,
                mask: mask_column,
                ips: ips_column,
            };
            let count = explode_file(&input, &output, &columns)?;
            println!("Wrote {count} rows to {}", output.display());
        }
        Commands::Lookup {
            input,
            output,
            api_key,
            base_url,
            timeout,
            delay_ms,
        } => {
            let output = output.unwrap_or_else(|| default_output("lookup"));
            let settings = LookupSettings {
                api_key,
                base_url,
                timeout: Duration::from_secs(timeout),
                delay: Duration::from_millis(delay_ms),
            };
            let count = lookup_file(&settings, &input, &output).await?;
            println!("Checked {count} hashes, results in {}", output.display());
        }
    }
    Ok(())
}
