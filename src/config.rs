//! Defaults and runtime settings.

use chrono::NaiveDate;
use std::path::PathBuf;
use std::time::Duration;

/// Default aggregate input file.
pub const DEFAULT_AGGREGATE_INPUT: &str = "IPinput.csv";
/// Prefix of dated default output files.
pub const OUTPUT_PREFIX: &str = "ip_aggregation";

/// Column names read by the exploder, matching the aggregate output.
pub const EXPLODE_NETWORK_COLUMN: &str = "network_address";
pub const EXPLODE_MASK_COLUMN: &str = "subnet_mask";
pub const EXPLODE_IPS_COLUMN: &str = "included_ips";

/// Reputation API defaults.
pub const DEFAULT_API_BASE_URL: &str = "https://www.virustotal.com/api/v3";
pub const API_KEY_ENV: &str = "VT_API_KEY";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_DELAY_MSEC: u64 = 0;

/// Log4rs config file looked up in the working directory.
pub const LOG4RS_FILE: &str = "log4rs.yml";

/// Dated output name, e.g. `ip_aggregation_aggregate_2024-05-01.csv`.
pub fn dated_output(kind: &str, date: NaiveDate) -> PathBuf {
    PathBuf::from(format!(
        "{OUTPUT_PREFIX}_{kind}_{}.csv",
        date.format("%Y-%m-%d")
    ))
}

/// Dated output name for today.
pub fn default_output(kind: &str) -> PathBuf {
    dated_output(kind, chrono::Local::now().date_naive())
}

/// Settings for the reputation client.
#[derive(Debug, Clone)]
pub struct LookupSettings {
    /// Injected API key; never embedded in the binary.
    pub api_key: Option<String>,
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Pause between consecutive requests.
    pub delay: Duration,
}

impl Default for LookupSettings {
    fn default() -> Self {
        LookupSettings {
            api_key: None,
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            delay: Duration::from_millis(DEFAULT_DELAY_MSEC),
        }
    }
}
