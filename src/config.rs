use std::path::PathBuf;
use std::sync::LazyLock;
use std::time::Duration;

use anyhow::{bail, Result};
use regex::Regex;

pub const BASE_URL: &str = "https://www.schachbund.de/php/dewis/verein.php";
pub const DEFAULT_OUTPUT: &str = "data/filter-whitelist.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Clubs whose members feed the whitelist, in output order.
pub const DEFAULT_CLUBS: &[&str] = &["G0353", "G0314"];

static ZPS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{3,8}$").unwrap());

/// Everything one run needs, resolved from CLI flags and built-in defaults.
pub struct RunConfig {
    pub clubs: Vec<String>,
    pub base_url: String,
    pub output: PathBuf,
    pub timeout: Duration,
}

impl RunConfig {
    pub fn new(
        clubs: Vec<String>,
        base_url: String,
        output: PathBuf,
        timeout_secs: u64,
    ) -> Result<RunConfig> {
        let clubs = if clubs.is_empty() {
            DEFAULT_CLUBS.iter().map(|s| s.to_string()).collect()
        } else {
            clubs
        };
        for zps in &clubs {
            validate_zps(zps)?;
        }
        Ok(RunConfig {
            clubs,
            base_url,
            output,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// ZPS codes are short alphanumeric tokens, e.g. "G0353".
pub fn validate_zps(zps: &str) -> Result<()> {
    if !ZPS_RE.is_match(zps) {
        bail!("Invalid club identifier {:?} (expected a short alphanumeric ZPS code)", zps);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_real_zps_codes() {
        for zps in ["G0353", "G0314", "41054", "C0107"] {
            assert!(validate_zps(zps).is_ok(), "{zps} should be valid");
        }
    }

    #[test]
    fn rejects_garbage_identifiers() {
        for zps in ["", "G 0353", "G0353&format=xml", "waytoolongcode"] {
            assert!(validate_zps(zps).is_err(), "{zps:?} should be rejected");
        }
    }

    #[test]
    fn empty_club_flags_fall_back_to_defaults() {
        let cfg = RunConfig::new(
            Vec::new(),
            BASE_URL.into(),
            PathBuf::from(DEFAULT_OUTPUT),
            DEFAULT_TIMEOUT_SECS,
        )
        .unwrap();
        assert_eq!(cfg.clubs, DEFAULT_CLUBS);
    }
}
