use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::config::RunConfig;
use crate::roster;

/// Fetch stats returned after the per-club loop completes.
pub struct FetchStats {
    pub total: usize,
    pub ok: usize,
    pub errors: usize,
}

pub fn build_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .context("Failed to build HTTP client")
}

fn roster_url(base_url: &str, zps: &str) -> String {
    format!("{base_url}?zps={zps}&format=csv")
}

/// GET one club's roster CSV. Non-2xx counts as a failure.
pub async fn fetch_roster(client: &reqwest::Client, base_url: &str, zps: &str) -> Result<String> {
    let url = roster_url(base_url, zps);
    info!("Fetching roster: {}", url);

    let response = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("Request failed for club {zps}"))?
        .error_for_status()
        .with_context(|| format!("Roster endpoint rejected club {zps}"))?;

    response
        .text()
        .await
        .with_context(|| format!("Failed to read roster body for club {zps}"))
}

/// Fetch every configured club in order and extract player names.
///
/// One club per pass, strictly sequential. A club whose fetch or parse fails
/// contributes nothing; the remaining clubs still run. Names keep club
/// configuration order, then row order within each roster.
pub async fn collect_players(cfg: &RunConfig) -> Result<(Vec<String>, FetchStats)> {
    let client = build_client(cfg.timeout)?;
    let total = cfg.clubs.len();
    let mut ok = 0usize;
    let mut errors = 0usize;
    let mut names = Vec::new();

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} {msg}")?
            .progress_chars("=> "),
    );

    for zps in &cfg.clubs {
        pb.set_message(zps.clone());
        match fetch_roster(&client, &cfg.base_url, zps).await {
            Ok(body) => match roster::extract_names(&body) {
                Ok(club_names) => {
                    info!("{}: extracted {} names", zps, club_names.len());
                    names.extend(club_names);
                    ok += 1;
                }
                Err(e) => {
                    warn!("Unusable roster for {}: {:#}", zps, e);
                    errors += 1;
                }
            },
            Err(e) => {
                warn!("Fetch failed for {}: {:#}", zps, e);
                errors += 1;
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok((names, FetchStats { total, ok, errors }))
}

// ── Tests ──
