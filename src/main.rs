mod config;
mod fetch;
mod roster;
mod whitelist;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};

use config::RunConfig;
use whitelist::Whitelist;

#[derive(Parser)]
#[command(name = "dewis_roster", about = "DEWIS club roster fetcher and player whitelist builder")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch all configured club rosters and write the whitelist JSON
    Run {
        /// Club identifier (ZPS); repeat for multiple clubs, in order
        #[arg(short = 'c', long = "club")]
        clubs: Vec<String>,
        /// Output path for the whitelist document
        #[arg(short, long, default_value = config::DEFAULT_OUTPUT)]
        output: PathBuf,
        /// Roster endpoint base URL
        #[arg(long, default_value = config::BASE_URL)]
        base_url: String,
        /// HTTP request timeout in seconds
        #[arg(long, default_value_t = config::DEFAULT_TIMEOUT_SECS)]
        timeout: u64,
    },
    /// Fetch a single club and print its roster without writing anything
    Preview {
        /// Club identifier (ZPS)
        zps: String,
        /// Roster endpoint base URL
        #[arg(long, default_value = config::BASE_URL)]
        base_url: String,
        /// HTTP request timeout in seconds
        #[arg(long, default_value_t = config::DEFAULT_TIMEOUT_SECS)]
        timeout: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { clubs, output, base_url, timeout } => {
            let cfg = RunConfig::new(clubs, base_url, output, timeout)?;
            run_whitelist(&cfg).await
        }
        Commands::Preview { zps, base_url, timeout } => preview(&zps, &base_url, timeout).await,
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    result
}

async fn run_whitelist(cfg: &RunConfig) -> anyhow::Result<()> {
    println!("Fetching {} club roster(s)...", cfg.clubs.len());
    let (names, stats) = fetch::collect_players(cfg).await?;
    println!(
        "Fetched {} roster(s) ({} ok, {} failed), {} names extracted.",
        stats.total,
        stats.ok,
        stats.errors,
        names.len()
    );

    let whitelist = Whitelist::from_names(names);
    if whitelist.is_empty() {
        tracing::warn!("No player names extracted; the whitelist will be empty");
    }
    whitelist.save(&cfg.output)?;
    println!("Saved {} players to {}", whitelist.len(), cfg.output.display());

    if !whitelist.is_empty() {
        println!("\nFirst few player names:");
        for (i, name) in whitelist.players.iter().take(10).enumerate() {
            println!("  {}. {}", i + 1, name);
        }
    }

    Ok(())
}

async fn preview(zps: &str, base_url: &str, timeout: u64) -> anyhow::Result<()> {
    config::validate_zps(zps)?;

    let client = fetch::build_client(Duration::from_secs(timeout))?;
    let body = fetch::fetch_roster(&client, base_url, zps).await?;
    let members = roster::parse_members(&body)?;

    if members.is_empty() {
        println!("No members found for {}.", zps);
        return Ok(());
    }

    println!(
        "{:>3} | {:<28} | {:<6} | {:>5} | {:>5}",
        "#", "Name", "Status", "DWZ", "Elo"
    );
    println!("{}", "-".repeat(59));

    for (i, m) in members.iter().enumerate() {
        let name = m.display_name().unwrap_or_else(|| "-".into());
        let dwz = m.dwz.map(|d| d.to_string()).unwrap_or_else(|| "-".into());
        let elo = m.fide_elo.map(|e| e.to_string()).unwrap_or_else(|| "-".into());
        println!(
            "{:>3} | {:<28} | {:<6} | {:>5} | {:>5}",
            i + 1,
            truncate(&name, 28),
            m.status,
            dwz,
            elo
        );
    }

    println!("\n{} members in {}", members.len(), zps);
    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}
