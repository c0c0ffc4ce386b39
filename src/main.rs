use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

use locagri::config::FileConfig;
use locagri::{
    BorderFetcher, Exploitation, ExploitationStore, MapOverlay, MapRegion, PositionId,
    SupabaseClient,
};

/// Look up LocAgri exploitations and their borders
///
/// Examples:
///   # Border outline and centroid marker of position 12
///   locagri border 12
///
///   # Fail instead of printing an empty outline when the border is missing
///   locagri border 12 --strict
///
///   # Exploitations owned by a farmer, by CIN
///   locagri exploitations AB123456
#[derive(Parser, Debug)]
#[command(name = "locagri")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches locagri.toml if not provided)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Supabase project URL (overrides SUPABASE_URL and the config file)
    #[arg(long, global = true)]
    url: Option<String>,

    /// Supabase anon key (overrides SUPABASE_ANON_KEY and the config file)
    #[arg(long, global = true)]
    key: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the border outline, centroid marker and map region of a position
    Border {
        position_id: String,

        /// Exit with an error when the border cannot be loaded
        #[arg(long)]
        strict: bool,
    },

    /// Print the exploitations owned by a farmer
    Exploitations { owner: String },
}

#[derive(Serialize)]
struct BorderOutput<'a> {
    position_id: &'a PositionId,
    region: MapRegion,
    overlay: MapOverlay,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(log_level(args.verbose))
        .format_timestamp(None)
        .init();

    let file_config = match args.config {
        Some(ref path) => FileConfig::from_path(path)?,
        None => FileConfig::load().unwrap_or_default(),
    };
    let supabase = file_config
        .supabase
        .resolve(args.url.clone(), args.key.clone())?;
    log::info!("Using Supabase project {}", supabase.url);

    let client = SupabaseClient::new(supabase).context("Failed to create HTTP client")?;

    match args.command {
        Command::Border {
            position_id,
            strict,
        } => run_border(client, PositionId::from(position_id), strict),
        Command::Exploitations { owner } => run_exploitations(&client, &owner),
    }
}

fn run_border(client: SupabaseClient, position_id: PositionId, strict: bool) -> Result<()> {
    let fetcher = BorderFetcher::new(client);

    let spinner = create_spinner(&format!("Fetching border of position {position_id}..."));
    let start = Instant::now();
    let outline = if strict {
        fetcher
            .try_fetch_boundary(&position_id)
            .with_context(|| format!("Failed to fetch border of position {position_id}"))?
    } else {
        fetcher.fetch_boundary(&position_id)
    };
    spinner.finish_with_message(format!(
        "Fetched {} border vertices [{:.1}s]",
        outline.len(),
        start.elapsed().as_secs_f32()
    ));

    let region = MapRegion::fit(&outline).unwrap_or_default();
    let output = BorderOutput {
        position_id: &position_id,
        region,
        overlay: MapOverlay::from_polygon(outline),
    };
    print_json(&output)
}

fn run_exploitations(client: &SupabaseClient, owner: &str) -> Result<()> {
    let spinner = create_spinner(&format!("Fetching exploitations of {owner}..."));
    let start = Instant::now();
    let exploitations: Vec<Exploitation> = client
        .select_exploitations(owner)
        .with_context(|| format!("Failed to fetch exploitations of {owner}"))?;
    spinner.finish_with_message(format!(
        "Fetched {} exploitations [{:.1}s]",
        exploitations.len(),
        start.elapsed().as_secs_f32()
    ));

    print_json(&exploitations)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

fn log_level(verbose: u8) -> log::LevelFilter {
    match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_border_command() {
        let args = Args::try_parse_from(["locagri", "-vv", "border", "12", "--strict"]).unwrap();
        assert_eq!(args.verbose, 2);
        match args.command {
            Command::Border {
                position_id,
                strict,
            } => {
                assert_eq!(position_id, "12");
                assert!(strict);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_exploitations_with_overrides() {
        let args = Args::try_parse_from([
            "locagri",
            "exploitations",
            "AB123",
            "--url",
            "https://demo.supabase.co",
        ])
        .unwrap();
        assert_eq!(args.url.as_deref(), Some("https://demo.supabase.co"));
        assert!(matches!(args.command, Command::Exploitations { ref owner } if owner == "AB123"));
    }

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(0), log::LevelFilter::Warn);
        assert_eq!(log_level(5), log::LevelFilter::Trace);
    }
}
