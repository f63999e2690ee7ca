use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use filter_engine::{
    compute_discovery_sample, compute_filtered_followed, limit_from_signed, FilterCriteria,
    DEFAULT_DISCOVERY_LIMIT,
};
use rand::Rng;
use roster::{FollowStore, IntentQueue, RosterPage};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use team_catalog::{Prefecture, Team, TeamCatalog, TeamLevel};
use tracing::info;

mod render;
mod session;

/// Team Roster - browse and manage followed teams
#[derive(Parser)]
#[command(name = "team-roster")]
#[command(about = "Filter your followed teams and discover new ones", long_about = None)]
struct Cli {
    /// Directory holding teams.dat and followed.dat
    #[arg(short, long, default_value = "data/teams")]
    data_dir: PathBuf,

    /// Team you manage; it is never suggested
    #[arg(long)]
    managed_team_id: Option<String>,

    /// Print JSON instead of formatted text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show followed teams, optionally filtered
    Followed {
        /// Prefecture name, e.g. 東京都
        #[arg(long)]
        prefecture: Option<Prefecture>,

        /// Case-insensitive substring of the city
        #[arg(long, default_value = "")]
        city: String,

        /// Case-insensitive substring of the team name
        #[arg(long, default_value = "")]
        name: String,
    },

    /// Suggest teams to follow
    Discover {
        /// Maximum number of suggestions
        #[arg(long, default_value_t = DEFAULT_DISCOVERY_LIMIT as i64, allow_negative_numbers = true)]
        limit: i64,
    },

    /// List selectable prefectures
    Prefectures,

    /// Interactive session driven by commands on stdin
    Session,

    /// Time the filter engine on a random catalog
    Benchmark {
        /// Number of teams in the generated catalog
        #[arg(long, default_value = "10000")]
        teams: usize,

        /// Number of timed runs per operation
        #[arg(long, default_value = "100")]
        iterations: usize,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // These never touch the data directory
    match cli.command {
        Commands::Prefectures => return handle_prefectures(cli.json),
        Commands::Benchmark { teams, iterations } => return handle_benchmark(teams, iterations),
        _ => {}
    }

    let start = Instant::now();
    let catalog = Arc::new(
        TeamCatalog::load_from_files(&cli.data_dir)
            .with_context(|| format!("Failed to load team catalog from {}", cli.data_dir.display()))?,
    );
    info!("Loaded catalog in {:?}", start.elapsed());

    match cli.command {
        Commands::Followed {
            prefecture,
            city,
            name,
        } => handle_followed(&catalog, prefecture, city, name, cli.json)?,
        Commands::Discover { limit } => {
            handle_discover(&catalog, cli.managed_team_id.as_deref(), limit, cli.json)?
        }
        Commands::Session => handle_session(catalog, cli.managed_team_id, cli.json)?,
        Commands::Prefectures | Commands::Benchmark { .. } => {}
    }

    Ok(())
}

/// Handle the 'followed' command
fn handle_followed(
    catalog: &TeamCatalog,
    prefecture: Option<Prefecture>,
    city: String,
    name: String,
    json: bool,
) -> Result<()> {
    let followed = catalog.followed_teams();
    let criteria = FilterCriteria {
        prefecture,
        city,
        name,
    };
    let filtered = compute_filtered_followed(&followed, &criteria);
    render::print_roster(&filtered, json)
}

/// Handle the 'discover' command
fn handle_discover(
    catalog: &TeamCatalog,
    managed_team_id: Option<&str>,
    limit: i64,
    json: bool,
) -> Result<()> {
    let followed = catalog.followed_teams();
    let sample = compute_discovery_sample(
        catalog.teams(),
        &followed,
        managed_team_id,
        limit_from_signed(limit),
    );
    render::print_discovery(&sample, json)
}

/// Handle the 'prefectures' command
fn handle_prefectures(json: bool) -> Result<()> {
    let names: Vec<&str> = Prefecture::ALL.iter().map(|p| p.name()).collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&names)?);
    } else {
        println!("{}", "都道府県".bold().blue());
        for name in names {
            println!("  {}", name);
        }
    }
    Ok(())
}

/// Handle the 'session' command
fn handle_session(catalog: Arc<TeamCatalog>, managed_team_id: Option<String>, json: bool) -> Result<()> {
    let mut store = FollowStore::new(catalog.clone());
    let mut page = RosterPage::new(
        store.followed_teams(),
        catalog.teams().to_vec(),
        managed_team_id,
        IntentQueue::new(),
    );

    let stdin = std::io::stdin();
    session::run(stdin.lock(), &mut store, &mut page, json)
}

/// Handle the 'benchmark' command
fn handle_benchmark(team_count: usize, iterations: usize) -> Result<()> {
    let iterations = iterations.max(1);
    let mut rng = rand::rng();

    let catalog: Vec<Team> = (0..team_count)
        .map(|i| random_team(&mut rng, i))
        .collect();
    let followed: Vec<Team> = catalog
        .iter()
        .filter(|_| rng.random_bool(0.2))
        .cloned()
        .collect();
    let criteria = FilterCriteria::new()
        .with_prefecture(Prefecture::Tokyo)
        .with_name("fc");

    println!(
        "Benchmarking with {} teams ({} followed), {} iterations",
        catalog.len(),
        followed.len(),
        iterations
    );

    let mut filtered_timings = Vec::with_capacity(iterations);
    let mut sample_timings = Vec::with_capacity(iterations);
    for _ in 0..iterations {
        let start = Instant::now();
        let filtered = compute_filtered_followed(&followed, &criteria);
        filtered_timings.push(start.elapsed());
        std::hint::black_box(filtered);

        let managed = rng.random_range(0..team_count.max(1)).to_string();
        let start = Instant::now();
        let sample = compute_discovery_sample(&catalog, &followed, Some(&managed), DEFAULT_DISCOVERY_LIMIT);
        sample_timings.push(start.elapsed());
        std::hint::black_box(sample);
    }

    print_timings("compute_filtered_followed", &mut filtered_timings);
    print_timings("compute_discovery_sample", &mut sample_timings);
    Ok(())
}

fn random_team(rng: &mut impl Rng, i: usize) -> Team {
    const NAMES: &[&str] = &["FC", "United", "Stars", "Waves", "Rovers", "SC"];
    let prefecture = Prefecture::ALL[rng.random_range(0..Prefecture::ALL.len())];
    let level = TeamLevel::ALL[rng.random_range(0..TeamLevel::ALL.len())];
    let suffix = NAMES[rng.random_range(0..NAMES.len())];

    let mut team = Team::new(i.to_string(), format!("Team {} {}", i, suffix), prefecture)
        .with_level(level)
        .with_rating(rng.random_range(1.0..5.0));
    if rng.random_bool(0.8) {
        team = team.with_city(format!("City {}", rng.random_range(0..200)));
    }
    team
}

fn print_timings(label: &str, timings: &mut [Duration]) {
    timings.sort();
    let total: Duration = timings.iter().sum();
    let avg = total / timings.len() as u32;
    let p50 = timings[timings.len() / 2];
    let p95 = timings[((timings.len() as f32 * 0.95) as usize).min(timings.len() - 1)];

    println!("{}", label.bold());
    println!("  Average: {:?}", avg);
    println!("  P50: {:?}", p50);
    println!("  P95: {:?}", p95);
}
