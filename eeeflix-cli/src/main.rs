mod render;

use anyhow::Context;
use clap::{Parser, Subcommand};
use eeeflix::{
    directory::{generate_with, GeneratorOptions},
    ratelimit::throttle,
    search::{query, resolve_profile, search_batch, select_featured, FeaturedMode},
    CliOverrides, DirectoryConfig, DirectoryError,
};
use std::io::{self, BufRead};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Seed for contact digits, achievements and shuffle order
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Prefix prepended to avatar paths
    #[arg(long, global = true)]
    asset_base: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every student in a batch
    List {
        /// Roll number prefix of the batch
        #[arg(short, long)]
        prefix: Option<String>,
    },

    /// Search students by name or roll number
    Search {
        /// Text to look for (case-insensitive)
        #[arg(default_value = "")]
        text: String,

        /// Roll number prefix of the batch
        #[arg(short, long)]
        prefix: Option<String>,
    },

    /// Show the featured students
    Featured {
        /// Roll number prefix to pick from
        #[arg(short, long)]
        prefix: Option<String>,

        /// Number of students to show
        #[arg(short = 'n', long)]
        count: Option<NonZeroUsize>,

        /// Ordering (ranked|shuffled)
        #[arg(short, long)]
        mode: Option<String>,
    },

    /// Show one student's profile
    Profile {
        /// Roll number (defaults to 2301019)
        id: Option<String>,
    },

    /// Read queries line by line from stdin, as if typed into the search box
    Interactive {
        /// Roll number prefix of the batch
        #[arg(short, long)]
        prefix: Option<String>,

        /// Minimum gap between searches, e.g. 300ms
        #[arg(short, long)]
        throttle: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_tracing(&config.log_level);
    run(cli, config)
}

fn load_config(cli: &Cli) -> Result<DirectoryConfig, DirectoryError> {
    let file_config = DirectoryConfig::load_from(cli.config.as_deref())?;

    let mut overrides = CliOverrides {
        seed: cli.seed,
        asset_base: cli.asset_base.clone(),
        log_level: cli.log_level.clone(),
        ..CliOverrides::default()
    };

    match &cli.command {
        Commands::List { prefix } | Commands::Search { prefix, .. } => {
            overrides.batch_prefix = prefix.clone();
        }
        Commands::Featured {
            prefix,
            count,
            mode,
        } => {
            overrides.batch_prefix = prefix.clone();
            overrides.featured_mode = mode
                .as_deref()
                .map(str::parse::<FeaturedMode>)
                .transpose()?;
            overrides.featured_count = *count;
        }
        Commands::Interactive { prefix, throttle } => {
            overrides.batch_prefix = prefix.clone();
            overrides.search_throttle = throttle.clone();
        }
        Commands::Profile { .. } => {}
    }

    file_config.merge_with_cli(overrides)
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli, config: DirectoryConfig) -> anyhow::Result<()> {
    let mut rng = config.rng();
    let options = GeneratorOptions {
        asset_base: config.asset_base.clone(),
        ..GeneratorOptions::default()
    };
    let directory = generate_with(&options, &mut rng);
    debug!("Directory ready with {} records", directory.len());

    match cli.command {
        Commands::List { .. } => {
            render::print_records(&directory.batch(&config.batch_prefix), cli.json)?;
        }
        Commands::Search { text, .. } => {
            let results = search_batch(&directory, &config.batch_prefix, &text);
            render::print_search_results(&text, &results, cli.json)?;
        }
        Commands::Featured { .. } => {
            let picks = select_featured(
                &directory,
                &config.batch_prefix,
                config.featured_count(),
                config.featured_mode,
                &mut rng,
            );
            render::print_featured(&picks, cli.json)?;
        }
        Commands::Profile { id } => {
            let profile = resolve_profile(&directory, id.as_deref(), &config.asset_base, &mut rng);
            render::print_profile(&profile, cli.json)?;
        }
        Commands::Interactive { .. } => {
            let period = config.search_throttle_period()?;
            let batch = directory.batch(&config.batch_prefix);
            let json = cli.json;

            let mut search = throttle(
                |text: String| {
                    let results = query(batch.iter().copied(), &text);
                    if let Err(e) = render::print_search_results(&text, &results, json) {
                        warn!("Failed to render results for {:?}: {}", text, e);
                    }
                },
                period,
            );

            // The latest input must be shown even if its keystroke was throttled
            let mut last_dropped = None;
            for line in io::stdin().lock().lines() {
                let text = line.context("failed to read query from stdin")?;
                let text = text.trim().to_string();
                last_dropped = if search.call(text.clone()) {
                    None
                } else {
                    Some(text)
                };
            }
            if let Some(text) = last_dropped {
                search.reset();
                search.call(text);
            }

            search.metrics().log_stats("search");
        }
    }

    Ok(())
}
