//! Binary entrypoint for the Tradewish CLI.
//!
//! Commands:
//! - `init` - write a starter `config.toml`
//! - `scan --world <file> [--passes N] [--interval-ms M]` - run evaluation passes over a world snapshot
//! - `match --patterns <text> <label>...` - check labels against a wishlist once
//!
//! See the library crate docs for module-level details: `tradewish::`.
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{error, info, warn};

use tradewish::config::Config;
use tradewish::logutil::describe_wishlist;
use tradewish::pass::run_pass;
use tradewish::wishlist::{has_match, WishlistCache, WishlistGate};
use tradewish::world::{MarkerLog, WorldSnapshot};

#[derive(Parser)]
#[command(name = "tradewish")]
#[command(about = "Mark settlements whose trade stock matches your wishlist")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration file
    Init,
    /// Run evaluation passes over a world snapshot
    Scan {
        /// World snapshot (JSON); re-read before every pass
        #[arg(short, long)]
        world: String,
        /// Number of passes to run
        #[arg(short, long, default_value_t = 1)]
        passes: u32,
        /// Delay between passes in milliseconds
        #[arg(long, default_value_t = 1000)]
        interval_ms: u64,
    },
    /// Check item labels against a wishlist
    Match {
        /// Comma-separated wildcard patterns
        #[arg(short, long)]
        patterns: String,
        /// Item labels to test
        #[arg(required = true)]
        labels: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            init_logging(&None, cli.verbose);
            Config::create_default(&cli.config).await?;
            info!("Configuration file created at {}", cli.config);
        }
        Commands::Match { patterns, labels } => {
            init_logging(&None, cli.verbose);
            let matched = has_match(&labels, &patterns);
            println!("{}", if matched { "match" } else { "no match" });
            if !matched {
                std::process::exit(1);
            }
        }
        Commands::Scan {
            world,
            passes,
            interval_ms,
        } => {
            let config = match Config::load(&cli.config).await {
                Ok(config) => config,
                Err(e) => {
                    init_logging(&None, cli.verbose);
                    error!("{} (run `tradewish init` to create one)", e);
                    return Err(e);
                }
            };
            init_logging(&Some(config.clone()), cli.verbose);
            info!("Tradewish v{} loaded", env!("CARGO_PKG_VERSION"));
            scan(&config, &world, passes, Duration::from_millis(interval_ms)).await?;
        }
    }

    Ok(())
}

async fn scan(config: &Config, world_path: &str, passes: u32, interval: Duration) -> Result<()> {
    if !config.overlay.enabled {
        info!("Wishlist overlay disabled in configuration; nothing to do");
        return Ok(());
    }

    // Resolved once; failure disables the feature, not the process.
    let source = match config.wishlist.resolve_source() {
        Ok(source) => source,
        Err(e) => {
            error!("Wishlist overlay disabled: {}", e);
            return Ok(());
        }
    };
    match source.wishlist_text() {
        Ok(text) => info!("Wishlist: {}", describe_wishlist(&text)),
        Err(e) => warn!("Wishlist currently unreadable: {}", e),
    }

    let gate = WishlistGate::new(Arc::new(WishlistCache::new()), source)
        .with_pattern_options(config.wishlist.pattern_options());
    let mut markers = MarkerLog::echoing();

    for pass in 1..=passes {
        if pass > 1 {
            tokio::time::sleep(interval).await;
        }
        let snapshot = WorldSnapshot::load(world_path).await?;
        let summary = run_pass(&gate, &snapshot.settlements, &mut markers);
        println!(
            "pass {}: {} settlements, {} marked",
            pass, summary.evaluated, summary.drawn
        );
        for (id, name) in markers.take() {
            println!("  {} {}", id, name);
        }
    }

    let stats = gate.metrics();
    let payload = serde_json::json!({
        "evaluations": stats.evaluations,
        "cache_hits": stats.cache_hits,
        "cache_misses": stats.cache_misses,
        "hit_ratio": stats.hit_ratio(),
        "evictions": stats.evictions,
        "ineligible": stats.ineligible,
        "matches_found": stats.matches_found,
        "probe_failures": stats.probe_failures,
        "source_failures": stats.source_failures,
        "cache_size": gate.cache().len(),
    });
    println!("{}", payload);
    Ok(())
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let level = match (verbosity, config) {
        (0, Some(cfg)) => cfg.logging.level_filter(),
        (0, None) => log::LevelFilter::Info,
        (1, _) => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(level);

    let log_file = config
        .as_ref()
        .and_then(|cfg| cfg.logging.file.as_ref())
        .and_then(|file| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(file)
                .ok()
        });

    if let Some(f) = log_file {
        let file = std::sync::Mutex::new(f);
        // Echo to the console as well when attached to a terminal
        let is_tty = atty::is(atty::Stream::Stdout);
        builder.format(move |fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            let line = format!("{} [{}] {}", ts, record.level(), record.args());
            if let Ok(mut guard) = file.lock() {
                let _ = writeln!(guard, "{}", line);
            }
            if is_tty {
                writeln!(fmt, "{}", line)
            } else {
                Ok(())
            }
        });
    } else {
        builder.format(|fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
        });
    }
    let _ = builder.try_init();
}
