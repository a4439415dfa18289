//! kanjimatch-rs: daily content and speech synthesis service.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use kanjimatch::api;
use kanjimatch::config::Config;
use kanjimatch::daily::{DailyCycle, DATE_KEY_FORMAT};
use kanjimatch::speech::cache::{AudioCache, DiskCache};
use kanjimatch::speech::manager::VoiceManager;
use kanjimatch::speech::playback::{AudioOutput, RodioOutput, SilentOutput};

#[derive(Parser, Debug)]
#[command(name = "kanjimatch-rs", about = "Daily content and speech synthesis service")]
struct Args {
    /// Path to config.yaml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the daily content bundle for a date (YYYY-MM-DD) and exit
    #[arg(short, long)]
    date: Option<String>,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug,hyper=info,reqwest=info")
    } else {
        EnvFilter::new("info,hyper=warn,reqwest=warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("kanjimatch-rs starting");

    let config = Config::load(args.config.as_deref());

    // Daily cycle anchor: configured date, or the day the service first runs
    let cycle = if config.daily.cycle_start.is_empty() {
        DailyCycle::starting_today()
    } else {
        let start = NaiveDate::parse_from_str(&config.daily.cycle_start, DATE_KEY_FORMAT)?;
        DailyCycle::new(start)
    };

    if let Some(raw) = &args.date {
        let date = NaiveDate::parse_from_str(raw, DATE_KEY_FORMAT)?;
        print_daily_bundle(&cycle, date)?;
        return Ok(());
    }

    let cache = Arc::new(
        AudioCache::new(config.cache.memory_entries)
            .with_disk(DiskCache::new(config.cache.resolved_dir(), config.cache.disk_entries)),
    );

    // Without an audio device the service still answers daily-content and
    // status requests; speech is synthesized but discarded
    let output: Arc<dyn AudioOutput> = match RodioOutput::new() {
        Ok(out) => Arc::new(out),
        Err(e) => {
            warn!("No audio output available: {e} — continuing silent");
            Arc::new(SilentOutput)
        }
    };

    let voice = Arc::new(VoiceManager::from_config(&config, cache, output));

    let state = api::ApiState { voice, cycle };
    api::start_api(state, config.api.port).await;

    info!("Service ready on port {}", config.api.port);
    tokio::signal::ctrl_c().await?;
    info!("Shutting down");

    Ok(())
}

/// Dump the bundle served by `GET /daily` for a given date.
fn print_daily_bundle(cycle: &DailyCycle, date: NaiveDate) -> Result<(), Box<dyn std::error::Error>> {
    use kanjimatch::content::{STORY_SEGMENTS, VOCABULARY_PAIRS, WORDLE_WORDS};

    let bundle = serde_json::json!({
        "date": date.format(DATE_KEY_FORMAT).to_string(),
        "story": cycle.story_for(&STORY_SEGMENTS, date)?,
        "vocabulary": cycle.vocabulary_for(&VOCABULARY_PAIRS, date)?,
        "wordle": cycle.wordle_for(&WORDLE_WORDS, date)?,
    });
    println!("{}", serde_json::to_string_pretty(&bundle)?);
    Ok(())
}
