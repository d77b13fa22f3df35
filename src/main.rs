use clap::Parser;
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use whiskers::core::config::{self, CliOverrides};
use whiskers::tui;

#[derive(Parser)]
#[command(name = "whiskers", about = "All About Cats, in your terminal")]
struct Args {
    /// Base URL of the cat fact API
    #[arg(long)]
    fact_url: Option<String>,

    /// Disable confetti bursts
    #[arg(long)]
    no_confetti: bool,

    /// Where to write the log file
    #[arg(long, default_value = "whiskers.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // File logger: the terminal belongs to the TUI. It goes up before the
    // config is read so config problems land in the log too.
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Trace, log_config, log_file);
    }
    log::set_max_level(config::DEFAULT_LOG_LEVEL);

    let file_config = config::load_config_or_default();
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            fact_url: args.fact_url,
            no_confetti: args.no_confetti,
        },
    );
    log::set_max_level(resolved.log_level);

    log::info!(
        "Whiskers starting up (fact api: {}, confetti: {})",
        resolved.fact_base_url,
        resolved.confetti_enabled
    );

    tui::run(resolved)
}
