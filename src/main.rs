use clap::Parser;
use guide::core::config::{self, CliOverrides};
use guide::core::state::Section;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "guide", about = "Travel guide browser for the terminal")]
struct Args {
    /// Section to open on start
    #[arg(short, long, value_enum)]
    section: Option<Section>,

    /// Show every card at once instead of the staggered entrance
    #[arg(long)]
    no_animations: bool,

    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

fn log_level(verbose: bool) -> LevelFilter {
    if verbose {
        return LevelFilter::Debug;
    }
    std::env::var("GUIDE_LOG")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - the UI owns the terminal, so logs go to guide.log
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("guide.log") {
        let _ = WriteLogger::init(log_level(args.verbose), log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        Default::default()
    });
    let resolved = config::resolve(
        &file_config,
        CliOverrides {
            section: args.section,
            no_animations: args.no_animations,
        },
    );

    log::info!("Guide starting up: {:?}", resolved);

    guide::tui::run(resolved)
}
