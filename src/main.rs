// main.rs - CLI entry point

use repcombine::cli::{validate_args, Args, Config};
use repcombine::{get_info, run_merge, Result};
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<()> {
    let mut args: Args = argh::from_env();

    if args.version {
        println!("{}", get_info());
        return Ok(());
    }

    // Handle generate config first
    if args.generate_config {
        let sample_config = Config::generate_sample();
        println!("{}", sample_config);
        eprintln!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    init_logging(args.verbose);
    info!("🚀 {}", get_info());

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }
    debug!("Arguments: {:?}", args);

    // Everything is checked before the first report is opened
    let options = validate_args(&args)?;

    if let Some(path) = &args.save_config {
        return Config::from(&args).to_file(path);
    }

    info!(
        "📂 Combining {} reports (ordering: {})",
        options.inputs.len(),
        options.ordering.description()
    );

    run_merge(&options)
}

/// Diagnostics go to stderr; stdout carries the merged table
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
