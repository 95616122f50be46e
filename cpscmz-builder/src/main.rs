use cfg_if::cfg_if;
use dotenv::dotenv;
use std::env;
use tracing::{error, info, trace};
use tracing_subscriber::EnvFilter;

use config::{BuildConfig, BuildError};
use export::export;

mod config;
mod export;

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_logger();

    trace!("started!");

    if let Ok(path) = env::current_dir() {
        trace!("current working directory is {}", path.display());
    }

    let config = BuildConfig::from_env();
    if let Err(err) = run(&config).await {
        error!("build failed: {}", err);
        std::process::exit(1);
    }
}

async fn run(config: &BuildConfig) -> Result<(), BuildError> {
    let options = config.load_options()?;
    info!(
        "exporting {} into {}",
        options.output_name, options.site_root
    );
    export(options, config).await?;
    Ok(())
}

cfg_if! {
    if #[cfg(debug_assertions)] {
        const DEFAULT_LOG_LEVEL: &str = "debug";
    } else {
        const DEFAULT_LOG_LEVEL: &str = "info";
    }
}

fn init_logger() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    let result = tracing_subscriber::fmt()
        .event_format(
            tracing_subscriber::fmt::format()
                .with_file(true)
                .with_line_number(true),
        )
        .with_env_filter(filter)
        .try_init();
    if let Err(err) = result {
        eprintln!("logger was already initialized: {}", err);
    }
}
