use colored::Colorize;
use design_patterns::{logger, run_demo, DemoConfig, PatternError};
use std::io;
use std::path::PathBuf;
use tracing::{error, info, warn};

const CONFIG_ENV: &str = "PATTERNS_DEMO_CONFIG";

fn load_config() -> (DemoConfig, Result<Option<PathBuf>, PatternError>) {
    let Some(path) = std::env::var_os(CONFIG_ENV).map(PathBuf::from) else {
        return (DemoConfig::default(), Ok(None));
    };

    match DemoConfig::load(&path) {
        Ok(config) => (config, Ok(Some(path))),
        Err(err) => (DemoConfig::default(), Err(err)),
    }
}

fn main() {
    // The subscriber needs `verbose`, so the config is read first and its
    // outcome logged afterwards.
    let (config, loaded) = load_config();
    logger::init_logger(config.verbose);

    match loaded {
        Ok(Some(path)) => info!(path = %path.display(), "using demo config"),
        Ok(None) => info!("no {CONFIG_ENV} set, running the built-in demo"),
        Err(err) => warn!("{err}; falling back to the built-in demo"),
    }

    if !config.color {
        colored::control::set_override(false);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let header = |title: &str| format!("=== {title} ===").bold().cyan().to_string();

    // Always exits 0; a failed write is only logged.
    if let Err(err) = run_demo(&config, &mut out, header) {
        error!("demo aborted: {err}");
    }
}
