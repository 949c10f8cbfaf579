//! psm_numerics - property-check runner for the PSM math library
//!
//! Runs the algebraic checks over the configured samples and exits with a
//! non-zero status when any check fails.

use std::process::ExitCode;

use psm_numerics::check::run_checks;
use psm_numerics::config::NumericsConfig;

fn main() -> ExitCode {
    // Config comes first so its log level can seed the logger; RUST_LOG still wins
    let (config, load_error) = match NumericsConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (NumericsConfig::default(), Some(e)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Some(e) = load_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    let report = run_checks(&config.check);
    println!("{}", report.summary());

    if report.is_success() {
        log::info!("All checks passed");
        ExitCode::SUCCESS
    } else {
        log::error!("{} check(s) failed", report.failed());
        ExitCode::FAILURE
    }
}
