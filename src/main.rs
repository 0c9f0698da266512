use std::io::Write;

use anyhow::{Context, Result};
use snapcast_link::config::load_config;
use snapcast_link::shutdown::ShutdownSignal;
use snapcast_link::Lifecycle;

fn run() -> Result<()> {
    let config = load_config().context("Failed to load configuration")?;
    let lifecycle = Lifecycle::new(config.backend(), &config);

    lifecycle
        .run(|| ShutdownSignal::install()?.wait())
        .with_context(|| format!("Routing audio to {} failed", config.target_sink))
}

fn main() {
    // Nothing fancy, systemd adds the timestamps
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{} - {}", record.level(), record.args()))
        .init();

    if let Err(e) = run() {
        log::error!("❌ {:#}", e);
        std::process::exit(1);
    }
}
