//! Real signal delivery through the process-wide handler
//!
//! `ctrlc` accepts one handler per process, so this file holds a single test.

use std::process::Command;

use snapcast_link::shutdown::ShutdownSignal;
use snapcast_link::LinkerError;

fn send_signal(name: &str) {
    let status = Command::new("kill")
        .arg(format!("-{}", name))
        .arg(std::process::id().to_string())
        .status()
        .expect("failed to run kill");
    assert!(status.success(), "kill -{} failed", name);
}

#[test]
fn test_installed_handler_releases_wait_on_signals() {
    let _ = env_logger::builder().is_test(true).try_init();

    let signal = ShutdownSignal::install().unwrap();

    // only one handler per process
    assert!(matches!(
        ShutdownSignal::install(),
        Err(LinkerError::Shutdown(_))
    ));

    send_signal("TERM");
    signal.wait().unwrap();

    send_signal("INT");
    signal.wait().unwrap();
}
