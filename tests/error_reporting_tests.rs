//! A failure surfaces as exactly one ERROR line
//!
//! The library returns errors without logging them at error level; the
//! binary prints the single report line.

use std::sync::{Mutex, Once};
use std::thread::{self, ThreadId};

use log::{Level, LevelFilter, Log, Metadata, Record};
use snapcast_link::config::LinkConfig;
use snapcast_link::{Lifecycle, MockGraph};

static RECORDS: Mutex<Vec<(ThreadId, Level, String)>> = Mutex::new(Vec::new());

struct RecordingLogger;

impl Log for RecordingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.lock().unwrap().push((
            thread::current().id(),
            record.level(),
            record.args().to_string(),
        ));
    }

    fn flush(&self) {}
}

static LOGGER: RecordingLogger = RecordingLogger;

fn init_recording() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
}

/// ERROR lines logged by the calling test's thread
fn error_lines() -> Vec<String> {
    let me = thread::current().id();
    RECORDS
        .lock()
        .unwrap()
        .iter()
        .filter(|(thread, level, _)| *thread == me && *level == Level::Error)
        .map(|(_, _, message)| message.clone())
        .collect()
}

#[test]
fn test_failed_connect_is_reported_once() {
    init_recording();
    let graph = MockGraph::with_default_sink("speakers");
    graph.fail_next_link("failed to link ports: Invalid argument\n");
    let lifecycle = Lifecycle::new(&graph, &LinkConfig::default());

    let err = lifecycle.run(|| Ok(())).unwrap_err();
    assert!(error_lines().is_empty(), "library logged: {:?}", error_lines());

    // what the binary does with the returned error
    log::error!("❌ {}", err);

    let lines = error_lines();
    assert_eq!(lines.len(), 1, "got {:?}", lines);
    assert!(lines[0].contains("Invalid argument"));
}

#[test]
fn test_failed_teardown_is_reported_once() {
    init_recording();
    let graph = MockGraph::with_default_sink("speakers");
    let lifecycle = Lifecycle::new(&graph, &LinkConfig::default());

    let err = lifecycle
        .run(|| {
            graph.fail_next_link("failed to unlink ports: Permission denied\n");
            Ok(())
        })
        .unwrap_err();
    assert!(error_lines().is_empty(), "library logged: {:?}", error_lines());

    log::error!("❌ {}", err);
    assert_eq!(error_lines().len(), 1);
}
