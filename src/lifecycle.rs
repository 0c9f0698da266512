//! Link for as long as the process runs
//!
//! `STARTING` resolves the default sink, `LINKED/WAITING` connects it to
//! the target and blocks, `SHUTTING_DOWN`/`DONE` disconnects the same
//! pair. Once a connect has been attempted the disconnect always runs.

use crate::config::LinkConfig;
use crate::error::Result;
use crate::link::{set_link, Channel};
use crate::pipewire::{GraphBackend, LinkMode};
use crate::topology::find_default_output_device;

pub struct Lifecycle<B: GraphBackend> {
    backend: B,
    target_sink: String,
}

impl<B: GraphBackend> Lifecycle<B> {
    pub fn new(backend: B, config: &LinkConfig) -> Self {
        Self {
            backend,
            target_sink: config.target_sink.clone(),
        }
    }

    /// Run the whole lifecycle once.
    ///
    /// `wait_for_shutdown` is called only after a successful connect and
    /// should block until termination is requested. Whatever it returns,
    /// the link is removed afterwards. The first error of connect, wait
    /// and disconnect (in that order) is returned.
    pub fn run<W>(&self, wait_for_shutdown: W) -> Result<()>
    where
        W: FnOnce() -> Result<()>,
    {
        let source = find_default_output_device(&self.backend)?;
        let target = self.target_sink.as_str();

        let connected = set_link(&self.backend, &source, target, &Channel::STEREO, LinkMode::Connect);

        let waited = match &connected {
            Ok(()) => {
                log::info!("🔗 Connected {} audio sink to {}.", source, target);
                let waited = wait_for_shutdown();
                match &waited {
                    Ok(()) => log::info!("Caught shutdown request."),
                    Err(e) => log::warn!("⚠️  {}, shutting down", e),
                }
                waited
            }
            Err(e) => {
                log::debug!("Connecting {} to {} failed: {}", source, target, e);
                Ok(())
            }
        };

        let disconnected =
            set_link(&self.backend, &source, target, &Channel::STEREO, LinkMode::Disconnect);
        if disconnected.is_ok() {
            log::info!("✂️  Disconnected {} from {}.", source, target);
        }

        connected.and(waited).and(disconnected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LinkerError;
    use crate::mock_graph::MockGraph;

    fn config() -> LinkConfig {
        LinkConfig::default()
    }

    #[test_log::test]
    fn test_wait_is_skipped_when_connect_fails() {
        let graph = MockGraph::with_default_sink("speakers");
        graph.fail_next_link("failed to link ports: Invalid argument\n");
        let lifecycle = Lifecycle::new(&graph, &config());

        let mut waited = false;
        let result = lifecycle.run(|| {
            waited = true;
            Ok(())
        });

        assert!(matches!(result, Err(LinkerError::Link { .. })));
        assert!(!waited);
        // one failed connect, then both disconnects
        let modes: Vec<_> = graph.requests().iter().map(|r| r.mode).collect();
        assert_eq!(
            modes,
            vec![LinkMode::Connect, LinkMode::Disconnect, LinkMode::Disconnect]
        );
    }

    #[test_log::test]
    fn test_wait_error_still_disconnects() {
        let graph = MockGraph::with_default_sink("speakers");
        let lifecycle = Lifecycle::new(&graph, &config());

        let result = lifecycle.run(|| Err(LinkerError::Shutdown("interrupted".to_string())));

        assert!(matches!(result, Err(LinkerError::Shutdown(_))));
        assert!(graph.edges().is_empty());
        assert_eq!(graph.requests().len(), 4);
    }

    #[test]
    fn test_lookup_failure_touches_nothing() {
        let graph = MockGraph::new(Vec::new());
        let lifecycle = Lifecycle::new(&graph, &config());

        let result = lifecycle.run(|| panic!("must not wait"));

        assert!(matches!(result, Err(LinkerError::Lookup(_))));
        assert!(graph.requests().is_empty());
    }
}
