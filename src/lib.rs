//! Route the default PipeWire output device into the Snapcast sink for as
//! long as the process runs.
//!
//! - [`topology`] finds the default sink in a `pw-dump` snapshot
//! - [`link`] idempotently connects/disconnects monitor and playback ports
//! - [`lifecycle`] ties both to a blocking wait for SIGINT/SIGTERM
//! - [`pipewire`] is the seam to the audio server

pub mod config;
pub mod error;
pub mod lifecycle;
pub mod link;
pub mod mock_graph;
pub mod pipewire;
pub mod shutdown;
pub mod topology;

pub use error::{LinkerError, Result};
pub use lifecycle::Lifecycle;
pub use link::{set_link, Channel, PortPair};
pub use mock_graph::MockGraph;
pub use pipewire::{GraphBackend, LinkMode, LinkOutcome, PwCli};
pub use topology::find_default_output_device;
