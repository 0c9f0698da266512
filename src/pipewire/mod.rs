//! PipeWire graph access
//!
//! Everything this crate knows about the audio server goes through
//! [`GraphBackend`]. The production backend shells out to `pw-dump` and
//! `pw-link`; tests use [`crate::mock_graph::MockGraph`].

pub mod cli;
pub mod dump;

pub use cli::PwCli;
pub use dump::{parse_dump, GraphObject, MetadataEntry};

use crate::error::Result;

/// Whether a link request creates or removes an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkMode {
    Connect,
    Disconnect,
}

impl LinkMode {
    pub fn from_connect(connect: bool) -> Self {
        if connect {
            LinkMode::Connect
        } else {
            LinkMode::Disconnect
        }
    }
}

/// Raw result of a single link request, before classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    Success,
    /// Non-zero exit; `stderr` is passed through untouched
    Failed { code: Option<i32>, stderr: String },
}

/// Access to the live audio graph
pub trait GraphBackend {
    /// Snapshot of every object currently known to the server
    fn dump(&self) -> Result<Vec<GraphObject>>;

    /// Create or remove the edge between two ports
    fn link(&self, output_port: &str, input_port: &str, mode: LinkMode) -> Result<LinkOutcome>;
}

impl<B: GraphBackend + ?Sized> GraphBackend for &B {
    fn dump(&self) -> Result<Vec<GraphObject>> {
        (**self).dump()
    }

    fn link(&self, output_port: &str, input_port: &str, mode: LinkMode) -> Result<LinkOutcome> {
        (**self).link(output_port, input_port, mode)
    }
}
