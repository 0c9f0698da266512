//! In-memory stand-in for a PipeWire server
//!
//! Keeps a set of port edges and answers link requests with the same
//! status texts `pw-link` prints, so the linking code can be exercised
//! without a running audio server.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde_json::{json, Map, Value};

use crate::error::{LinkerError, Result};
use crate::link::{ALREADY_LINKED, ALREADY_UNLINKED};
use crate::pipewire::dump::METADATA_INTERFACE;
use crate::pipewire::{parse_dump, GraphBackend, GraphObject, LinkMode, LinkOutcome, MetadataEntry};

/// One link request as received by the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRequest {
    pub output: String,
    pub input: String,
    pub mode: LinkMode,
}

#[derive(Default)]
struct MockState {
    objects: Vec<GraphObject>,
    edges: BTreeSet<(String, String)>,
    requests: Vec<LinkRequest>,
    dump_error: Option<String>,
    fail_next_link: Option<String>,
    failing_ports: HashMap<String, String>,
}

#[derive(Default)]
pub struct MockGraph {
    state: Mutex<MockState>,
}

impl MockGraph {
    pub fn new(objects: Vec<GraphObject>) -> Self {
        Self {
            state: Mutex::new(MockState {
                objects,
                ..Default::default()
            }),
        }
    }

    /// Build the mock from `pw-dump` style JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(parse_dump(json.as_bytes())?))
    }

    /// A graph whose only object is the defaults store naming `sink`
    pub fn with_default_sink(sink: &str) -> Self {
        let mut props = Map::new();
        props.insert("metadata.name".to_string(), Value::from("default"));

        Self::new(vec![GraphObject {
            kind: METADATA_INTERFACE.to_string(),
            props: Some(props),
            metadata: Some(vec![MetadataEntry {
                key: "default.audio.sink".to_string(),
                value: json!({ "name": sink }),
            }]),
        }])
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Make every following `dump()` fail as if the server were unreachable
    pub fn fail_dump(&self, message: &str) {
        self.state().dump_error = Some(message.to_string());
    }

    /// Make the next link request fail with `stderr`, leaving edges untouched
    pub fn fail_next_link(&self, stderr: &str) {
        self.state().fail_next_link = Some(stderr.to_string());
    }

    /// Make the next request naming `output_port` fail with `stderr`
    pub fn fail_port(&self, output_port: &str, stderr: &str) {
        self.state()
            .failing_ports
            .insert(output_port.to_string(), stderr.to_string());
    }

    /// Add an edge that exists before any request is made
    pub fn insert_edge(&self, output: &str, input: &str) {
        self.state()
            .edges
            .insert((output.to_string(), input.to_string()));
    }

    pub fn has_edge(&self, output: &str, input: &str) -> bool {
        self.state()
            .edges
            .contains(&(output.to_string(), input.to_string()))
    }

    pub fn edges(&self) -> Vec<(String, String)> {
        self.state().edges.iter().cloned().collect()
    }

    pub fn requests(&self) -> Vec<LinkRequest> {
        self.state().requests.clone()
    }
}

impl GraphBackend for MockGraph {
    fn dump(&self) -> Result<Vec<GraphObject>> {
        let state = self.state();
        match &state.dump_error {
            Some(message) => Err(LinkerError::Query(message.clone())),
            None => Ok(state.objects.clone()),
        }
    }

    fn link(&self, output_port: &str, input_port: &str, mode: LinkMode) -> Result<LinkOutcome> {
        let mut state = self.state();
        state.requests.push(LinkRequest {
            output: output_port.to_string(),
            input: input_port.to_string(),
            mode,
        });

        let injected = match state.fail_next_link.take() {
            Some(stderr) => Some(stderr),
            None => state.failing_ports.remove(output_port),
        };
        if let Some(stderr) = injected {
            return Ok(LinkOutcome::Failed {
                code: Some(1),
                stderr,
            });
        }

        let edge = (output_port.to_string(), input_port.to_string());
        let changed = match mode {
            LinkMode::Connect => state.edges.insert(edge),
            LinkMode::Disconnect => state.edges.remove(&edge),
        };

        if changed {
            return Ok(LinkOutcome::Success);
        }

        let reason = match mode {
            LinkMode::Connect => ALREADY_LINKED,
            LinkMode::Disconnect => ALREADY_UNLINKED,
        };
        Ok(LinkOutcome::Failed {
            code: Some(1),
            stderr: format!("{}\n", reason),
        })
    }
}
