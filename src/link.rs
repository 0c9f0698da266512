//! Idempotent monitor-to-playback linking
//!
//! A link between two devices is one edge per stereo channel, from the
//! source device's monitor port to the target device's playback port.
//! Requests that find the graph already in the requested state are
//! reported as warnings, not errors, so connecting or disconnecting twice
//! in a row is harmless.

use strum::{Display, EnumString};

use crate::error::{LinkerError, Result};
use crate::pipewire::{GraphBackend, LinkMode, LinkOutcome};

/// `pw-link` stderr when the edge is already there
pub const ALREADY_LINKED: &str = "failed to link ports: File exists";

/// `pw-link -d` stderr when there is no edge to remove
pub const ALREADY_UNLINKED: &str = "failed to unlink ports: No such file or directory";

/// Audio channel positions, named the way PipeWire names ports
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
pub enum Channel {
    #[strum(serialize = "FL")]
    FrontLeft,
    #[strum(serialize = "FR")]
    FrontRight,
}

impl Channel {
    pub const STEREO: [Channel; 2] = [Channel::FrontLeft, Channel::FrontRight];
}

/// Output and input port names for one channel edge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortPair {
    pub output: String,
    pub input: String,
}

impl PortPair {
    pub fn new(source_device: &str, target_device: &str, channel: Channel) -> Self {
        Self {
            output: format!("{}:monitor_{}", source_device, channel),
            input: format!("{}:playback_{}", target_device, channel),
        }
    }
}

/// Connect or disconnect `source_device`'s monitor ports to
/// `target_device`'s playback ports, one edge per channel.
///
/// Stops at the first channel that fails for any reason other than the
/// edge already being in the requested state. Edges handled before the
/// failure are left as they are.
pub fn set_link<B: GraphBackend>(
    backend: &B,
    source_device: &str,
    target_device: &str,
    channels: &[Channel],
    mode: LinkMode,
) -> Result<()> {
    for &channel in channels {
        let ports = PortPair::new(source_device, target_device, channel);

        match backend.link(&ports.output, &ports.input, mode)? {
            LinkOutcome::Success => {
                log::debug!("{:?} {} -> {}", mode, ports.output, ports.input);
            }
            LinkOutcome::Failed { code, stderr } => match (mode, stderr.trim_end()) {
                (LinkMode::Connect, ALREADY_LINKED) => {
                    log::warn!(
                        "{} and {} were already connected.",
                        ports.output,
                        ports.input
                    );
                }
                (LinkMode::Disconnect, ALREADY_UNLINKED) => {
                    log::warn!(
                        "{} and {} were already disconnected.",
                        ports.output,
                        ports.input
                    );
                }
                (_, detail) => {
                    log::warn!("{}", detail);
                    log::debug!("pw-link exit code: {:?}", code);
                    return Err(LinkerError::Link {
                        output: ports.output,
                        input: ports.input,
                        stderr: detail.to_string(),
                    });
                }
            },
        }
    }

    Ok(())
}
