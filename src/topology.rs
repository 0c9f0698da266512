//! Default output device discovery

use crate::error::{LinkerError, Result};
use crate::pipewire::{GraphBackend, GraphObject};

/// Name of the metadata store holding the session defaults
pub const DEFAULTS_METADATA_NAME: &str = "default";

/// Metadata key selecting the default audio output device
pub const DEFAULT_SINK_KEY: &str = "default.audio.sink";

/// Ask the audio server which device is currently the default output.
///
/// A failed dump surfaces as a query failure; a dump without exactly one
/// defaults store, or without exactly one default sink entry in it, is a
/// lookup failure.
pub fn find_default_output_device<B: GraphBackend>(backend: &B) -> Result<String> {
    let objects = backend.dump()?;
    log::debug!("PipeWire dump contains {} objects", objects.len());

    let name = default_sink_from_dump(&objects)?;
    log::info!("🔍 Default audio sink is {}", name);
    Ok(name)
}

/// Extract the default sink name from an already fetched dump
pub fn default_sink_from_dump(objects: &[GraphObject]) -> Result<String> {
    let defaults: Vec<&GraphObject> = objects
        .iter()
        .filter(|object| object.is_metadata_named(DEFAULTS_METADATA_NAME))
        .collect();

    let [defaults] = defaults.as_slice() else {
        return Err(LinkerError::Lookup(format!(
            "Failed to find PipeWire defaults metadata ({} candidates).",
            defaults.len()
        )));
    };

    let sinks: Vec<_> = defaults
        .metadata_entries()
        .iter()
        .filter(|entry| entry.key == DEFAULT_SINK_KEY)
        .collect();

    let [sink] = sinks.as_slice() else {
        return Err(LinkerError::Lookup(format!(
            "Failed to find default audio sink ({} entries).",
            sinks.len()
        )));
    };

    sink.value_name().map(str::to_string).ok_or_else(|| {
        LinkerError::Lookup(format!(
            "Default audio sink entry has no name: {}",
            sink.value
        ))
    })
}
