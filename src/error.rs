use thiserror::Error;

pub type Result<T> = std::result::Result<T, LinkerError>;

#[derive(Error, Debug)]
pub enum LinkerError {
    #[error("PipeWire query failed: {0}")]
    Query(String),

    #[error("PipeWire dump could not be parsed: {0}")]
    QueryParse(#[from] serde_json::Error),

    #[error("Lookup failed: {0}")]
    Lookup(String),

    #[error("Linking {output} to {input} failed: {stderr}")]
    Link {
        output: String,
        input: String,
        stderr: String,
    },

    #[error("Failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Shutdown wait failed: {0}")]
    Shutdown(String),
}

impl LinkerError {
    /// True when the audio server could not be queried at all, as opposed to
    /// answering without a usable default sink.
    pub fn is_query_failure(&self) -> bool {
        matches!(self, LinkerError::Query(_) | LinkerError::QueryParse(_))
    }
}
