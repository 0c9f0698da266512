//! Backend that drives the PipeWire command line tools

use std::path::PathBuf;
use std::process::Command;

use super::dump::{parse_dump, GraphObject};
use super::{GraphBackend, LinkMode, LinkOutcome};
use crate::error::{LinkerError, Result};

pub const DEFAULT_PW_DUMP: &str = "pw-dump";
pub const DEFAULT_PW_LINK: &str = "pw-link";

#[derive(Debug, Clone)]
pub struct PwCli {
    dump_program: PathBuf,
    link_program: PathBuf,
}

impl PwCli {
    pub fn new(dump_program: impl Into<PathBuf>, link_program: impl Into<PathBuf>) -> Self {
        Self {
            dump_program: dump_program.into(),
            link_program: link_program.into(),
        }
    }
}

impl GraphBackend for PwCli {
    fn dump(&self) -> Result<Vec<GraphObject>> {
        log::debug!("Running {}", self.dump_program.display());

        let output = Command::new(&self.dump_program).output().map_err(|e| {
            LinkerError::Query(format!(
                "failed to run {}: {}",
                self.dump_program.display(),
                e
            ))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(LinkerError::Query(format!(
                "{} exited with {}: {}",
                self.dump_program.display(),
                output.status,
                stderr.trim_end()
            )));
        }

        parse_dump(&output.stdout)
    }

    fn link(&self, output_port: &str, input_port: &str, mode: LinkMode) -> Result<LinkOutcome> {
        let mut command = Command::new(&self.link_program);
        if mode == LinkMode::Disconnect {
            command.arg("-d");
        }
        command.arg(output_port).arg(input_port);

        log::debug!("Running {:?}", command);

        let output = command.output().map_err(|source| LinkerError::Spawn {
            command: self.link_program.display().to_string(),
            source,
        })?;

        if output.status.success() {
            Ok(LinkOutcome::Success)
        } else {
            Ok(LinkOutcome::Failed {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        }
    }
}
