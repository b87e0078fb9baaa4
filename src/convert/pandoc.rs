//! Document source backed by the pandoc executable.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};
use crate::model::Document;
use crate::parser::JsonParser;

use super::DocumentSource;

/// Options for invoking pandoc.
#[derive(Debug, Clone)]
pub struct PandocOptions {
    /// Program to run
    pub program: PathBuf,

    /// Input format passed as `--from` (pandoc guesses when unset)
    pub from: Option<String>,

    /// Extra arguments placed before the input path
    pub extra_args: Vec<OsString>,
}

impl PandocOptions {
    /// Create new pandoc options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pandoc program.
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Set the input format.
    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Append an extra argument.
    pub fn with_arg(mut self, arg: impl Into<OsString>) -> Self {
        self.extra_args.push(arg.into());
        self
    }
}

impl Default for PandocOptions {
    fn default() -> Self {
        Self {
            program: PathBuf::from("pandoc"),
            from: None,
            extra_args: Vec::new(),
        }
    }
}

/// Reads documents by running `pandoc -t json` on them.
#[derive(Debug, Clone, Default)]
pub struct PandocSource {
    options: PandocOptions,
}

impl PandocSource {
    /// Create a pandoc source.
    pub fn new(options: PandocOptions) -> Self {
        Self { options }
    }

    fn command(&self, path: &Path) -> Command {
        let mut command = Command::new(&self.options.program);
        command.arg("-t").arg("json");
        if let Some(ref from) = self.options.from {
            command.arg("-f").arg(from);
        }
        command.args(&self.options.extra_args).arg(path);
        command
    }

    /// Run pandoc and return its JSON output.
    pub fn run(&self, path: &Path) -> Result<Vec<u8>> {
        let mut command = self.command(path);
        log::info!("running {:?}", command);

        let output = command.output().map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => {
                Error::PandocNotFound(self.options.program.display().to_string())
            }
            _ => Error::Io(e),
        })?;

        if !output.status.success() {
            return Err(Error::Pandoc {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output.stdout)
    }
}

impl DocumentSource for PandocSource {
    fn name(&self) -> &str {
        "pandoc"
    }

    fn load(&self, path: &Path) -> Result<Document> {
        let json = self.run(path)?;
        JsonParser::from_bytes(&json)?.parse()
    }
}
