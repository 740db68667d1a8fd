//! Workflow commands understood by the CI runner
//!
//! Outputs are appended to the file named by `GITHUB_OUTPUT`. Masks and
//! annotations are printed to stdout as `::command::` lines.

use dsc_core::{Error, Result, GITHUB_OUTPUT_VAR};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Sink for step outputs, masks and annotations
#[derive(Debug, Clone, Default)]
pub struct WorkflowCommands {
    output_file: Option<PathBuf>,
}

impl WorkflowCommands {
    /// Use the output file announced by the runner, if any
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            output_file: std::env::var_os(GITHUB_OUTPUT_VAR)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from),
        }
    }

    pub fn with_output_file(path: impl Into<PathBuf>) -> Self {
        Self {
            output_file: Some(path.into()),
        }
    }

    /// Record a step output.
    ///
    /// Without an output file the legacy `::set-output` command is printed.
    pub fn set_output(&self, name: &str, value: &str) -> Result<()> {
        tracing::debug!(output = %name, "Setting step output");
        match &self.output_file {
            Some(path) => append_output(path, name, value),
            None => {
                println!(
                    "{}",
                    command_line("set-output", Some(("name", name)), value)
                );
                Ok(())
            }
        }
    }

    /// Hide `secret` from the job log
    pub fn add_mask(&self, secret: &str) {
        println!("{}", command_line("add-mask", None, secret));
    }

    /// Error annotation shown on the run summary
    pub fn error(&self, message: &str) {
        println!("{}", command_line("error", None, message));
    }
}

fn append_output(path: &Path, name: &str, value: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| Error::file_system(path, "open output file", e))?;

    file.write_all(output_entry(name, value).as_bytes())
        .map_err(|e| Error::file_system(path, "append output", e))
}

/// `name=value`, or a heredoc block for values spanning lines
fn output_entry(name: &str, value: &str) -> String {
    if !value.contains('\n') && !value.contains('\r') {
        return format!("{name}={value}\n");
    }
    let mut delimiter = format!(
        "ghadelimiter_{}",
        chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
    );
    while value.contains(&delimiter) {
        delimiter.push('_');
    }
    format!("{name}<<{delimiter}\n{value}\n{delimiter}\n")
}

fn command_line(command: &str, property: Option<(&str, &str)>, message: &str) -> String {
    let properties = property
        .map(|(key, value)| format!(" {key}={}", escape_property(value)))
        .unwrap_or_default();
    format!("::{command}{properties}::{}", escape_data(message))
}

fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn outputs_are_appended() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output");
        let commands = WorkflowCommands::with_output_file(&path);

        commands.set_output("id", "bba1").unwrap();
        commands.set_output("rev", "bbr2").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "id=bba1\nrev=bbr2\n");
    }

    #[test]
    fn multiline_output_uses_delimiter() {
        let entry = output_entry("secrets", "a\nb");
        let mut lines = entry.lines();

        let header = lines.next().unwrap();
        let delimiter = header.strip_prefix("secrets<<").unwrap();
        assert_eq!(lines.next(), Some("a"));
        assert_eq!(lines.next(), Some("b"));
        assert_eq!(lines.next(), Some(delimiter));
    }

    #[test]
    fn command_data_is_escaped() {
        assert_eq!(
            command_line("error", None, "100% broken\nsecond line"),
            "::error::100%25 broken%0Asecond line"
        );
        assert_eq!(
            command_line("set-output", Some(("name", "a:b")), "v"),
            "::set-output name=a%3Ab::v"
        );
    }
}
