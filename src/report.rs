use log::{debug, error, info};
use std::fmt;
use std::io::{self, Stdout, Write};
use std::path::{Path, PathBuf};

use crate::error::RenderError;

/// Outcome of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResult {
    pub successful: usize,
    pub failed: usize,
    /// Absolute path of the directory the certificates were written to
    pub output_dir: PathBuf,
    pub written: Vec<PathBuf>,
    /// Failed names with the error message
    pub failures: Vec<(String, String)>,
}

impl BatchResult {
    pub fn new(output_dir: PathBuf) -> Self {
        Self {
            output_dir,
            ..Self::default()
        }
    }

    pub fn total(&self) -> usize {
        self.successful + self.failed
    }

    pub(crate) fn record_success(&mut self, path: PathBuf) {
        self.successful += 1;
        self.written.push(path);
    }

    pub(crate) fn record_failure(&mut self, name: &str, err: &RenderError) {
        self.failed += 1;
        self.failures.push((name.to_string(), err.to_string()));
    }
}

impl fmt::Display for BatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "✓ Successful: {}", self.successful)?;
        writeln!(f, "✗ Failed: {}", self.failed)?;
        write!(f, "📁 Output directory: {}", self.output_dir.display())
    }
}

/// Receives per-name events while a batch runs.
pub trait BatchObserver {
    fn start(&mut self, _total: usize) {}
    fn rendered(&mut self, _name: &str, _path: &Path) {}
    fn failed(&mut self, _name: &str, _err: &RenderError) {}
    fn finish(&mut self, _result: &BatchResult) {}
}

/// Routes batch events to the `log` facade only.
#[derive(Debug, Default)]
pub struct LogObserver;

impl BatchObserver for LogObserver {
    fn start(&mut self, total: usize) {
        info!("Generating {} certificates", total);
    }

    fn rendered(&mut self, name: &str, path: &Path) {
        info!("Certificate generated for {}: {}", name, path.display());
    }

    fn failed(&mut self, name: &str, err: &RenderError) {
        error!("Error generating certificate for {}: {}", name, err);
    }

    fn finish(&mut self, result: &BatchResult) {
        info!(
            "Generation complete: {} successful, {} failed, output in {}",
            result.successful,
            result.failed,
            result.output_dir.display()
        );
    }
}

/// Writes status lines and the final summary, to stdout by default.
#[derive(Debug)]
pub struct ConsoleReporter<W: Write = Stdout> {
    out: W,
}

const RULE: &str = "----------------------------------------";

impl ConsoleReporter<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl Default for ConsoleReporter<Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{}", args) {
            debug!("Could not write status line: {}", e);
        }
    }
}

impl<W: Write> BatchObserver for ConsoleReporter<W> {
    fn start(&mut self, total: usize) {
        self.line(format_args!(""));
        self.line(format_args!("Generating {} certificates...", total));
        self.line(format_args!("{}", RULE));
    }

    fn rendered(&mut self, name: &str, _path: &Path) {
        self.line(format_args!("✓ Certificate generated for: {}", name));
    }

    fn failed(&mut self, name: &str, err: &RenderError) {
        self.line(format_args!("✗ Error generating certificate for {}: {}", name, err));
    }

    fn finish(&mut self, result: &BatchResult) {
        self.line(format_args!("{}", RULE));
        self.line(format_args!("Generation complete!"));
        self.line(format_args!("{}", result));
        if let Err(e) = self.out.flush() {
            debug!("Could not flush status output: {}", e);
        }
    }
}
