//! # namecert
//!
//! A library and CLI tool that renders names onto a certificate template
//! image, one PNG per name.

pub mod cli;
pub mod config;
pub mod error;
pub mod names;
pub mod render;
pub mod report;

// Re-exports
pub use cli::{Cli, Commands};
pub use config::RenderConfig;
pub use error::{CertgenError, RenderError, Result};
pub use names::read_names_from_csv;
pub use render::{sanitize_filename, CertificateRenderer};
pub use report::{BatchObserver, BatchResult, ConsoleReporter};
