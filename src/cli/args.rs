use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::RenderConfig;
use crate::error::{CertgenError, Result};

#[derive(Parser, Debug)]
#[command(name = "namecert")]
#[command(author, version, long_about = None)]
#[command(about = "Render names onto a certificate template image")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate one certificate per name listed in a CSV file
    Generate {
        /// CSV file with a header row
        #[arg(short, long)]
        csv: PathBuf,

        /// Column holding the names
        #[arg(short = 'n', long, default_value = crate::names::DEFAULT_NAME_COLUMN)]
        column: String,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Generate a single certificate
    Single {
        /// Name to put on the certificate
        #[arg(short, long)]
        name: String,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Write an example JSON configuration
    Example {
        /// Output path for the example configuration
        #[arg(short, long, default_value = "namecert.json")]
        output: PathBuf,
    },
}

/// Render settings; flags override values from `--config`.
#[derive(Args, Debug, Clone, Default)]
pub struct RenderArgs {
    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Template image (PNG or JPEG)
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// TrueType/OpenType font file
    #[arg(short, long)]
    pub font: Option<PathBuf>,

    /// Font size in pixels (em height)
    #[arg(short = 's', long)]
    pub font_size: Option<u32>,

    /// Font color, e.g. "#86529f" or "navy"
    #[arg(long)]
    pub color: Option<String>,

    /// Output directory
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

impl RenderArgs {
    /// Builds the effective configuration: the config file first, then
    /// individual flags on top.
    pub fn resolve(self) -> Result<RenderConfig> {
        let mut config = match (self.config, &self.template, &self.font) {
            (Some(path), _, _) => RenderConfig::from_json_file(path)?,
            (None, Some(template), Some(font)) => RenderConfig::new(template, font),
            _ => {
                return Err(CertgenError::InvalidConfig(
                    "--template and --font are required without --config".to_string(),
                ))
            }
        };

        if let Some(template) = self.template {
            config.template_path = template;
        }
        if let Some(font) = self.font {
            config.font_path = font;
        }
        if let Some(size) = self.font_size {
            config.font_size = size;
        }
        if let Some(color) = self.color {
            config.font_color = color;
        }
        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }

        Ok(config)
    }
}
