use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CertgenError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{kind} file not found: {}", path.display())]
    ResourceNotFound { kind: &'static str, path: PathBuf },

    #[error("Could not decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },

    #[error("Column '{column}' not found in CSV file. Available columns: {}", available.join(", "))]
    ColumnNotFound {
        column: String,
        available: Vec<String>,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Could not create output directory {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Failure of a single certificate. A batch records it and moves on.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("name '{name}' leaves no usable characters for a file name")]
    EmptyFilename { name: String },

    #[error("failed to save {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type Result<T> = std::result::Result<T, CertgenError>;
