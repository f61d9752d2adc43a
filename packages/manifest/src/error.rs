use std::ops::Range;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid bootstrap configuration in {}: {message}", path.display())]
    Parse {
        path: PathBuf,
        /// Full text of the file, kept for span-based reporting.
        content: String,
        message: String,
        span: Option<Range<usize>>,
    },

    #[error("Invalid value for {key}: {message}")]
    Override { key: &'static str, message: String },
}
