use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("File doesn't exist: {}", .path.display())]
    Missing { path: PathBuf },

    #[error("File extension should be .csv, .txt or none: {}", .path.display())]
    Extension { path: PathBuf },

    #[error("Error reading from file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid date \"{input}\" (expected e.g. 2021-1-15, 15-1-2021, 15/1/2021, 15.1.2021 or 20210115)")]
    InvalidDate { input: String },
}
