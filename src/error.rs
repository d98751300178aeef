// Every variant states *where* things went wrong.
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The window (our drawing surface) could not be created. Nothing to recover.
    #[error("Window init error: {0}")]
    WindowInit(String),

    /// Pushing a frame to the window failed.
    #[error("Window update error: {0}")]
    WindowUpdate(String),

    /// Export block size outside 1..=MAX_EXPORT_CELL_PX.
    #[error("Invalid export scale: {0}px per cell")]
    InvalidScale(u32),

    /// PNG encoding of a rasterized grid failed.
    #[error("Encode error: {0}")]
    Encode(#[from] image::ImageError),

    /// Writing an export file to disk failed.
    #[error("Export write error ({path}): {source}")]
    ExportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
