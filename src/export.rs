// Where finished strokes go: the log, optionally stdout, optionally disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::raster::{self, Export};
use crate::types::EXPORT_CELL_PX;

pub struct ExportSink {
    dir: Option<PathBuf>,
    scale: u32,
    print_data_uri: bool,
    strokes: usize,
}

impl ExportSink {
    pub fn new(dir: Option<PathBuf>, scale: u32, print_data_uri: bool) -> Self {
        Self { dir, scale, print_data_uri, strokes: 0 }
    }

    /// Strokes accepted so far.
    pub fn strokes(&self) -> usize {
        self.strokes
    }

    /// Handle one stroke's export. Returns the file written, if any.
    pub fn accept(&mut self, grid: &Grid, export: &Export) -> Result<Option<PathBuf>> {
        self.strokes += 1;
        log::info!(
            "stroke {} exported: {}x{} png, {} bytes",
            self.strokes, export.width, export.height, export.png.len()
        );

        if log::log_enabled!(log::Level::Debug) || self.print_data_uri {
            let uri = export.data_uri();
            log::debug!("{uri}");
            if self.print_data_uri {
                println!("{uri}");
            }
        }

        let Some(dir) = &self.dir else {
            return Ok(None);
        };
        let path = dir.join(format!("stroke-{:04}.png", self.strokes));
        if self.scale == EXPORT_CELL_PX {
            write_file(&path, &export.png)?;
        } else {
            let scaled = raster::export_scaled(grid, self.scale)?;
            write_file(&path, &scaled.png)?;
        }
        log::info!("wrote {}", path.display());
        Ok(Some(path))
    }

    /// Take a stroke's outcome (from `Sketch::release`/`leave`) and hand it on.
    /// Encode and write failures are logged, never returned: losing one export
    /// must not end the drawing session.
    pub fn deliver(&mut self, grid: &Grid, outcome: Result<Option<Export>>) -> Option<PathBuf> {
        let export = match outcome {
            Ok(Some(export)) => export,
            Ok(None) => return None,
            Err(e) => {
                log::error!("stroke not exported: {e}");
                return None;
            }
        };
        match self.accept(grid, &export) {
            Ok(path) => path,
            Err(e) => {
                log::error!("{e}");
                None
            }
        }
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    let wrap = |source: std::io::Error| Error::ExportWrite { path: path.to_path_buf(), source };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(wrap)?;
    }
    fs::write(path, bytes).map_err(wrap)
}
