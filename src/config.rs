// Command-line configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::types::{EXPORT_CELL_PX, MAX_EXPORT_CELL_PX};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "shade-grid",
    version,
    about = "32x32 greyscale pixel-art grid: drag to shade, release to export a PNG"
)]
pub struct Config {
    /// On-screen size of one cell in pixels.
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u16).range(4..=64))]
    pub cell_size: u16,

    /// Write every finished stroke as stroke-NNNN.png into this directory.
    #[arg(long)]
    pub export_dir: Option<PathBuf>,

    /// Pixel block size per cell for PNGs written to --export-dir.
    #[arg(
        long,
        default_value_t = EXPORT_CELL_PX,
        value_parser = clap::value_parser!(u32).range(1..=MAX_EXPORT_CELL_PX as i64)
    )]
    pub export_scale: u32,

    /// Print each stroke's data:image/png URI to stdout.
    #[arg(long)]
    pub print_data_uri: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = Config::try_parse_from(["shade-grid"]).unwrap();
        assert_eq!(c.cell_size, 20);
        assert_eq!(c.export_scale, 10);
        assert!(c.export_dir.is_none());
        assert!(!c.print_data_uri);
    }

    #[test]
    fn flags_parse() {
        let c = Config::try_parse_from([
            "shade-grid",
            "--cell-size",
            "12",
            "--export-dir",
            "out",
            "--export-scale",
            "4",
            "--print-data-uri",
        ])
        .unwrap();
        assert_eq!(c.cell_size, 12);
        assert_eq!(c.export_dir, Some(PathBuf::from("out")));
        assert_eq!(c.export_scale, 4);
        assert!(c.print_data_uri);
    }

    #[test]
    fn out_of_range_cell_size_is_rejected() {
        assert!(Config::try_parse_from(["shade-grid", "--cell-size", "2"]).is_err());
        assert!(Config::try_parse_from(["shade-grid", "--export-scale", "0"]).is_err());
        assert!(Config::try_parse_from(["shade-grid", "--export-scale", "65"]).is_err());
    }
}
