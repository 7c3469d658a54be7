use clap::{Parser, ValueEnum};
use hillshade::light::LightList;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

#[derive(Clone, Debug, Parser)]
pub struct Options {
    /// Input elevation raster (single-channel TIFF)
    pub input: PathBuf,

    /// Directory to write the shaded images into
    #[clap(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Output image format
    #[clap(long, value_enum, default_value_t = Format::Jpeg)]
    pub format: Format,

    /// Light sources; `+`-separated `zenith,azimuth` pairs in degrees
    #[clap(long, default_value = "38,230+230,38+45,315+60,135")]
    pub lights: LightList,

    /// Grid size of the synthetic terrain used when the input cannot be
    /// loaded
    #[clap(long, default_value_t = 200)]
    pub synthetic_size: usize,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq)]
pub enum Format {
    Jpeg,
    Png,
}

impl Format {
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Jpeg => "jpg",
            Format::Png => "png",
        }
    }
}

impl Display for Format {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}",
            match self {
                Format::Jpeg => "jpeg",
                Format::Png => "png",
            }
        )
    }
}
