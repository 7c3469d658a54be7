use crate::dem::Dem;
use crate::errors::LoadError;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tiff::decoder::{Decoder, DecodingResult};
use tiff::ColorType;

/// Reads a single-channel elevation raster from a TIFF file.
///
/// 32-bit floating-point samples are taken as-is; other single-channel
/// sample formats are converted to f32. Multi-channel images are
/// rejected.
pub fn read_dem_tiff(path: &Path) -> Result<Dem, LoadError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            return Err(LoadError::new(format!(
                "failed to open {}: {}",
                path.display(),
                e
            )))
        }
    };

    let mut decoder = match Decoder::new(BufReader::new(file)) {
        Ok(decoder) => decoder,
        Err(e) => {
            return Err(LoadError::new(format!(
                "failed to create TIFF decoder: {}",
                e
            )))
        }
    };

    let (width, height) = match decoder.dimensions() {
        Ok((width, height)) => (width as usize, height as usize),
        Err(e) => {
            return Err(LoadError::new(format!(
                "failed to get TIFF dimensions: {}",
                e
            )))
        }
    };

    match decoder.colortype() {
        Ok(ColorType::Gray(_)) => {}
        Ok(other) => {
            return Err(LoadError::new(format!(
                "expected a single-channel raster, got {:?}",
                other
            )))
        }
        Err(e) => {
            return Err(LoadError::new(format!(
                "failed to get TIFF color type: {}",
                e
            )))
        }
    }

    let image = match decoder.read_image() {
        Ok(image) => image,
        Err(e) => {
            return Err(LoadError::new(format!(
                "failed to decode TIFF image: {}",
                e
            )))
        }
    };

    let heights: Vec<f32> = match image {
        DecodingResult::F32(buffer) => buffer,
        DecodingResult::F64(buffer) => {
            buffer.into_iter().map(|v| v as f32).collect()
        }
        DecodingResult::U8(buffer) => {
            buffer.into_iter().map(f32::from).collect()
        }
        DecodingResult::U16(buffer) => {
            buffer.into_iter().map(f32::from).collect()
        }
        DecodingResult::I16(buffer) => {
            buffer.into_iter().map(f32::from).collect()
        }
        DecodingResult::U32(buffer) => {
            buffer.into_iter().map(|v| v as f32).collect()
        }
        DecodingResult::I32(buffer) => {
            buffer.into_iter().map(|v| v as f32).collect()
        }
        _ => {
            return Err(LoadError::new("unsupported TIFF sample format"));
        }
    };

    if heights.len() != width * height {
        return Err(LoadError::new(format!(
            "expected {} samples for a {}x{} raster, got {}",
            width * height,
            width,
            height,
            heights.len()
        )));
    }

    Ok(Dem::from_data(width, height, heights))
}
