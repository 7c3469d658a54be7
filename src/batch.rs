use crate::dem::Dem;
use crate::errors::SaveError;
use crate::gray8::Gray8Bitmap;
use crate::light::LightSource;
use crate::normalize::normalize;
use crate::shading::hillshade;
use std::path::PathBuf;

/// Receives finished shaded-relief images and persists them under the
/// given name.
pub trait RasterSink {
    fn save(&self, bitmap: &Gray8Bitmap, name: &str) -> Result<(), SaveError>;
}

/// A sink writing images into a directory, one file per image, with a
/// fixed extension that selects the encoding.
pub struct FileSink {
    directory: PathBuf,
    extension: String,
}

impl FileSink {
    pub fn new(directory: impl Into<PathBuf>, extension: &str) -> FileSink {
        FileSink {
            directory: directory.into(),
            extension: extension.to_string(),
        }
    }
}

impl RasterSink for FileSink {
    fn save(&self, bitmap: &Gray8Bitmap, name: &str) -> Result<(), SaveError> {
        let path = self
            .directory
            .join(format!("{}.{}", name, self.extension));

        bitmap.save(&path)?;

        println!("Image saved: {}", path.display());

        Ok(())
    }
}

/// Shades the DEM once per light source, in order, handing each
/// normalized image to the sink under a name derived from the light's
/// angles.
///
/// A failed save is reported and skipped; the remaining light sources
/// are still processed. Returns the number of images actually saved.
pub fn run_batch(
    dem: &Dem,
    lights: &[LightSource],
    sink: &dyn RasterSink,
) -> usize {
    let mut saved = 0;

    for light in lights {
        let shading = hillshade(dem, light);
        let bitmap = normalize(&shading);

        match sink.save(&bitmap, &light.output_name()) {
            Ok(()) => saved += 1,
            Err(error) => println!("Failed to save image: {}", error),
        }
    }

    saved
}
