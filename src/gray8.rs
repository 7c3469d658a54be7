use crate::errors::SaveError;
use image::GrayImage;
use std::path::Path;

/// Represents an 8-bit grayscale raster, the final form of a shaded
/// relief image before it is encoded to disk.
#[derive(Debug)]
pub struct Gray8Bitmap {
    pub width: usize,
    pub height: usize,
    data: Box<[u8]>,
}

impl Gray8Bitmap {
    /// Creates a new all-black bitmap with the given width and height.
    pub fn new(width: usize, height: usize) -> Gray8Bitmap {
        Gray8Bitmap {
            width,
            height,
            data: vec![0; width * height].into_boxed_slice(),
        }
    }

    /// Wraps an existing row-major sample buffer.
    ///
    /// # Panics
    ///
    /// Panics if the buffer length does not match `width * height`.
    pub fn from_data(width: usize, height: usize, data: Vec<u8>) -> Gray8Bitmap {
        if data.len() != width * height {
            panic!("Raster data length does not match its dimensions");
        }

        Gray8Bitmap {
            width,
            height,
            data: data.into_boxed_slice(),
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Gets the value of the pixel at the given coordinates.
    pub fn get_pixel(&self, x: usize, y: usize) -> u8 {
        if x >= self.width || y >= self.height {
            panic!("Pixel coordinates out of bounds");
        }

        self.data[y * self.width + x]
    }

    /// Sets the pixel at the given coordinates to the given value.
    pub fn set_pixel(&mut self, x: usize, y: usize, value: u8) {
        if x >= self.width || y >= self.height {
            panic!("Pixel coordinates out of bounds");
        }

        self.data[y * self.width + x] = value;
    }

    /// Encodes the bitmap as a single-channel image and writes it to the
    /// given path. The image format is chosen from the file extension.
    pub fn save(&self, path: &Path) -> Result<(), SaveError> {
        let img = GrayImage::from_raw(
            self.width as u32,
            self.height as u32,
            self.data.to_vec(),
        )
        .ok_or_else(|| {
            SaveError::new("bitmap buffer does not match its dimensions")
        })?;

        img.save(path).map_err(|e| {
            SaveError::new(format!(
                "failed to write {}: {}",
                path.display(),
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Gray8Bitmap;
    use std::path::Path;

    /// A new bitmap is created with the correct dimensions and properties.
    #[test]
    fn create_bitmap() {
        let bitmap = Gray8Bitmap::new(10, 15);
        assert_eq!(bitmap.width, 10);
        assert_eq!(bitmap.height, 15);
        assert_eq!(bitmap.data().len(), 150);
    }

    /// The pixels are black by default when the bitmap is created.
    #[test]
    fn pixels_are_black_by_default() {
        let bitmap = Gray8Bitmap::new(10, 15);
        assert_eq!(bitmap.get_pixel(0, 0), 0);
        assert_eq!(bitmap.get_pixel(4, 5), 0);
    }

    /// Pixels can be set and then retrieved.
    #[test]
    fn set_and_get_pixel() {
        let mut bitmap = Gray8Bitmap::new(10, 15);
        bitmap.set_pixel(3, 4, 123);
        assert_eq!(bitmap.get_pixel(3, 4), 123);
        bitmap.set_pixel(3, 4, 255);
        assert_eq!(bitmap.get_pixel(3, 4), 255);
    }

    /// The bitmap can be written out both as PNG and as JPEG.
    #[test]
    fn save_as_png_and_jpeg() {
        let width = 100;
        let height = 150;
        let mut bitmap = Gray8Bitmap::new(width, height);
        for y in 0..height {
            for x in 0..width {
                bitmap.set_pixel(x, y, ((x + y) * 5 % 256) as u8);
            }
        }

        bitmap
            .save(Path::new("target/debug/test-gray8.png"))
            .unwrap();
        bitmap
            .save(Path::new("target/debug/test-gray8.jpg"))
            .unwrap();
    }
}
