use crate::gray8::Gray8Bitmap;
use crate::shading::ShadingGrid;

/// Rescales a raw shading raster linearly into the 8-bit display range.
///
/// The whole grid takes part in the min/max scan, border ring included,
/// so an all-zero border widens the range whenever the interior shading
/// is entirely positive or entirely negative. A raster with no range at
/// all (every cell equal) maps to an all-black image instead of dividing
/// by zero.
pub fn normalize(shading: &ShadingGrid) -> Gray8Bitmap {
    let values = shading.data();

    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;

    for &value in values {
        min = min.min(value);
        max = max.max(value);
    }

    let range = max - min;

    let mut data = vec![0u8; values.len()];

    if range > 0.0 {
        for (out, &value) in data.iter_mut().zip(values) {
            *out = ((value - min) / range * 255.0) as u8;
        }
    }

    Gray8Bitmap::from_data(shading.width, shading.height, data)
}
