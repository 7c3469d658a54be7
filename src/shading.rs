use crate::dem::Dem;
use crate::gradient::calculate_gradient;
use crate::light::LightSource;
use crate::slope_aspect::calculate_slope_and_aspect;
use rayon::prelude::*;

/// Represents a raster of raw (unnormalized) shading values, one per
/// elevation cell. The one-cell border ring stays at 0 because the 3x3
/// gradient neighborhood is undefined there.
#[derive(Debug)]
pub struct ShadingGrid {
    pub width: usize,
    pub height: usize,
    data: Box<[f32]>,
}

impl ShadingGrid {
    /// Wraps an existing row-major buffer of shading values.
    ///
    /// # Panics
    ///
    /// Panics if the buffer length does not match `width * height`.
    pub fn from_data(width: usize, height: usize, data: Vec<f32>) -> ShadingGrid {
        if data.len() != width * height {
            panic!("Raster data length does not match its dimensions");
        }

        ShadingGrid {
            width,
            height,
            data: data.into_boxed_slice(),
        }
    }

    /// Gets the shading value at the given coordinates.
    pub fn value_at(&self, x: usize, y: usize) -> f32 {
        if x >= self.width || y >= self.height {
            panic!("Cell coordinates out of bounds");
        }

        self.data[y * self.width + x]
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }
}

/// Evaluates the illumination of a surface cell with the given slope and
/// aspect under an oblique light source. Angles are in radians.
///
/// The result lies in [-1, 1]; it is intentionally not clamped here.
pub fn shade(zenith_rad: f32, azimuth_rad: f32, slope: f32, aspect: f32) -> f32 {
    (-zenith_rad).cos() * slope.cos()
        + (azimuth_rad - aspect).cos() * (-zenith_rad).sin() * slope.sin()
}

/// Computes the raw shading raster of a DEM under a single light source.
///
/// Every interior cell gets gradient -> slope/aspect -> illumination; the
/// border ring is left at 0. A raster narrower or shorter than 3 cells
/// has no interior and comes back all zero.
///
/// Rows are independent of each other (each reads a 3x3 window of the
/// shared DEM and writes only its own cells), so they are shaded in
/// parallel.
pub fn hillshade(dem: &Dem, light: &LightSource) -> ShadingGrid {
    let width = dem.width;
    let height = dem.height;

    let mut data = vec![0.0f32; width * height].into_boxed_slice();

    if width >= 3 && height >= 3 {
        let zenith_rad = light.zenith_rad();
        let azimuth_rad = light.azimuth_rad();

        data.par_chunks_exact_mut(width)
            .enumerate()
            .skip(1)
            .take(height - 2)
            .for_each(|(y, row)| {
                for x in 1..width - 1 {
                    let (dzdx, dzdy) = calculate_gradient(dem, x, y);
                    let (slope, aspect) =
                        calculate_slope_and_aspect(dzdx, dzdy);

                    row[x] = shade(zenith_rad, azimuth_rad, slope, aspect);
                }
            });
    }

    ShadingGrid {
        width,
        height,
        data,
    }
}
