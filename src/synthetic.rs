use crate::dem::Dem;

/// Builds the deterministic fallback terrain used when no elevation
/// raster can be loaded: a main peak in the middle of the grid and a
/// smaller secondary peak offset from it, both decaying linearly with
/// distance.
pub fn two_peak_dem(size: usize) -> Dem {
    let mut heights = vec![0.0f32; size * size];

    let center_x = (size / 2) as f32;
    let center_y = (size / 2) as f32;

    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 - center_x;
            let dy = y as f32 - center_y;

            let dist1 = (dx * dx + dy * dy).sqrt();
            let height1 = (100.0 - dist1 * 0.8).max(0.0);

            let dist2 =
                ((dx + 60.0) * (dx + 60.0) + (dy - 40.0) * (dy - 40.0)).sqrt();
            let height2 = (50.0 - dist2 * 1.2).max(0.0);

            heights[y * size + x] = height1 + height2;
        }
    }

    Dem::from_data(size, size, heights)
}
