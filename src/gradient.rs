use crate::dem::Dem;

/// Estimates the local elevation derivatives at an interior cell using
/// Horn's weighted 3x3 kernel.
///
/// The caller must guarantee `1 <= x <= width - 2` and
/// `1 <= y <= height - 2`; the one-cell border ring has no full
/// neighborhood and is never passed in.
pub fn calculate_gradient(dem: &Dem, x: usize, y: usize) -> (f32, f32) {
    // Extract the 3x3 window around (x, y):
    // A D G
    // B E H
    // C F I
    let a = dem.height_at(x - 1, y - 1);
    let d = dem.height_at(x, y - 1);
    let g = dem.height_at(x + 1, y - 1);
    let b = dem.height_at(x - 1, y);
    let h = dem.height_at(x + 1, y);
    let c = dem.height_at(x - 1, y + 1);
    let f = dem.height_at(x, y + 1);
    let i = dem.height_at(x + 1, y + 1);

    let dzdx = ((c + 2.0 * f + i) - (a + 2.0 * d + g)) / 8.0;
    let dzdy = ((g + 2.0 * h + i) - (a + 2.0 * b + c)) / 8.0;

    (dzdx, dzdy)
}

#[cfg(test)]
mod tests {
    use super::calculate_gradient;
    use crate::dem::Dem;

    /// A constant surface has no gradient anywhere.
    #[test]
    fn flat_surface_has_zero_gradient() {
        let dem = Dem::from_data(4, 4, vec![123.5; 16]);

        for y in 1..3 {
            for x in 1..3 {
                assert_eq!(calculate_gradient(&dem, x, y), (0.0, 0.0));
            }
        }
    }

    /// A ramp rising by one unit per column.
    #[test]
    fn column_ramp_gradient() {
        let heights: Vec<f32> =
            (0..9).map(|index| (index % 3) as f32).collect();
        let dem = Dem::from_data(3, 3, heights);

        assert_eq!(calculate_gradient(&dem, 1, 1), (0.0, 1.0));
    }

    /// A ramp rising by one unit per row.
    #[test]
    fn row_ramp_gradient() {
        let heights: Vec<f32> =
            (0..9).map(|index| (index / 3) as f32).collect();
        let dem = Dem::from_data(3, 3, heights);

        assert_eq!(calculate_gradient(&dem, 1, 1), (1.0, 0.0));
    }

    /// An isolated center spike does not register in the kernel at all;
    /// the center cell itself carries no weight.
    #[test]
    fn center_spike_is_invisible_to_the_kernel() {
        let mut heights = vec![0.0; 9];
        heights[4] = 5.0;
        let dem = Dem::from_data(3, 3, heights);

        assert_eq!(calculate_gradient(&dem, 1, 1), (0.0, 0.0));
    }
}
