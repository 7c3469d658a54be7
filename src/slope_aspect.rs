use std::f32::consts::{FRAC_PI_2, TAU};

/// Converts local elevation derivatives into terrain slope and aspect,
/// both in radians.
///
/// Slope is the steepness of the surface and is always non-negative.
/// Aspect is the downslope direction, normalized into `[0, 2*PI)`. A
/// perfectly level neighborhood has no well-defined aspect; it defaults
/// to 0, which downstream shading relies on.
pub fn calculate_slope_and_aspect(dzdx: f32, dzdy: f32) -> (f32, f32) {
    let slope = dzdx.hypot(dzdy).atan().max(0.0);

    let aspect = if slope > 0.0 {
        (dzdy.atan2(-dzdx) + TAU) % TAU
    } else if dzdy > 0.0 {
        FRAC_PI_2
    } else if dzdy < 0.0 {
        3.0 * FRAC_PI_2
    } else {
        0.0
    };

    (slope, aspect)
}
