/// Relative tolerance for comparing conserved quantities
pub const CONSERVATION_TOLERANCE: f32 = 1.0e-4;

/// Returns true if a conserved quantity kept its value
///
/// `magnitude` is the scale of the terms that were summed to obtain the
/// quantity, so totals that cancel to near zero are compared against the
/// size of their parts rather than against zero.
#[inline]
pub fn nearly_conserved(before: f32, after: f32, magnitude: f32) -> bool {
    approx::relative_eq!(
        before,
        after,
        epsilon = magnitude.abs() * CONSERVATION_TOLERANCE,
        max_relative = CONSERVATION_TOLERANCE
    )
}

/// Clamps a value between a minimum and maximum value
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}
