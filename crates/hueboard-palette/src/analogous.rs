//! Analogous color generation for palette overflow.

use crate::color::Rgb;

/// Hue step between successive variants of the same base. The golden
/// angle takes hundreds of steps to revisit a hue, so variants stay
/// distinct from the base and from each other at any realistic label
/// count.
const VARIANT_STEP_DEGREES: f64 = 137.508;

/// Produces perceptually adjacent but distinguishable variants of a base
/// color. The base itself is never part of the output.
pub trait AnalogousColors: Send + Sync {
    /// Generate `count` colors adjacent to `base`. Implementations may
    /// return fewer than requested (including none for a base they
    /// cannot interpret); callers recycle the base color for the
    /// shortfall.
    fn analogous(&self, base: &str, count: usize) -> Vec<String>;
}

/// Hue-rotation generator over HSL space. Only understands hex bases;
/// named colors come back empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct HslAnalogous;

impl AnalogousColors for HslAnalogous {
    fn analogous(&self, base: &str, count: usize) -> Vec<String> {
        let Ok(rgb) = Rgb::from_hex(base) else {
            return Vec::new();
        };
        let hsl = rgb.to_hsl();
        (1..=count)
            .map(|step| {
                hsl.rotate(VARIANT_STEP_DEGREES * step as f64)
                    .to_rgb()
                    .to_hex()
            })
            .collect()
    }
}
