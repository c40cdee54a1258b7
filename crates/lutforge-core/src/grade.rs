//! The grading seam.
//!
//! A [`ColorGrade`] is a pure per-pixel transform. Parameter models in
//! `lutforge-grade` implement it; the LUT sampler, image application, and
//! the preview loop consume it without knowing which schema produced it.

/// A pure, total per-pixel color transform.
///
/// Implementations must be deterministic, side-effect free, and return
/// channels clamped into [0, 1] for any finite input. Intermediate stages
/// may exceed that range; only the reported output is bounded.
pub trait ColorGrade {
    /// Transform one RGB pixel.
    fn grade(&self, rgb: [f32; 3]) -> [f32; 3];

    /// True when the transform is the identity (all knobs neutral).
    ///
    /// Callers use this to skip whole-image work; returning `false` for an
    /// identity transform is allowed and only costs time.
    fn is_identity(&self) -> bool {
        false
    }
}

impl<T: ColorGrade + ?Sized> ColorGrade for &T {
    fn grade(&self, rgb: [f32; 3]) -> [f32; 3] {
        (**self).grade(rgb)
    }

    fn is_identity(&self) -> bool {
        (**self).is_identity()
    }
}
