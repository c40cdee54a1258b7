//! Driving a grade over the unit cube.

use lutforge_core::ColorGrade;

use crate::Lut3D;

/// Samples a grade at every point of a `size^3` grid.
///
/// Enumeration order matches the `.cube` file contract: R is the
/// innermost axis, G the middle, B the outermost, so consecutive samples
/// differ first in red. Coordinates are `i / (size - 1)`, including both
/// domain endpoints. Sampling is a pure numeric loop and cannot fail.
pub fn sample_grade<G: ColorGrade>(grade: &G, size: usize, title: impl Into<String>) -> Lut3D {
    Lut3D::from_fn(size, title, |rgb| grade.grade(rgb))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lutforge_grade::GradeParams;

    #[test]
    fn first_and_last_samples_hit_the_grade_endpoints() {
        let params = GradeParams { exposure: 0.7, temperature: 0.3, ..Default::default() };
        let lut = sample_grade(&params, 32, "t");
        assert_eq!(lut.entry_count(), 32 * 32 * 32);
        assert_eq!(lut.data[0], params.grade([0.0, 0.0, 0.0]));
        assert_eq!(*lut.data.last().unwrap(), params.grade([1.0, 1.0, 1.0]));
    }

    #[test]
    fn red_axis_varies_fastest() {
        let lut = sample_grade(&GradeParams::default(), 4, "id");
        // second sample is one red step, green/blue still zero
        let step = 1.0 / 3.0;
        let s = lut.data[1];
        assert!((s[0] - step).abs() < 1e-6 && s[1] == 0.0 && s[2] == 0.0);
        // sample `size` along is one green step
        let s = lut.data[4];
        assert!(s[0] == 0.0 && (s[1] - step).abs() < 1e-6 && s[2] == 0.0);
    }
}
