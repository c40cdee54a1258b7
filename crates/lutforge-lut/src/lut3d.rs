//! 3-dimensional lookup table.

use crate::{LutError, LutResult};

/// A 3-dimensional lookup table over the RGB unit cube.
///
/// # Structure
///
/// - `size^3` entries, each an RGB output triple
/// - Stored in file order: R varies fastest, then G, then B
/// - Grid coordinates are `i / (size - 1)` per axis, so both domain
///   endpoints 0.0 and 1.0 are always sampled
#[derive(Debug, Clone, PartialEq)]
pub struct Lut3D {
    /// Flattened samples: `[(r0,g0,b0), (r1,g0,b0), ..., (rN,gN,bN)]`.
    pub data: Vec<[f32; 3]>,
    /// Cube side (32 or 33 in this pipeline; any >= 2 is accepted).
    pub size: usize,
    /// Input domain minimum per channel.
    pub domain_min: [f32; 3],
    /// Input domain maximum per channel.
    pub domain_max: [f32; 3],
    /// Title carried into the `.cube` TITLE line.
    pub title: String,
}

impl Lut3D {
    /// Creates an identity (pass-through) LUT.
    pub fn identity(size: usize, title: impl Into<String>) -> Self {
        Self::from_fn(size, title, |rgb| rgb)
    }

    /// Builds a LUT by evaluating `f` at every grid point, R innermost.
    pub fn from_fn(size: usize, title: impl Into<String>, f: impl Fn([f32; 3]) -> [f32; 3]) -> Self {
        debug_assert!(size >= 2);
        let n = (size - 1) as f32;
        let mut data = Vec::with_capacity(size * size * size);
        for b in 0..size {
            for g in 0..size {
                for r in 0..size {
                    data.push(f([r as f32 / n, g as f32 / n, b as f32 / n]));
                }
            }
        }
        Self {
            data,
            size,
            domain_min: [0.0, 0.0, 0.0],
            domain_max: [1.0, 1.0, 1.0],
            title: title.into(),
        }
    }

    /// Creates a LUT from raw data in file (R-fastest) order.
    pub fn from_data(data: Vec<[f32; 3]>, size: usize, title: impl Into<String>) -> LutResult<Self> {
        let expected = size * size * size;
        if size < 2 {
            return Err(LutError::InvalidSize(format!("cube side must be >= 2, got {size}")));
        }
        if data.len() != expected {
            return Err(LutError::InvalidSize(format!(
                "expected {} entries for size {}, got {}",
                expected,
                size,
                data.len()
            )));
        }
        Ok(Self {
            data,
            size,
            domain_min: [0.0, 0.0, 0.0],
            domain_max: [1.0, 1.0, 1.0],
            title: title.into(),
        })
    }

    /// Total number of entries (`size^3`).
    #[inline]
    pub fn entry_count(&self) -> usize {
        self.size * self.size * self.size
    }

    /// Index of grid position (r, g, b) in file order.
    #[inline]
    fn index(&self, r: usize, g: usize, b: usize) -> usize {
        b * self.size * self.size + g * self.size + r
    }

    /// Value at grid position (r, g, b).
    #[inline]
    pub fn get(&self, r: usize, g: usize, b: usize) -> [f32; 3] {
        self.data[self.index(r, g, b)]
    }

    /// Applies the LUT to an RGB value with trilinear interpolation.
    ///
    /// Inputs outside [0, 1] are clamped to the domain first.
    pub fn apply(&self, rgb: [f32; 3]) -> [f32; 3] {
        let n = (self.size - 1) as f32;
        let norm = |v: f32, lo: f32, hi: f32| ((v - lo) / (hi - lo)).clamp(0.0, 1.0);
        let r = norm(rgb[0], self.domain_min[0], self.domain_max[0]);
        let g = norm(rgb[1], self.domain_min[1], self.domain_max[1]);
        let b = norm(rgb[2], self.domain_min[2], self.domain_max[2]);

        let ri = ((r * n).floor() as usize).min(self.size - 2);
        let gi = ((g * n).floor() as usize).min(self.size - 2);
        let bi = ((b * n).floor() as usize).min(self.size - 2);

        let rf = r * n - ri as f32;
        let gf = g * n - gi as f32;
        let bf = b * n - bi as f32;

        let c000 = self.get(ri, gi, bi);
        let c100 = self.get(ri + 1, gi, bi);
        let c010 = self.get(ri, gi + 1, bi);
        let c110 = self.get(ri + 1, gi + 1, bi);
        let c001 = self.get(ri, gi, bi + 1);
        let c101 = self.get(ri + 1, gi, bi + 1);
        let c011 = self.get(ri, gi + 1, bi + 1);
        let c111 = self.get(ri + 1, gi + 1, bi + 1);

        let mut out = [0.0f32; 3];
        for c in 0..3 {
            let c00 = c000[c] * (1.0 - rf) + c100[c] * rf;
            let c01 = c001[c] * (1.0 - rf) + c101[c] * rf;
            let c10 = c010[c] * (1.0 - rf) + c110[c] * rf;
            let c11 = c011[c] * (1.0 - rf) + c111[c] * rf;
            let c0 = c00 * (1.0 - gf) + c10 * gf;
            let c1 = c01 * (1.0 - gf) + c11 * gf;
            out[c] = c0 * (1.0 - bf) + c1 * bf;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn identity_has_endpoint_samples() {
        let lut = Lut3D::identity(17, "id");
        assert_eq!(lut.entry_count(), 17 * 17 * 17);
        assert_eq!(lut.get(0, 0, 0), [0.0, 0.0, 0.0]);
        assert_eq!(lut.get(16, 16, 16), [1.0, 1.0, 1.0]);
        // R varies fastest in memory
        assert_eq!(lut.data[1], [1.0 / 16.0, 0.0, 0.0]);
    }

    #[test]
    fn from_data_validates_count() {
        assert!(Lut3D::from_data(vec![[0.0; 3]; 8], 2, "ok").is_ok());
        assert!(Lut3D::from_data(vec![[0.0; 3]; 7], 2, "bad").is_err());
        assert!(Lut3D::from_data(vec![[0.0; 3]; 1], 1, "tiny").is_err());
    }

    #[test]
    fn trilinear_apply_is_identity_on_identity_lut() {
        let lut = Lut3D::identity(9, "id");
        for probe in [[0.0, 0.0, 0.0], [0.5, 0.25, 0.75], [1.0, 1.0, 1.0], [0.123, 0.456, 0.789]] {
            let out = lut.apply(probe);
            for c in 0..3 {
                assert_relative_eq!(out[c], probe[c], epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn apply_clamps_out_of_domain_probes() {
        let lut = Lut3D::identity(5, "id");
        let out = lut.apply([-0.5, 2.0, 0.5]);
        assert_relative_eq!(out[0], 0.0, epsilon = 1e-6);
        assert_relative_eq!(out[1], 1.0, epsilon = 1e-6);
    }
}
