//! Adobe/Resolve `.cube` LUT format support.
//!
//! The `.cube` format is a simple text-based LUT format widely supported
//! by DaVinci Resolve, Adobe applications, and many other tools.
//!
//! # Format
//!
//! ```text
//! TITLE "LUT Name"
//! LUT_3D_SIZE 32
//! DOMAIN_MIN 0.0 0.0 0.0
//! DOMAIN_MAX 1.0 1.0 1.0
//! 0.000000 0.000000 0.000000
//! ...
//! 1.000000 1.000000 1.000000
//! ```
//!
//! Rendering is byte-exact: a four-line header (quoted title, size,
//! domain min, domain max), then `size^3` data lines of six-decimal
//! space-separated triples, every line newline-terminated, no comments
//! and no trailing content. Data lines are R-fastest. Parsing is more
//! lenient and accepts comments, blank lines, and headers in any order.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::{Lut3D, LutError, LutResult};

/// Renders a 3D LUT to `.cube` text.
///
/// The output is consumed byte-for-byte by third-party color tools;
/// nothing beyond the header and data lines is emitted.
pub fn render_3d(lut: &Lut3D) -> String {
    // ~26 bytes per data line plus the header.
    let mut out = String::with_capacity(lut.entry_count() * 27 + 96);
    out.push_str(&format!("TITLE \"{}\"\n", lut.title));
    out.push_str(&format!("LUT_3D_SIZE {}\n", lut.size));
    out.push_str(&format!(
        "DOMAIN_MIN {:?} {:?} {:?}\n",
        lut.domain_min[0], lut.domain_min[1], lut.domain_min[2]
    ));
    out.push_str(&format!(
        "DOMAIN_MAX {:?} {:?} {:?}\n",
        lut.domain_max[0], lut.domain_max[1], lut.domain_max[2]
    ));
    for rgb in &lut.data {
        out.push_str(&format!("{:.6} {:.6} {:.6}\n", rgb[0], rgb[1], rgb[2]));
    }
    out
}

/// Writes a 3D LUT to a `.cube` file.
///
/// The LUT itself is untouched on failure; the error only reports the
/// file-system problem.
pub fn write_3d<P: AsRef<Path>>(path: P, lut: &Lut3D) -> LutResult<()> {
    std::fs::write(path.as_ref(), render_3d(lut))?;
    Ok(())
}

/// Reads a 3D LUT from a `.cube` file.
pub fn read_3d<P: AsRef<Path>>(path: P) -> LutResult<Lut3D> {
    let file = File::open(path.as_ref())?;
    parse_3d(BufReader::new(file))
}

/// Parses a 3D LUT from a reader.
pub fn parse_3d<R: BufRead>(reader: R) -> LutResult<Lut3D> {
    let mut size: Option<usize> = None;
    let mut title = String::new();
    let mut domain_min = [0.0_f32; 3];
    let mut domain_max = [1.0_f32; 3];
    let mut data: Vec<[f32; 3]> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(rest) = line.strip_prefix("TITLE") {
            title = rest.trim().trim_matches('"').to_string();
        } else if line.starts_with("LUT_3D_SIZE") {
            size = Some(parse_size(line)?);
        } else if line.starts_with("LUT_1D_SIZE") {
            return Err(LutError::ParseError("expected 3D LUT, found 1D".into()));
        } else if line.starts_with("DOMAIN_MIN") {
            domain_min = parse_domain(line)?;
        } else if line.starts_with("DOMAIN_MAX") {
            domain_max = parse_domain(line)?;
        } else {
            data.push(parse_rgb(line)?);
        }
    }

    let size = size.ok_or_else(|| LutError::ParseError("missing LUT_3D_SIZE".into()))?;
    let mut lut = Lut3D::from_data(data, size, title)?;
    lut.domain_min = domain_min;
    lut.domain_max = domain_max;
    Ok(lut)
}

fn parse_size(line: &str) -> LutResult<usize> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 2 {
        return Err(LutError::ParseError("invalid size line".into()));
    }
    parts[1]
        .parse()
        .map_err(|_| LutError::ParseError("invalid size value".into()))
}

fn parse_domain(line: &str) -> LutResult<[f32; 3]> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 4 {
        return Err(LutError::ParseError("invalid domain line".into()));
    }
    Ok([
        parts[1].parse().map_err(|_| LutError::ParseError("invalid domain R".into()))?,
        parts[2].parse().map_err(|_| LutError::ParseError("invalid domain G".into()))?,
        parts[3].parse().map_err(|_| LutError::ParseError("invalid domain B".into()))?,
    ])
}

fn parse_rgb(line: &str) -> LutResult<[f32; 3]> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 3 {
        return Err(LutError::ParseError(format!("invalid RGB line: {line}")));
    }
    Ok([
        parts[0].parse().map_err(|_| LutError::ParseError("invalid R value".into()))?,
        parts[1].parse().map_err(|_| LutError::ParseError("invalid G value".into()))?,
        parts[2].parse().map_err(|_| LutError::ParseError("invalid B value".into()))?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn identity_header_is_byte_exact() {
        let lut = Lut3D::identity(32, "neutral");
        let text = render_3d(&lut);
        let expected =
            "TITLE \"neutral\"\nLUT_3D_SIZE 32\nDOMAIN_MIN 0.0 0.0 0.0\nDOMAIN_MAX 1.0 1.0 1.0\n0.000000 0.000000 0.000000\n";
        assert!(text.starts_with(expected), "got: {}", &text[..expected.len().min(text.len())]);
    }

    #[test]
    fn line_count_is_header_plus_cube() {
        let lut = Lut3D::identity(32, "t");
        let text = render_3d(&lut);
        assert_eq!(text.lines().count(), 4 + 32 * 32 * 32);
        assert!(text.ends_with("1.000000 1.000000 1.000000\n"));
    }

    #[test]
    fn data_lines_have_six_decimals() {
        let lut = Lut3D::identity(2, "t");
        let text = render_3d(&lut);
        let first_data = text.lines().nth(4).unwrap();
        assert_eq!(first_data, "0.000000 0.000000 0.000000");
        let second = text.lines().nth(5).unwrap();
        assert_eq!(second, "1.000000 0.000000 0.000000");
    }

    #[test]
    fn render_parse_round_trips() {
        let lut = Lut3D::from_fn(5, "roundtrip", |rgb| [rgb[0] * 0.5, rgb[1], 1.0 - rgb[2]]);
        let parsed = parse_3d(Cursor::new(render_3d(&lut))).expect("parse failed");
        assert_eq!(parsed.size, 5);
        assert_eq!(parsed.title, "roundtrip");
        assert_eq!(parsed.entry_count(), lut.entry_count());
        for (a, b) in lut.data.iter().zip(parsed.data.iter()) {
            for c in 0..3 {
                assert!((a[c] - b[c]).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn parse_accepts_comments_and_blank_lines() {
        let cube = r#"
# Test LUT
TITLE "Test Grade"
LUT_3D_SIZE 2
DOMAIN_MIN 0.0 0.0 0.0
DOMAIN_MAX 1.0 1.0 1.0

0.0 0.0 0.0
1.0 0.0 0.0
0.0 1.0 0.0
1.0 1.0 0.0
0.0 0.0 1.0
1.0 0.0 1.0
0.0 1.0 1.0
1.0 1.0 1.0
"#;
        let lut = parse_3d(Cursor::new(cube)).expect("parse failed");
        assert_eq!(lut.size, 2);
        assert_eq!(lut.title, "Test Grade");
    }

    #[test]
    fn parse_rejects_wrong_entry_count() {
        let cube = "LUT_3D_SIZE 2\n0.0 0.0 0.0\n";
        assert!(parse_3d(Cursor::new(cube)).is_err());
    }

    #[test]
    fn parse_rejects_1d_luts() {
        let cube = "LUT_1D_SIZE 3\n0.0 0.0 0.0\n";
        assert!(parse_3d(Cursor::new(cube)).is_err());
    }

    #[test]
    fn write_read_round_trips_on_disk() {
        let lut = Lut3D::identity(4, "disk");
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("identity.cube");
        write_3d(&path, &lut).expect("write failed");
        let loaded = read_3d(&path).expect("read failed");
        assert_eq!(loaded.size, 4);
        assert_eq!(loaded.title, "disk");
    }
}
