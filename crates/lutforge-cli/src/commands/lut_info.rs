//! LUT inspection command.

use anyhow::{Context, Result, bail};

use crate::LutInfoArgs;
use lutforge_lut::cube;

pub fn run(args: LutInfoArgs, _verbose: bool) -> Result<()> {
    let lut = cube::read_3d(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    println!("{}", args.input.display());
    println!("  title:   \"{}\"", lut.title);
    println!("  size:    {}^3 ({} entries)", lut.size, lut.entry_count());
    println!(
        "  domain:  [{:?} {:?} {:?}] .. [{:?} {:?} {:?}]",
        lut.domain_min[0], lut.domain_min[1], lut.domain_min[2],
        lut.domain_max[0], lut.domain_max[1], lut.domain_max[2]
    );

    if let Some(probe) = args.probe {
        let rgb = parse_probe(&probe)?;
        let out = lut.apply(rgb);
        println!(
            "  probe:   ({:.6} {:.6} {:.6}) -> ({:.6} {:.6} {:.6})",
            rgb[0], rgb[1], rgb[2], out[0], out[1], out[2]
        );
    }
    Ok(())
}

/// Parse comma-separated RGB values.
fn parse_probe(s: &str) -> Result<[f32; 3]> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        bail!("expected 3 values (R,G,B), got {}", parts.len());
    }
    Ok([
        parts[0].trim().parse()?,
        parts[1].trim().parse()?,
        parts[2].trim().parse()?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_parses_triples() {
        assert_eq!(parse_probe("0.5, 0.25,1").unwrap(), [0.5, 0.25, 1.0]);
        assert!(parse_probe("0.5,0.25").is_err());
        assert!(parse_probe("a,b,c").is_err());
    }
}
