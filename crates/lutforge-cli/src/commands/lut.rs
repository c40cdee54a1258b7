//! LUT export command.

use anyhow::{Context, Result, bail};

use crate::LutArgs;
use lutforge_lut::{cube, sample_grade};

/// Cube sides accepted by the exporter. Consumers expect 32 or 33; other
/// small sizes are allowed for experimentation.
const SIZE_RANGE: std::ops::RangeInclusive<usize> = 2..=128;

pub fn run(args: LutArgs, verbose: bool) -> Result<()> {
    if !SIZE_RANGE.contains(&args.size) {
        bail!("cube size {} out of range ({}..={})", args.size, SIZE_RANGE.start(), SIZE_RANGE.end());
    }

    let look = super::build_look(args.look, args.params.as_deref(), &args.set)?;

    let title = match args.title {
        Some(title) => title,
        None => args
            .output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("lutforge")
            .to_string(),
    };

    let lut = sample_grade(&look, args.size, title);
    cube::write_3d(&args.output, &lut)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    if verbose {
        println!(
            "Wrote {} ({}^3 = {} samples)",
            args.output.display(),
            lut.size,
            lut.entry_count()
        );
    }
    Ok(())
}
