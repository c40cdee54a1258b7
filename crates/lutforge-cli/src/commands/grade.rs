//! Whole-image grading command.

use anyhow::{Context, Result};
use tracing::debug;

use crate::GradeArgs;
use lutforge_io::{MAX_FILE_BYTES_DEFAULT, load_image_with_limits, save_image};

pub fn run(args: GradeArgs, verbose: bool) -> Result<()> {
    let mut image = load_image_with_limits(&args.input, args.max_edge, MAX_FILE_BYTES_DEFAULT)
        .with_context(|| format!("failed to load {}", args.input.display()))?;

    let look = super::build_look(args.look, args.params.as_deref(), &args.set)?;
    debug!(profile = %look.profile(), "applying grade");

    image.apply_grade_par(&look);

    save_image(&args.output, &image)
        .with_context(|| format!("failed to save {}", args.output.display()))?;

    if verbose {
        println!(
            "Graded {} ({}x{}) -> {}",
            args.input.display(),
            image.width(),
            image.height(),
            args.output.display()
        );
    }
    Ok(())
}
