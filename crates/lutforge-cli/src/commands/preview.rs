//! Synthetic preview sequence command.
//!
//! Drives the latest-wins preview loop over the synthetic source and
//! dumps each committed frame as a numbered PNG. Stands in for a live
//! capture device, which lives behind the same `FrameSource` seam.

use anyhow::{Context, Result};

use crate::PreviewArgs;
use lutforge_io::png;
use lutforge_preview::{PreviewSession, SyntheticSource};

pub fn run(args: PreviewArgs, verbose: bool) -> Result<()> {
    let look = super::build_look(args.look, args.params.as_deref(), &args.set)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create {}", args.out_dir.display()))?;

    let source = SyntheticSource::new(args.width, args.height)
        .context("invalid preview dimensions")?
        .with_frame_limit(args.frames);
    let mut session = PreviewSession::new(source, look);

    let mut committed = 0u64;
    while let Some(frame) = session.render_next() {
        let path = args.out_dir.join(format!("frame_{committed:04}.png"));
        png::write(&path, &frame)
            .with_context(|| format!("failed to write {}", path.display()))?;
        committed += 1;
    }
    session.stop();

    if verbose {
        println!(
            "Rendered {} frame(s) ({}x{}) into {}",
            committed,
            args.width,
            args.height,
            args.out_dir.display()
        );
    }
    Ok(())
}
