//! Prompt-to-parameters command.
//!
//! One remote call per invocation. Every remote failure - missing key,
//! transport, endpoint error, refusal, malformed reply - surfaces as a
//! single "generation failed" error carrying the most specific detail;
//! the parameter state written out is always a fully valid merge result.

use anyhow::{Context, Result, anyhow};
use tracing::{debug, info};

use crate::PromptArgs;
use lutforge_grade::look::{Look, Profile};
use lutforge_grade::{CameraParams, GradeParams};
use lutforge_io::{load_image, save_image};
use lutforge_lut::{cube, sample_grade};
use lutforge_prompt::{PromptClient, build_instruction};

pub fn run(args: PromptArgs, verbose: bool) -> Result<()> {
    let api_key = args
        .api_key
        .clone()
        .or_else(|| std::env::var("LUTFORGE_API_KEY").ok())
        .unwrap_or_default();

    let client = match &args.endpoint {
        Some(endpoint) => PromptClient::with_endpoint(endpoint, api_key),
        None => PromptClient::new(api_key),
    };

    let instruction = match args.look {
        Profile::Cinematic => build_instruction::<GradeParams>(),
        Profile::Camera => build_instruction::<CameraParams>(),
    };

    debug!(profile = %args.look, "requesting parameters");
    let reply = client
        .generate(&args.prompt, &instruction)
        .map_err(|e| anyhow!("generation failed: {e}"))?;

    let (look, report) = Look::merged(args.look, &reply);
    info!(
        applied = report.applied.len(),
        coerced = report.coerced.len(),
        ignored = report.ignored.len(),
        defaulted = report.defaulted.len(),
        "merged reply into parameters"
    );
    if report.nothing_applied() {
        println!("warning: the reply contained no usable parameters; defaults kept");
    }

    let params_json = serde_json::to_string_pretty(&look.to_json())?;
    match &args.params_out {
        Some(path) => {
            std::fs::write(path, &params_json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            if verbose {
                println!("Parameters -> {}", path.display());
            }
        }
        None => println!("{params_json}"),
    }

    if let Some(cube_path) = &args.cube {
        let lut = sample_grade(&look, args.size, lut_title(&args.prompt));
        cube::write_3d(cube_path, &lut)
            .with_context(|| format!("failed to write {}", cube_path.display()))?;
        println!("LUT -> {}", cube_path.display());
    }

    if let Some(input) = &args.apply {
        let output = args
            .output
            .as_ref()
            .context("--apply requires --output for the graded image")?;
        let mut image = load_image(input)
            .with_context(|| format!("failed to load {}", input.display()))?;
        image.apply_grade_par(&look);
        save_image(output, &image)
            .with_context(|| format!("failed to save {}", output.display()))?;
        println!("Graded image -> {}", output.display());
    }

    Ok(())
}

/// TITLE line derived from the prompt: whitespace collapsed to
/// underscores, truncated to keep the header readable.
fn lut_title(prompt: &str) -> String {
    let mut title: String = prompt
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .take(24)
        .collect();
    if title.is_empty() {
        title.push_str("lutforge");
    }
    title
}
