//! lutforge - prompt-driven color grading and 3D LUT export.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use lutforge_grade::look::Profile;

mod commands;

#[derive(Parser)]
#[command(name = "lutforge")]
#[command(author, version, about = "Color grading and 3D LUT export")]
#[command(long_about = "
Grades still images, exports grades as industry-standard .cube 3D LUTs,
and derives grading parameters from natural-language prompts via a
text-generation endpoint.

Examples:
  lutforge grade photo.jpg -o graded.png --set exposure=0.5 --set temperature=0.3
  lutforge grade photo.jpg -o graded.png --look camera --set vibrance=40
  lutforge lut -o teal.cube --params teal.json --size 32
  lutforge lut-info teal.cube --probe 0.5,0.5,0.5
  lutforge prompt --prompt 'bleak winter, crushed blacks' --cube winter.cube
  lutforge preview --frames 24 --out-dir frames/ --set posterize=60 --look camera
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a grade to an image
    #[command(visible_alias = "g")]
    Grade(GradeArgs),

    /// Export a grade as a .cube 3D LUT
    Lut(LutArgs),

    /// Inspect a .cube LUT file
    #[command(name = "lut-info")]
    LutInfo(LutInfoArgs),

    /// Derive grading parameters from a natural-language prompt
    #[command(visible_alias = "p")]
    Prompt(PromptArgs),

    /// Render a graded synthetic preview sequence
    Preview(PreviewArgs),
}

#[derive(Args)]
struct GradeArgs {
    /// Input image (png, jpg)
    input: PathBuf,

    /// Output image (png, jpg)
    #[arg(short, long)]
    output: PathBuf,

    /// Grading profile: cinematic, camera
    #[arg(long, default_value = "cinematic")]
    look: Profile,

    /// Parameter file (JSON object with wire keys)
    #[arg(long)]
    params: Option<PathBuf>,

    /// Override one knob (repeatable), e.g. --set exposure=0.5
    #[arg(long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,

    /// Downscale sources whose long edge exceeds this (0 = off)
    #[arg(long, default_value = "1500")]
    max_edge: u32,
}

#[derive(Args)]
struct LutArgs {
    /// Output .cube file
    #[arg(short, long)]
    output: PathBuf,

    /// Grading profile: cinematic, camera
    #[arg(long, default_value = "cinematic")]
    look: Profile,

    /// Parameter file (JSON object with wire keys)
    #[arg(long)]
    params: Option<PathBuf>,

    /// Override one knob (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,

    /// Cube side (32 or 33 for most consumers)
    #[arg(long, default_value = "32")]
    size: usize,

    /// TITLE line (defaults to the output file stem)
    #[arg(long)]
    title: Option<String>,
}

#[derive(Args)]
struct LutInfoArgs {
    /// Input .cube file
    input: PathBuf,

    /// Probe an RGB input through the LUT, e.g. --probe 0.5,0.5,0.5
    #[arg(long, value_name = "R,G,B")]
    probe: Option<String>,
}

#[derive(Args)]
struct PromptArgs {
    /// Natural-language look description
    #[arg(long)]
    prompt: String,

    /// API key (falls back to $LUTFORGE_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Override the text-generation endpoint URL
    #[arg(long)]
    endpoint: Option<String>,

    /// Grading profile: cinematic, camera
    #[arg(long, default_value = "cinematic")]
    look: Profile,

    /// Write the merged parameters to a JSON file
    #[arg(long)]
    params_out: Option<PathBuf>,

    /// Export the derived grade as a .cube LUT
    #[arg(long)]
    cube: Option<PathBuf>,

    /// Cube side for --cube
    #[arg(long, default_value = "32")]
    size: usize,

    /// Apply the derived grade to this image
    #[arg(long)]
    apply: Option<PathBuf>,

    /// Output image for --apply
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct PreviewArgs {
    /// Number of frames to render
    #[arg(long, default_value = "10")]
    frames: u64,

    /// Directory for numbered PNG frames
    #[arg(long)]
    out_dir: PathBuf,

    /// Grading profile: cinematic, camera
    #[arg(long, default_value = "camera")]
    look: Profile,

    /// Parameter file (JSON object with wire keys)
    #[arg(long)]
    params: Option<PathBuf>,

    /// Override one knob (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,

    /// Frame width
    #[arg(long, default_value = "320")]
    width: u32,

    /// Frame height
    #[arg(long, default_value = "180")]
    height: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Grade(args) => commands::grade::run(args, cli.verbose),
        Commands::Lut(args) => commands::lut::run(args, cli.verbose),
        Commands::LutInfo(args) => commands::lut_info::run(args, cli.verbose),
        Commands::Prompt(args) => commands::prompt::run(args, cli.verbose),
        Commands::Preview(args) => commands::preview::run(args, cli.verbose),
    }
}
