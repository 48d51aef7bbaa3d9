// Content Judge CLI binary

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use content_judge::pipeline::{judge, JudgeOptions};
use content_judge::JudgeOutput;

#[derive(Parser)]
#[command(name = "content-judge")]
#[command(about = "Judge content: AI vs human, virality score, and audience distribution", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Judge a text file
    Text {
        /// Path to a text file
        path: PathBuf,
        /// Optional output JSON file path
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Include debug features in output
        #[arg(long)]
        debug: bool,
    },

    /// Judge a video file
    Video {
        /// Path to a video file
        path: PathBuf,
        /// Optional transcript file (txt)
        #[arg(short, long)]
        transcript: Option<PathBuf>,
        /// Frames per second to sample
        #[arg(long, default_value = "1.0")]
        fps_sample: f64,
        /// Max frames to analyze
        #[arg(long, default_value = "60")]
        max_frames: usize,
        /// Optional output JSON file path
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Include debug features in output
        #[arg(long)]
        debug: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Text { path, out, debug } => cmd_text(path, out, debug),
        Commands::Video {
            path,
            transcript,
            fps_sample,
            max_frames,
            out,
            debug,
        } => cmd_video(path, transcript, fps_sample, max_frames, out, debug),
    }
}

fn cmd_text(path: PathBuf, out: Option<PathBuf>, debug: bool) -> Result<()> {
    let bytes = std::fs::read(&path)?;
    let text = String::from_utf8_lossy(&bytes);

    let options = JudgeOptions {
        include_debug: debug,
        ..Default::default()
    };
    let result = judge(Some(&text), None, None, &options)?;

    emit(&result, out)
}

fn cmd_video(
    path: PathBuf,
    transcript: Option<PathBuf>,
    fps_sample: f64,
    max_frames: usize,
    out: Option<PathBuf>,
    debug: bool,
) -> Result<()> {
    if fps_sample <= 0.0 {
        anyhow::bail!("sampling rate must be greater than 0");
    }

    let options = JudgeOptions {
        fps_sample,
        max_frames,
        include_debug: debug,
    };
    let result = judge(None, Some(&path), transcript.as_deref(), &options)?;

    emit(&result, out)
}

fn emit(result: &JudgeOutput, out: Option<PathBuf>) -> Result<()> {
    let payload = serde_json::to_string_pretty(result)?;

    if let Some(out_path) = out {
        if let Some(parent) = out_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&out_path, &payload)?;
    }

    println!("{}", payload);
    Ok(())
}
