// FFprobe wrapper for metadata extraction

use std::path::Path;
use std::process::Command;
use serde::Deserialize;

use crate::error::{JudgeError, Result};
use crate::metadata::MediaMetadata;

#[derive(Debug, Deserialize)]
struct FFprobeOutput {
    streams: Option<Vec<FFprobeStream>>,
    format: Option<FFprobeFormat>,
}

#[derive(Debug, Deserialize)]
struct FFprobeStream {
    codec_type: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    r_frame_rate: Option<String>,
    duration: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FFprobeFormat {
    duration: Option<String>,
}

/// Run ffprobe on a file and extract the stream properties the feature
/// pipeline consumes (duration, dimensions, native frame rate).
pub fn probe(path: &Path) -> Result<MediaMetadata> {
    let output = Command::new(crate::tools::ffprobe_path())
        .args([
            "-v", "quiet",
            "-print_format", "json",
            "-show_format",
            "-show_streams",
        ])
        .arg(path)
        .output()
        .map_err(|e| JudgeError::Other(format!("failed to run ffprobe: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(JudgeError::Other(format!("ffprobe failed: {}", stderr)));
    }

    let probe_output: FFprobeOutput = serde_json::from_slice(&output.stdout)
        .map_err(|e| JudgeError::Other(format!("failed to parse ffprobe output: {}", e)))?;

    let mut meta = MediaMetadata::default();

    // First video stream wins
    if let Some(ref streams) = probe_output.streams {
        for stream in streams {
            if stream.codec_type.as_deref() == Some("video") {
                meta.width = stream.width.unwrap_or(0);
                meta.height = stream.height.unwrap_or(0);
                meta.fps = parse_frame_rate(stream.r_frame_rate.as_deref());
                if meta.duration_s == 0.0 {
                    meta.duration_s = parse_duration_s(stream.duration.as_deref());
                }
                break;
            }
        }
    }

    // Containers without per-stream durations report it at format level
    if meta.duration_s == 0.0 {
        if let Some(ref format) = probe_output.format {
            meta.duration_s = parse_duration_s(format.duration.as_deref());
        }
    }

    Ok(meta)
}

/// Parse frame rate string like "30000/1001" to f64
fn parse_frame_rate(rate_str: Option<&str>) -> Option<f64> {
    let rate_str = rate_str?;
    if let Some((num, den)) = rate_str.split_once('/') {
        let num: f64 = num.parse().ok()?;
        let den: f64 = den.parse().ok()?;
        if den > 0.0 {
            return Some(num / den);
        }
        return None;
    }
    rate_str.parse().ok()
}

/// Parse duration string to seconds, 0.0 when absent or malformed
fn parse_duration_s(duration_str: Option<&str>) -> f64 {
    duration_str
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Check if ffprobe is available
pub fn is_available() -> bool {
    crate::tools::is_tool_available("ffprobe")
}
