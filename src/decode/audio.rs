// Audio track probing via extraction.
//
// Presence is determined empirically: extract a mono 16kHz WAV to a
// scoped temp file and check that something came out. Container metadata
// is not consulted.

use std::path::Path;
use std::process::Command;

use crate::constants::{AUDIO_PROBE_CHANNELS, AUDIO_PROBE_SAMPLE_RATE};
use crate::tools::ffmpeg_path;

/// Outcome of probing a file for an audio track. `Absent` means the
/// extraction ran and produced nothing usable; `Unavailable` means the
/// probe itself could not run, which callers treat as "no audio" but
/// tests and logs can tell apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioProbe {
    Present,
    Absent,
    Unavailable(String),
}

impl AudioProbe {
    pub fn has_audio(&self) -> bool {
        matches!(self, AudioProbe::Present)
    }
}

/// Probe a media file for an audio track. Never fails; the temp artifact
/// is removed on every path (deletion failures are swallowed by the
/// tempfile guard).
pub fn probe_audio_track(video_path: &Path) -> AudioProbe {
    let tmp = match tempfile::Builder::new()
        .prefix("content-judge-audio")
        .suffix(".wav")
        .tempfile()
    {
        Ok(t) => t,
        Err(e) => {
            return AudioProbe::Unavailable(format!("temp file creation failed: {}", e))
        }
    };

    let output = Command::new(ffmpeg_path())
        .arg("-y")
        .arg("-i")
        .arg(video_path)
        .args(["-vn", "-ac", AUDIO_PROBE_CHANNELS, "-ar", AUDIO_PROBE_SAMPLE_RATE])
        .args(["-f", "wav"])
        .arg(tmp.path())
        .output();

    match output {
        Err(e) => AudioProbe::Unavailable(format!("ffmpeg not runnable: {}", e)),
        Ok(out) if !out.status.success() => {
            // No audio stream, unreadable input, etc. The extraction ran,
            // so this is a definitive "nothing there".
            AudioProbe::Absent
        }
        Ok(_) => {
            let size = std::fs::metadata(tmp.path()).map(|m| m.len()).unwrap_or(0);
            if size > 0 {
                AudioProbe::Present
            } else {
                AudioProbe::Absent
            }
        }
    }
}
