// Media metadata probing

pub mod ffprobe;

use std::path::Path;
use serde::{Deserialize, Serialize};

/// Best-effort metadata for a media file. Fields keep their zero defaults
/// when the probe cannot determine them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediaMetadata {
    pub duration_s: f64,
    pub width: u32,
    pub height: u32,
    pub fps: Option<f64>,
}

/// Probe a media file. Never fails: any probe error is logged as a
/// degraded signal and an empty result returned, so callers always
/// proceed with defaults.
pub fn probe(path: &Path) -> MediaMetadata {
    match ffprobe::probe(path) {
        Ok(meta) => meta,
        Err(e) => {
            log::debug!("metadata probe failed for {}: {}", path.display(), e);
            MediaMetadata::default()
        }
    }
}
