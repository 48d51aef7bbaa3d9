// Video feature extraction
// Samples frames at a target rate and reduces them to brightness, motion,
// sharpness, and text-overlay signals.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{
    FALLBACK_NATIVE_FPS, OVERLAY_BAND_START_FRACTION, OVERLAY_EDGE_HIGH,
    OVERLAY_EDGE_LOW, OVERLAY_GAIN,
};
use crate::decode::{DecodeEvent, FrameDecoder, GrayFrame};
use crate::error::{JudgeError, Result};
use crate::metadata;

/// Frame-derived metrics for a video. Values are best-effort: individual
/// metrics fall back to 0 when the probe or decode yields nothing for
/// them. Computed once per call; nothing is cached across invocations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoFeatures {
    pub duration_s: f64,
    pub width: u32,
    pub height: u32,
    pub sampled_frames: usize,
    pub avg_brightness: f64,
    pub motion_score: f64,
    pub sharpness_score: f64,
    pub text_overlay_likelihood: f64,
}

/// Decode and sample a video, averaging per-frame metrics over the kept
/// frames. Fails on a non-positive sampling rate (input error) or when
/// the source cannot be opened (fatal extraction error); all other
/// problems degrade to zero-valued metrics.
pub fn extract_video_features(
    video_path: &Path,
    fps_sample: f64,
    max_frames: usize,
) -> Result<VideoFeatures> {
    if fps_sample <= 0.0 {
        return Err(JudgeError::InvalidSamplingRate);
    }

    let meta = metadata::probe(video_path);
    let native_fps = meta
        .fps
        .filter(|f| *f > 0.0)
        .unwrap_or(FALLBACK_NATIVE_FPS);

    let mut decoder = FrameDecoder::open(video_path, native_fps)?;

    // One kept frame per stride, so sampling tracks the requested rate
    // regardless of the native rate
    let step = ((decoder.native_fps() / fps_sample) as usize).max(1);

    let mut prev: Option<GrayFrame> = None;
    let mut brights: Vec<f64> = Vec::new();
    let mut sharps: Vec<f64> = Vec::new();
    let mut motions: Vec<f64> = Vec::new();
    let mut overlays: Vec<f64> = Vec::new();
    let mut errors: Vec<String> = Vec::new();

    let mut frame_idx = 0usize;
    let mut kept = 0usize;

    let events = match decoder.events() {
        Ok(events) => events,
        Err(e) => {
            decoder.close();
            return Err(e);
        }
    };

    for event in events {
        match event {
            DecodeEvent::Frame(gray) => {
                if kept >= max_frames {
                    break;
                }
                if frame_idx % step != 0 {
                    frame_idx += 1;
                    continue;
                }
                frame_idx += 1;
                kept += 1;

                brights.push(gray.mean());
                sharps.push(gray.laplacian_variance());
                // Motion compares consecutive *kept* frames; skipped
                // frames are not compensated for, so the value is only
                // comparable across runs with the same sampling rate.
                if let Some(ref p) = prev {
                    motions.push(gray.mean_abs_diff(p));
                }
                overlays.push(gray.band_edge_density(
                    OVERLAY_BAND_START_FRACTION,
                    OVERLAY_EDGE_LOW,
                    OVERLAY_EDGE_HIGH,
                ));
                prev = Some(gray);
            }
            DecodeEvent::Error(msg) => {
                log::debug!("decode error for {}: {}", video_path.display(), msg);
                errors.push(msg);
            }
        }
    }
    decoder.close();

    // A decoder that produced nothing but errors never really opened the
    // source; an all-zero feature set would masquerade as a valid video
    if kept == 0 && !errors.is_empty() {
        return Err(JudgeError::VideoOpen(format!(
            "{}: {}",
            video_path.display(),
            errors.join("; ")
        )));
    }

    let overlay_mean = mean(&overlays);
    Ok(VideoFeatures {
        duration_s: meta.duration_s,
        width: meta.width,
        height: meta.height,
        sampled_frames: kept,
        avg_brightness: mean(&brights),
        motion_score: mean(&motions),
        sharpness_score: mean(&sharps),
        text_overlay_likelihood: (overlay_mean * OVERLAY_GAIN).clamp(0.0, 1.0),
    })
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_sampling_rate() {
        let err = extract_video_features(Path::new("clip.mp4"), 0.0, 60).unwrap_err();
        assert_eq!(err.to_string(), "sampling rate must be greater than 0");
    }

    #[test]
    fn test_rejects_negative_sampling_rate() {
        let err = extract_video_features(Path::new("clip.mp4"), -1.0, 60).unwrap_err();
        assert!(matches!(err, JudgeError::InvalidSamplingRate));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let err =
            extract_video_features(Path::new("/nonexistent/clip.mp4"), 1.0, 60).unwrap_err();
        assert!(matches!(err, JudgeError::VideoOpen(_)));
    }

    #[test]
    fn test_mean_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
        assert!((mean(&[1.0, 2.0, 3.0]) - 2.0).abs() < 1e-9);
    }
}
