// Audio and transcript feature extraction
// No speech recognition here: audio presence is probed empirically, and
// a transcript only contributes if the caller supplies one.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::decode::audio::{probe_audio_track, AudioProbe};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AudioFeatures {
    pub has_audio: bool,
    pub transcript_present: bool,
    pub transcript_len_words: usize,
}

/// Probe the audio track and reduce an optional transcript to its word
/// count. Never fails: a missing transcript or an unavailable extraction
/// tool degrades to false/0 (the latter logged as a degraded signal).
pub fn extract_audio_features(
    video_path: &Path,
    transcript_path: Option<&Path>,
) -> AudioFeatures {
    let (transcript_present, transcript_len_words) = match transcript_path {
        Some(p) if p.exists() => match std::fs::read(p) {
            Ok(bytes) => {
                let txt = String::from_utf8_lossy(&bytes);
                (true, txt.split_whitespace().count())
            }
            Err(e) => {
                log::debug!("transcript unreadable at {}: {}", p.display(), e);
                (false, 0)
            }
        },
        _ => (false, 0),
    };

    let probe = probe_audio_track(video_path);
    if let AudioProbe::Unavailable(ref reason) = probe {
        log::warn!(
            "audio probe unavailable for {}: {}",
            video_path.display(),
            reason
        );
    }

    AudioFeatures {
        has_audio: probe.has_audio(),
        transcript_present,
        transcript_len_words,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_transcript_defaults() {
        let f = extract_audio_features(
            Path::new("/nonexistent/clip.mp4"),
            Some(Path::new("/nonexistent/transcript.txt")),
        );
        assert!(!f.transcript_present);
        assert_eq!(f.transcript_len_words, 0);
        assert!(!f.has_audio);
    }

    #[test]
    fn test_transcript_word_count() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        write!(tmp, "hello there,  spaced   out\nwords").unwrap();

        let f = extract_audio_features(Path::new("/nonexistent/clip.mp4"), Some(tmp.path()));
        assert!(f.transcript_present);
        assert_eq!(f.transcript_len_words, 5);
    }

    #[test]
    fn test_no_transcript_path() {
        let f = extract_audio_features(Path::new("/nonexistent/clip.mp4"), None);
        assert!(!f.transcript_present);
        assert_eq!(f.transcript_len_words, 0);
    }
}
