// Frame decoding over an ffmpeg-sidecar rawvideo pipe.
//
// The decoder has an explicit open/close lifecycle: open failure is a
// distinct fatal error (a video that cannot be opened must not degrade
// into an all-zero feature set), while decode errors after a successful
// open surface as events the caller can weigh against the frame count.

pub mod audio;
pub mod frame;

use std::path::Path;

use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::child::FfmpegChild;
use ffmpeg_sidecar::event::{FfmpegEvent, LogLevel};

use crate::error::{JudgeError, Result};
pub use frame::GrayFrame;

/// One decoder observation: either a greyscale frame or an error line
/// from the decoding process.
#[derive(Debug)]
pub enum DecodeEvent {
    Frame(GrayFrame),
    Error(String),
}

/// Sequential greyscale frame access for a video file.
pub struct FrameDecoder {
    child: FfmpegChild,
    native_fps: f64,
}

impl FrameDecoder {
    /// Open a video for decoding. `native_fps` comes from the metadata
    /// probe; callers fall back to a nominal rate when the probe has none.
    pub fn open(path: &Path, native_fps: f64) -> Result<Self> {
        if !path.exists() {
            return Err(JudgeError::VideoOpen(format!(
                "no such file: {}",
                path.display()
            )));
        }

        let child = FfmpegCommand::new()
            .input(path.to_string_lossy())
            .args(["-an"])
            .rawvideo()
            .spawn()
            .map_err(|e| {
                JudgeError::VideoOpen(format!("{}: {}", path.display(), e))
            })?;

        Ok(Self { child, native_fps })
    }

    /// Native frame rate of the source as reported by the probe.
    pub fn native_fps(&self) -> f64 {
        self.native_fps
    }

    /// Iterate decoder events in presentation order. Frames arrive as
    /// RGB24 and are reduced to greyscale here.
    pub fn events(&mut self) -> Result<impl Iterator<Item = DecodeEvent>> {
        let iter = self
            .child
            .iter()
            .map_err(|e| JudgeError::VideoOpen(e.to_string()))?;

        Ok(iter.filter_map(|event| match event {
            FfmpegEvent::OutputFrame(f) => Some(DecodeEvent::Frame(GrayFrame::from_rgb24(
                f.width as usize,
                f.height as usize,
                &f.data,
            ))),
            FfmpegEvent::Log(LogLevel::Error, msg)
            | FfmpegEvent::Log(LogLevel::Fatal, msg) => Some(DecodeEvent::Error(msg)),
            _ => None,
        }))
    }

    /// Stop decoding and reap the process. Safe to call after a partial
    /// read (frame budget reached); shutdown failures are swallowed.
    pub fn close(mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
