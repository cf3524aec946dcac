//! Animated GIF Frame Recorder
//!
//! Renders one frame per completed pass: a `len x len` two-colour image with
//! one foreground pixel per column, at row `len - value[x]`. Sorted input
//! shows up as a diagonal. Frames are streamed to the encoder as they arrive
//! instead of being buffered, since a worst-case bubble sort over 1000
//! elements produces a thousand megapixel frames.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use gif::{Encoder, Frame, Repeat};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::sequence::{PassObserver, Sequence};

const BACKGROUND: u8 = 0;
const FOREGROUND: u8 = 1;

/// Global palette: white background, black foreground.
const PALETTE: [u8; 6] = [0xff, 0xff, 0xff, 0x00, 0x00, 0x00];

/// Path of the artifact for `name` inside `dir`.
pub fn artifact_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.gif", name))
}

/// Palette indices for one frame of `seq`, row-major, `len x len`.
///
/// Values that would land outside the frame are not drawn.
pub fn render_frame(seq: &Sequence) -> Vec<u8> {
    let len = seq.len();
    let mut pixels = vec![BACKGROUND; len * len];
    for (x, value) in seq.iter().enumerate() {
        let row = len as i64 - i64::from(value);
        if (0..len as i64).contains(&row) {
            pixels[row as usize * len + x] = FOREGROUND;
        }
    }
    pixels
}

/// Streams one GIF frame per observed pass into `W`.
pub struct GifRecorder<W: Write> {
    encoder: Encoder<W>,
    len: usize,
    side: u16,
    frames: usize,
    error: Option<Error>,
}

impl GifRecorder<BufWriter<File>> {
    /// Create `path` and write the GIF header for a sequence of `len`.
    pub fn create(path: &Path, len: usize) -> Result<Self> {
        let side = frame_side(len)?;
        let file = File::create(path).map_err(|source| Error::Create {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), len, "recording frames");
        Self::start(BufWriter::new(file), len, side)
    }
}

impl<W: Write> GifRecorder<W> {
    /// Record into an arbitrary writer.
    pub fn new(writer: W, len: usize) -> Result<Self> {
        let side = frame_side(len)?;
        Self::start(writer, len, side)
    }

    fn start(writer: W, len: usize, side: u16) -> Result<Self> {
        let mut encoder = Encoder::new(writer, side, side, &PALETTE)?;
        encoder.set_repeat(Repeat::Infinite)?;
        Ok(GifRecorder {
            encoder,
            len,
            side,
            frames: 0,
            error: None,
        })
    }

    /// Frames written so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Render and encode one frame for the current state of `seq`.
    pub fn record(&mut self, seq: &Sequence) -> Result<()> {
        debug_assert_eq!(seq.len(), self.len);
        let mut pixels = render_frame(seq);
        if pixels.is_empty() {
            // A zero-length sequence still gets a 1x1 blank frame.
            pixels.push(BACKGROUND);
        }
        let frame = Frame {
            width: self.side,
            height: self.side,
            buffer: Cow::Owned(pixels),
            ..Frame::default()
        };
        self.encoder.write_frame(&frame)?;
        self.frames += 1;
        Ok(())
    }

    /// Write the trailer and flush. Reports the first error hit while
    /// recording as an observer, if any.
    pub fn finish(self) -> Result<W> {
        if let Some(err) = self.error {
            return Err(err);
        }
        let mut writer = self.encoder.into_inner()?;
        writer.flush()?;
        Ok(writer)
    }
}

impl<W: Write> PassObserver for GifRecorder<W> {
    fn on_pass(&mut self, seq: &Sequence) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.record(seq) {
            warn!(frame = self.frames, error = %err, "dropping remaining frames");
            self.error = Some(err);
        }
    }
}

fn frame_side(len: usize) -> Result<u16> {
    u16::try_from(len.max(1)).map_err(|_| Error::FrameTooLarge {
        len,
        max: usize::from(u16::MAX),
    })
}
