//! Screenshot capture seam and thumbnailing.

use std::{io, path::Path};

use derive_more::with_trait::{Display, Error, From};
use image::GenericImageView as _;

/// Error of capturing or post-processing a screenshot.
///
/// These are consumed by the writer and degrade the affected step row to an
/// `error capturing` marker; they are never propagated and never abort a
/// run.
#[derive(Debug, Display, Error, From)]
pub enum CaptureError {
    /// Underlying I/O failure while writing or reading the image.
    #[display("screenshot I/O failed: {_0}")]
    Io(io::Error),

    /// Decoding, resizing or encoding the image failed.
    #[display("image processing failed: {_0}")]
    Image(image::ImageError),

    /// No screenshot source is attached to this run.
    #[display("no screenshot source is attached to this run")]
    Unavailable,

    /// Driver-specific failure, reported as plain text.
    #[display("{_0}")]
    Other(#[error(not(source))] String),
}

/// Result of a screenshot capture attempt.
pub type CaptureResult = Result<(), CaptureError>;

/// Source of step screenshots, typically backed by a browser-automation
/// driver.
///
/// Implemented for any `FnMut(&Path) -> CaptureResult` closure, so wiring up
/// a driver is a one-liner:
///
/// ```no_run
/// use livingdoc::{CaptureError, CaptureResult, LivingDocs};
///
/// let writer = LivingDocs::new(
///     "livingdocs/content/web",
///     |path: &std::path::Path| -> CaptureResult {
///         // driver.save_screenshot(path)
///         Err(CaptureError::Other("driver gone".into()))
///     },
/// );
/// ```
pub trait Screenshooter {
    /// Captures a full-size screenshot of the current state into the file at
    /// `path`.
    ///
    /// On success the file at `path` must exist and contain a decodable
    /// image.
    fn capture(&mut self, path: &Path) -> CaptureResult;
}

impl<F: FnMut(&Path) -> CaptureResult> Screenshooter for F {
    fn capture(&mut self, path: &Path) -> CaptureResult {
        self(path)
    }
}

/// [`Screenshooter`] for runs without any browser attached.
///
/// Every capture fails with [`CaptureError::Unavailable`], so every step row
/// degrades to the `error capturing` marker instead of an image link.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoScreenshots;

impl Screenshooter for NoScreenshots {
    fn capture(&mut self, _: &Path) -> CaptureResult {
        Err(CaptureError::Unavailable)
    }
}

/// Produces a bounded thumbnail of the image at `src`, saved to `dst`.
///
/// The longest side of the result is at most `max_side` pixels, aspect ratio
/// preserved. Images already within bounds are re-encoded as-is.
pub fn thumbnail(src: &Path, dst: &Path, max_side: u32) -> Result<(), CaptureError> {
    let full = image::open(src)?;
    // `DynamicImage::thumbnail` upscales smaller images; only ever shrink.
    let bounded = if full.width().max(full.height()) > max_side {
        full.thumbnail(max_side, max_side)
    } else {
        full
    };
    bounded.save(dst)?;
    Ok(())
}
