//! Panel trait for windowed pixel-stream displays

use crate::color::Rgb565;
use crate::geometry::Window;

/// Upper bound for the pixel chunk size (bounds the stack buffer)
pub const MAX_CHUNK_PIXELS: usize = 1024;

/// Default pixel chunk size
pub const DEFAULT_CHUNK_PIXELS: usize = 512;

/// Errors that can occur while talking to a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus transfer failed; the window state on the controller is unknown
    Bus,
    /// Control line (DC/CS/RST/BL) could not be driven
    Pin,
    /// Panel has not been (re-)initialized since power-on or the last failure
    NotInitialized,
    /// Requested region does not fit the scratch buffer or widget capacity
    BufferOverflow,
}

/// A display controller that accepts a pixel stream into a primed window
///
/// Implementations map logical windows to controller addressing (including
/// any rotation) and never validate that the streamed byte count matches
/// the primed window; that is the caller's responsibility.
pub trait Panel {
    /// Logical canvas size `(width, height)`
    fn size(&self) -> (u16, u16);

    /// Maximum pixels per streamed transfer
    fn chunk_pixels(&self) -> usize;

    /// Prime `window` to receive exactly `window.pixel_count()` pixels
    fn set_window(&mut self, window: Window) -> Result<(), DisplayError>;

    /// Stream raw big-endian packed-color bytes into the primed window
    fn write_pixels(&mut self, bytes: &[u8]) -> Result<(), DisplayError>;

    /// Prime `window` and fill it with `color`, chunked
    fn fill_window(&mut self, window: Window, color: Rgb565) -> Result<(), DisplayError> {
        self.set_window(window)?;
        stream_solid(self, window.pixel_count() as usize, color)
    }
}

/// Number of transfers needed to stream `pixels` with `chunk_pixels` per transfer
pub const fn chunk_count(pixels: usize, chunk_pixels: usize) -> usize {
    if chunk_pixels == 0 {
        return 0;
    }
    pixels.div_ceil(chunk_pixels)
}

/// Stream `pixels` copies of `color` into the primed window
///
/// Every transfer carries `chunk_pixels` pixels except possibly the last.
/// A failing transfer aborts the stream; there is no partial success.
pub fn stream_solid<P: Panel + ?Sized>(
    panel: &mut P,
    pixels: usize,
    color: Rgb565,
) -> Result<(), DisplayError> {
    let chunk = panel.chunk_pixels().clamp(1, MAX_CHUNK_PIXELS);
    let mut buffer = [0u8; MAX_CHUNK_PIXELS * 2];
    let bytes = color.to_be_bytes();
    for px in buffer[..chunk * 2].chunks_exact_mut(2) {
        px.copy_from_slice(&bytes);
    }

    let mut remaining = pixels;
    while remaining > 0 {
        let n = remaining.min(chunk);
        panel.write_pixels(&buffer[..n * 2])?;
        remaining -= n;
    }

    Ok(())
}
