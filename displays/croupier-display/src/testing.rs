//! Framebuffer-backed panel for host tests

use std::vec::Vec;

use croupier_core::traits::{DisplayError, Panel};
use croupier_core::{Rgb565, Window};

/// Observable panel traffic
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Window(Window),
    /// Pixel count of one transfer
    Write(usize),
}

/// Panel that records traffic and keeps the resulting image
pub struct MockPanel {
    width: u16,
    height: u16,
    chunk: usize,
    pub ops: Vec<Op>,
    pub fb: Vec<Rgb565>,
    window: Option<Window>,
    cursor: usize,
}

impl MockPanel {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            chunk: 512,
            ops: Vec::new(),
            fb: vec![Rgb565(0x1234); width as usize * height as usize],
            window: None,
            cursor: 0,
        }
    }

    pub fn at(&self, x: u16, y: u16) -> Rgb565 {
        self.fb[y as usize * self.width as usize + x as usize]
    }

    pub fn windows(&self) -> Vec<Window> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Window(w) => Some(*w),
                Op::Write(_) => None,
            })
            .collect()
    }

    pub fn writes(&self) -> Vec<usize> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Write(n) => Some(*n),
                Op::Window(_) => None,
            })
            .collect()
    }

    pub fn reset_ops(&mut self) {
        self.ops.clear();
    }

    /// Every pixel of `window` has `color`
    pub fn region_is(&self, window: Window, color: Rgb565) -> bool {
        (window.y0..=window.y1).all(|y| (window.x0..=window.x1).all(|x| self.at(x, y) == color))
    }
}

impl Panel for MockPanel {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn chunk_pixels(&self) -> usize {
        self.chunk
    }

    fn set_window(&mut self, window: Window) -> Result<(), DisplayError> {
        assert!(window.x1 < self.width && window.y1 < self.height);
        self.ops.push(Op::Window(window));
        self.window = Some(window);
        self.cursor = 0;
        Ok(())
    }

    fn write_pixels(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        let window = self.window.ok_or(DisplayError::NotInitialized)?;
        let ww = window.width() as usize;
        for px in bytes.chunks_exact(2) {
            let x = window.x0 as usize + self.cursor % ww;
            let y = window.y0 as usize + self.cursor / ww;
            assert!(y <= window.y1 as usize, "pixel stream overran the window");
            self.fb[y * self.width as usize + x] = Rgb565(u16::from_be_bytes([px[0], px[1]]));
            self.cursor += 1;
        }
        self.ops.push(Op::Write(bytes.len() / 2));
        Ok(())
    }
}
