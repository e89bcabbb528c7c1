//! Drawing layer for the Croupier display
//!
//! This crate provides:
//! - A fixed-width glyph rasterizer over the 8x8 basic font
//! - [`Canvas`], which clips drawing calls and composites text into a
//!   single windowed transfer
//! - [`Ui`], the themed API used by application code, with menu redraw
//!   diffing so that moving a highlight repaints two rows
//!
//! # Architecture
//!
//! ```text
//! Ui ──► Canvas ──► impl Panel (e.g. croupier_drivers::St7789)
//!  │
//!  └── MenuRenderState (last painted menu)
//! ```
//!
//! Nothing here knows about SPI or pins; any [`Panel`](croupier_core::Panel)
//! implementation will do.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod canvas;
pub mod glyph;
pub mod menu;
pub mod ui;

#[cfg(test)]
mod testing;

// Re-export key types
pub use canvas::{Canvas, DEFAULT_SCRATCH_BYTES};
pub use glyph::{rasterize, GlyphBitmap, TextSize};
pub use menu::{MenuLayout, MenuRenderState, RedrawPlan};
pub use ui::Ui;
