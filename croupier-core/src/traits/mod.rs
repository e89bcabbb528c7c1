//! Hardware abstraction traits
//!
//! These traits define the interface between the drawing layers and
//! display-controller implementations.

pub mod panel;

pub use panel::{
    chunk_count, stream_solid, DisplayError, Panel, DEFAULT_CHUNK_PIXELS, MAX_CHUNK_PIXELS,
};
