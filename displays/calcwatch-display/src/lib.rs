//! Pixel pipeline for the Calcwatch 128x64 OLED
//!
//! This crate provides:
//! - [`Framebuffer`], the 1024-byte page-organised pixel grid
//! - Drawing primitives (blocks, lines, packed bitmaps)
//! - The dot-matrix font and its ASCII glyph map
//! - The seven-segment renderer used for digits
//! - [`Ssd1306`], the controller driver implementing [`DisplayTransport`]
//!
//! # Architecture
//!
//! Rendering is immediate-mode: the watch core clears a frame, draws the
//! whole screen through [`Framebuffer::set`], and hands the frame to a
//! [`DisplayTransport`], which pushes it page by page. Nothing here keeps
//! dirty regions or retained widgets.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod backend;
pub mod draw;
pub mod font;
pub mod framebuffer;
pub mod segment;
pub mod ssd1306;

// Re-export key types
pub use backend::{DisplayError, DisplayTransport};
pub use font::{draw_glyph_run, draw_text, GLYPH_MAP};
pub use framebuffer::{Framebuffer, FRAME_SIZE, HEIGHT, PAGES, WIDTH};
pub use segment::{draw_number, draw_seg_str, SegmentStyle, Segments};
pub use ssd1306::Ssd1306;
