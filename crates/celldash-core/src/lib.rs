//! Core types for the celldash terminal dashboard library.
//!
//! This crate provides the foundations everything else builds on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - The cell model: [`Cell`], [`CellStyle`], [`Color`]
//! - Canvases: [`CellCanvas`] and the sub-cell [`BrailleCanvas`]
//! - Drawing primitives: text, HV lines with junctions, borders, circles
//! - The [`Widget`] contract and the [`Terminal`] back-end contract
//! - The [`EventQueue`] connecting back-ends to the engine

mod braille;
mod cancel;
mod canvas;
mod cell;
mod color;
pub mod draw;
mod error;
mod event;
mod geometry;
mod queue;
mod rune;
mod terminal;
pub mod widget;

pub use braille::{BrailleCanvas, BRAILLE_BASE, PIXELS_PER_CELL_X, PIXELS_PER_CELL_Y};
pub use cancel::CancelToken;
pub use canvas::CellCanvas;
pub use cell::{Cell, CellStyle, TRAILER_RUNE};
pub use color::{Color, SystemColor};
pub use error::{Error, Result};
pub use event::{Event, Key, KeyboardEvent, MouseButton, MouseEvent};
pub use geometry::{Point, Rect, Size};
pub use queue::EventQueue;
pub use rune::{is_forced_half_width, rune_width, text_width, ELLIPSIS_RUNE, RESIZE_MARKER_RUNE};
pub use terminal::Terminal;
pub use widget::{KeyboardScope, MouseScope, Options, Widget};
