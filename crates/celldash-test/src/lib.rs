//! Testing harness for celldash applications and infrastructure.
//!
//! Provides a programmable [`FakeTerminal`], golden-image grid diffs and a
//! [`MirrorWidget`] that records everything the infrastructure does to it.

mod diff;
mod fake_terminal;
mod mirror;

pub use diff::{assert_canvas, assert_screen, canvas_string, golden_diff};
pub use fake_terminal::FakeTerminal;
pub use mirror::MirrorWidget;
