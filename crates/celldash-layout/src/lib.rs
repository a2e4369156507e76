//! Container layout tree for the celldash terminal dashboard library.
//!
//! A container is a recursive binary-split tree. Each node optionally draws
//! a border with a title, reserves padding, and either splits into two
//! children or holds a widget. The tree is laid out against the terminal
//! size once per draw and routes keyboard and mouse input to its widgets.

mod builder;
mod container;
mod layout;

pub use builder::{Axis, ContainerBuilder, SplitSide, SplitSize};
pub use container::Container;
