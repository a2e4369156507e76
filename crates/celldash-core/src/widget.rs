//! The abstract widget contract.

use crate::canvas::CellCanvas;
use crate::error::{Error, Result};
use crate::event::{KeyboardEvent, MouseEvent};
use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// Which keyboard events a widget wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum KeyboardScope {
    /// No keyboard events.
    #[default]
    None,
    /// Keyboard events while the widget's container is focused.
    Focused,
    /// Every keyboard event, focused or not.
    Global,
}

/// Which mouse events a widget wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MouseScope {
    /// No mouse events.
    #[default]
    None,
    /// Mouse events whose position falls on the widget's canvas.
    Widget,
    /// Every mouse event, translated into the widget's frame; positions
    /// outside the canvas indicate events elsewhere on the screen.
    Global,
}

/// Constraints and subscriptions a widget declares.
///
/// Queried before every draw; a widget may return different options between
/// calls and the infrastructure validates the canvas against the snapshot it
/// takes immediately before drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Options {
    /// Smallest canvas the widget can draw on. Zero means no minimum.
    pub min_size: Size,
    /// Largest canvas the widget wants; zero on an axis means unbounded.
    pub max_size: Size,
    /// Required width:height ratio; zero on either axis means any ratio.
    pub ratio: Size,
    /// Keyboard subscription.
    pub want_keyboard: KeyboardScope,
    /// Mouse subscription.
    pub want_mouse: MouseScope,
}

impl Options {
    /// Create default options: no constraints, no subscriptions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum canvas size.
    #[must_use]
    pub const fn with_min_size(mut self, min_size: Size) -> Self {
        self.min_size = min_size;
        self
    }

    /// Set the maximum canvas size (zero axis = unbounded).
    #[must_use]
    pub const fn with_max_size(mut self, max_size: Size) -> Self {
        self.max_size = max_size;
        self
    }

    /// Require a width:height ratio.
    #[must_use]
    pub const fn with_ratio(mut self, ratio: Size) -> Self {
        self.ratio = ratio;
        self
    }

    /// Set the keyboard subscription.
    #[must_use]
    pub const fn with_keyboard(mut self, scope: KeyboardScope) -> Self {
        self.want_keyboard = scope;
        self
    }

    /// Set the mouse subscription.
    #[must_use]
    pub const fn with_mouse(mut self, scope: MouseScope) -> Self {
        self.want_mouse = scope;
        self
    }

    /// Validate the option values. Called at configuration boundaries,
    /// never during draws.
    pub fn validate(&self) -> Result<()> {
        for (name, size) in [
            ("min_size", self.min_size),
            ("max_size", self.max_size),
            ("ratio", self.ratio),
        ] {
            if size.width < 0 || size.height < 0 {
                return Err(Error::invalid_argument(format!(
                    "{name} {size:?} must not be negative"
                )));
            }
        }
        if self.max_size.width > 0 && self.max_size.width < self.min_size.width {
            return Err(Error::invalid_argument(format!(
                "max_size width {} is below min_size width {}",
                self.max_size.width, self.min_size.width
            )));
        }
        if self.max_size.height > 0 && self.max_size.height < self.min_size.height {
            return Err(Error::invalid_argument(format!(
                "max_size height {} is below min_size height {}",
                self.max_size.height, self.min_size.height
            )));
        }
        Ok(())
    }
}

/// A drawable that can subscribe to input.
///
/// All methods take `&self` and may be called while user threads mutate the
/// widget's state: implementations own their state behind an internal lock.
/// `draw` is synchronous, writes only to the given canvas, and must handle
/// any canvas satisfying the widget's declared options.
pub trait Widget: Send + Sync {
    /// The widget's current constraints and subscriptions.
    fn options(&self) -> Options;

    /// Draw onto the canvas. The canvas satisfies the options reported by
    /// the immediately preceding `options` call.
    fn draw(&self, canvas: &mut CellCanvas) -> Result<()>;

    /// Receive a keyboard event. Only called when subscribed.
    fn keyboard(&self, event: &KeyboardEvent) -> Result<()> {
        let _ = event;
        Ok(())
    }

    /// Receive a mouse event. Only called when subscribed.
    fn mouse(&self, event: &MouseEvent) -> Result<()> {
        let _ = event;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = Options::default();
        assert_eq!(opts.min_size, Size::ZERO);
        assert_eq!(opts.max_size, Size::ZERO);
        assert_eq!(opts.ratio, Size::ZERO);
        assert_eq!(opts.want_keyboard, KeyboardScope::None);
        assert_eq!(opts.want_mouse, MouseScope::None);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_option_combinators() {
        let opts = Options::new()
            .with_min_size(Size::new(2, 2))
            .with_max_size(Size::new(10, 0))
            .with_ratio(Size::new(2, 1))
            .with_keyboard(KeyboardScope::Focused)
            .with_mouse(MouseScope::Widget);
        assert_eq!(opts.min_size, Size::new(2, 2));
        assert_eq!(opts.max_size, Size::new(10, 0));
        assert_eq!(opts.want_keyboard, KeyboardScope::Focused);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_negative_sizes_invalid() {
        let opts = Options::new().with_min_size(Size::new(-1, 0));
        assert!(matches!(opts.validate(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_max_below_min_invalid() {
        let opts = Options::new()
            .with_min_size(Size::new(5, 5))
            .with_max_size(Size::new(3, 0));
        assert!(matches!(opts.validate(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_zero_max_is_unbounded() {
        let opts = Options::new()
            .with_min_size(Size::new(5, 5))
            .with_max_size(Size::ZERO);
        assert!(opts.validate().is_ok());
    }
}
