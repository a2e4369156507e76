//! A widget that mirrors everything the infrastructure does to it.

use celldash_core::{
    CellCanvas, CellStyle, KeyboardEvent, MouseEvent, Options, Result, Size, Widget,
};
use std::sync::Mutex;

#[derive(Debug)]
struct MirrorState {
    options: Options,
    fill: char,
    draw_count: usize,
    canvas_sizes: Vec<Size>,
    keyboard_events: Vec<KeyboardEvent>,
    mouse_events: Vec<MouseEvent>,
}

/// A test widget recording every call it receives.
///
/// Draws by filling its canvas with a configurable rune, so container tests
/// can recognize each widget's region on the composed screen. State lives
/// behind an internal lock, as the widget contract requires, which also
/// makes the mirror usable for exercising concurrent option changes.
#[derive(Debug)]
pub struct MirrorWidget {
    state: Mutex<MirrorState>,
}

impl MirrorWidget {
    /// Create a mirror filling its canvas with `fill` and reporting the
    /// given options.
    #[must_use]
    pub fn new(fill: char, options: Options) -> Self {
        Self {
            state: Mutex::new(MirrorState {
                options,
                fill,
                draw_count: 0,
                canvas_sizes: Vec::new(),
                keyboard_events: Vec::new(),
                mouse_events: Vec::new(),
            }),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MirrorState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Replace the reported options. Takes effect on the next
    /// `options()` call, modelling widgets whose constraints change at
    /// runtime.
    pub fn set_options(&self, options: Options) {
        self.lock().options = options;
    }

    /// Number of completed draws.
    #[must_use]
    pub fn draw_count(&self) -> usize {
        self.lock().draw_count
    }

    /// Sizes of the canvases received, in draw order.
    #[must_use]
    pub fn canvas_sizes(&self) -> Vec<Size> {
        self.lock().canvas_sizes.clone()
    }

    /// All keyboard events received, in order.
    #[must_use]
    pub fn keyboard_events(&self) -> Vec<KeyboardEvent> {
        self.lock().keyboard_events.clone()
    }

    /// All mouse events received, in order.
    #[must_use]
    pub fn mouse_events(&self) -> Vec<MouseEvent> {
        self.lock().mouse_events.clone()
    }
}

impl Widget for MirrorWidget {
    fn options(&self) -> Options {
        self.lock().options
    }

    fn draw(&self, canvas: &mut CellCanvas) -> Result<()> {
        let mut state = self.lock();
        canvas.set_area_cells(canvas.area(), state.fill, CellStyle::new())?;
        state.draw_count += 1;
        state.canvas_sizes.push(canvas.size());
        Ok(())
    }

    fn keyboard(&self, event: &KeyboardEvent) -> Result<()> {
        self.lock().keyboard_events.push(*event);
        Ok(())
    }

    fn mouse(&self, event: &MouseEvent) -> Result<()> {
        self.lock().mouse_events.push(*event);
        Ok(())
    }
}
