//! The dashboard engine: redraw loop, event dispatch and teardown.

use celldash_core::{
    CancelToken, CellCanvas, Error, Event, EventQueue, Key, KeyboardEvent, MouseEvent, Result,
    Terminal,
};
use celldash_layout::Container;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

type ErrorHandler = Arc<dyn Fn(&Error) + Send + Sync>;
type KeyboardSubscriber = Arc<dyn Fn(&KeyboardEvent) + Send + Sync>;
type MouseSubscriber = Arc<dyn Fn(&MouseEvent) + Send + Sync>;

/// Options for [`run`].
#[derive(Clone, Default)]
pub struct RunOptions {
    redraw_interval: Option<Duration>,
    error_handler: Option<ErrorHandler>,
    keyboard_subscriber: Option<KeyboardSubscriber>,
    mouse_subscriber: Option<MouseSubscriber>,
    focus_key: Option<Key>,
}

impl RunOptions {
    /// The redraw interval used when none is configured.
    pub const DEFAULT_REDRAW_INTERVAL: Duration = Duration::from_millis(250);

    /// Create default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Redraw this often. Defaults to 250 ms.
    #[must_use]
    pub const fn with_redraw_interval(mut self, interval: Duration) -> Self {
        self.redraw_interval = Some(interval);
        self
    }

    /// Install a handler for non-fatal errors: failed widget draws, input
    /// stream errors, masked terminal hiccups. Without a handler they are
    /// ignored.
    #[must_use]
    pub fn on_error(mut self, handler: impl Fn(&Error) + Send + Sync + 'static) -> Self {
        self.error_handler = Some(Arc::new(handler));
        self
    }

    /// Receive a copy of every keyboard event, in addition to container
    /// dispatch.
    #[must_use]
    pub fn subscribe_keyboard(
        mut self,
        subscriber: impl Fn(&KeyboardEvent) + Send + Sync + 'static,
    ) -> Self {
        self.keyboard_subscriber = Some(Arc::new(subscriber));
        self
    }

    /// Receive a copy of every mouse event, in addition to container
    /// dispatch.
    #[must_use]
    pub fn subscribe_mouse(
        mut self,
        subscriber: impl Fn(&MouseEvent) + Send + Sync + 'static,
    ) -> Self {
        self.mouse_subscriber = Some(Arc::new(subscriber));
        self
    }

    /// Cycle container focus whenever this key is pressed.
    #[must_use]
    pub const fn with_focus_key(mut self, key: Key) -> Self {
        self.focus_key = Some(key);
        self
    }

    fn interval(&self) -> Duration {
        self.redraw_interval
            .unwrap_or(Self::DEFAULT_REDRAW_INTERVAL)
    }

    fn report(&self, error: &Error) {
        if let Some(handler) = &self.error_handler {
            handler(error);
        }
    }
}

/// Run the dashboard until the token is cancelled.
///
/// Subscribes to the terminal's event stream (pumped into the event queue on
/// a dedicated thread), redraws periodically and on every resize, dispatches
/// keyboard and mouse events through the container, and keeps exactly one
/// draw in flight at a time. Draw failures go to the error handler and the
/// engine continues; only an unmaskable terminal I/O failure stops it.
pub fn run(
    terminal: Arc<dyn Terminal>,
    container: &mut Container,
    cancel: &CancelToken,
    options: &RunOptions,
) -> Result<()> {
    terminal.hide_cursor()?;

    let queue = EventQueue::new();
    let pump_cancel = CancelToken::new();
    let pump = spawn_event_pump(Arc::clone(&terminal), queue.clone(), pump_cancel.clone());

    let interval = options.interval();
    let mut back_buffer: Option<CellCanvas> = None;

    let result = run_loop(
        &*terminal,
        container,
        cancel,
        options,
        &queue,
        interval,
        &mut back_buffer,
    );

    // Teardown: stop the pump, drain in-flight state, close the queue.
    pump_cancel.cancel();
    queue.close();
    let _ = pump.join();
    result
}

fn spawn_event_pump(
    terminal: Arc<dyn Terminal>,
    queue: EventQueue,
    cancel: CancelToken,
) -> thread::JoinHandle<()> {
    thread::spawn(move || loop {
        match terminal.event(&cancel) {
            Ok(event) => queue.push(event),
            Err(Error::Cancelled) => break,
            Err(error) => {
                queue.push(Event::Error(error.to_string()));
            }
        }
    })
}

#[allow(clippy::too_many_arguments)]
fn run_loop(
    terminal: &dyn Terminal,
    container: &mut Container,
    cancel: &CancelToken,
    options: &RunOptions,
    queue: &EventQueue,
    interval: Duration,
    back_buffer: &mut Option<CellCanvas>,
) -> Result<()> {
    redraw_or_report(terminal, container, options, back_buffer)?;
    let mut next_tick = Instant::now() + interval;

    loop {
        match queue.pull_deadline(cancel, next_tick) {
            Err(Error::Cancelled) => return Ok(()),
            Err(error) => return Err(error),
            Ok(None) => {
                next_tick = Instant::now() + interval;
                redraw_or_report(terminal, container, options, back_buffer)?;
            }
            Ok(Some(event)) => match event {
                Event::Resize { .. } => {
                    *back_buffer = None;
                    redraw_or_report(terminal, container, options, back_buffer)?;
                }
                Event::Keyboard(keyboard) => {
                    if let Some(subscriber) = &options.keyboard_subscriber {
                        subscriber(&keyboard);
                    }
                    if options.focus_key == Some(keyboard.key) {
                        // The focus key is consumed by the engine.
                        container.focus_next();
                    } else if let Err(error) = container.keyboard(&keyboard) {
                        options.report(&error);
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(subscriber) = &options.mouse_subscriber {
                        subscriber(&mouse);
                    }
                    if let Err(error) = container.mouse(&mouse) {
                        options.report(&error);
                    }
                }
                Event::Error(message) => {
                    options.report(&Error::InputEvent(message));
                }
            },
        }
    }
}

/// Redraw one frame. Non-fatal failures are reported and swallowed; a
/// terminal I/O failure is returned and stops the engine.
fn redraw_or_report(
    terminal: &dyn Terminal,
    container: &mut Container,
    options: &RunOptions,
    back_buffer: &mut Option<CellCanvas>,
) -> Result<()> {
    match redraw(terminal, container, back_buffer) {
        Ok(()) => Ok(()),
        Err(error @ Error::TerminalIo(_)) => Err(error),
        Err(error) => {
            options.report(&error);
            Ok(())
        }
    }
}

fn redraw(
    terminal: &dyn Terminal,
    container: &mut Container,
    back_buffer: &mut Option<CellCanvas>,
) -> Result<()> {
    let size = terminal.size();
    if size.is_empty() {
        return Ok(());
    }
    if back_buffer.as_ref().map_or(false, |b| b.size() != size) {
        *back_buffer = None;
    }

    let mut canvas = CellCanvas::from_size(size)?;
    container.draw(&mut canvas)?;
    canvas.apply(terminal, back_buffer.as_ref())?;
    *back_buffer = Some(canvas);
    Ok(())
}
