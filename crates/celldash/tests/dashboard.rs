//! End-to-end scenarios through the public API.

use celldash::draw::{
    draw_border, draw_braille_circle, draw_text, BorderOptions, CircleOptions, OverrunMode,
    TextOptions,
};
use celldash::{
    BrailleCanvas, CancelToken, CellCanvas, CellStyle, ContainerBuilder, Error, Event, EventQueue,
    Key, KeyboardEvent, Options, Point, Rect, RunOptions, Size, SplitSize,
};
use celldash_test::{assert_canvas, FakeTerminal, MirrorWidget};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

#[test]
fn border_corners_and_sides() {
    let mut cvs = CellCanvas::from_size(Size::new(4, 4)).unwrap();
    draw_border(&mut cvs, Rect::new(0, 0, 4, 4), &BorderOptions::new()).unwrap();
    assert_canvas(&cvs, "┌──┐\n│  │\n│  │\n└──┘");
}

#[test]
fn three_dot_text_on_a_two_cell_canvas() {
    let mut cvs = CellCanvas::from_size(Size::new(2, 1)).unwrap();
    let opts = TextOptions::new().with_overrun(OverrunMode::ThreeDot);
    draw_text(&mut cvs, "abc", Point::ORIGIN, &opts).unwrap();
    assert_canvas(&cvs, "a…");
}

#[test]
fn full_width_rune_trimmed_from_a_single_cell() {
    let mut cvs = CellCanvas::from_size(Size::new(1, 1)).unwrap();
    let opts = TextOptions::new().with_overrun(OverrunMode::Trim);
    draw_text(&mut cvs, "世", Point::ORIGIN, &opts).unwrap();
    assert_canvas(&cvs, " ");
}

#[test]
fn braille_circle_outline_has_twelve_pixels() {
    let mut bc = BrailleCanvas::new(Rect::new(0, 0, 3, 3)).unwrap();
    draw_braille_circle(&mut bc, Point::new(2, 2), 2, &CircleOptions::new()).unwrap();

    let area = bc.pixel_area();
    let mut on = 0;
    for y in area.y..area.bottom() {
        for x in area.x..area.right() {
            if bc.pixel(Point::new(x, y)).unwrap() {
                on += 1;
            }
        }
    }
    assert_eq!(on, 12);
    assert!(!bc.pixel(Point::new(2, 2)).unwrap());
}

#[test]
fn seventy_percent_split_renders_side_by_side() {
    let left = Arc::new(MirrorWidget::new('l', Options::new()));
    let right = Arc::new(MirrorWidget::new('r', Options::new()));
    let terminal = Arc::new(FakeTerminal::new(Size::new(100, 10)));
    let cancel = CancelToken::new();

    let handle = {
        let terminal = Arc::clone(&terminal);
        let cancel = cancel.clone();
        let (left, right) = (left.clone(), right.clone());
        thread::spawn(move || {
            let mut container = ContainerBuilder::new()
                .split_horizontal(
                    SplitSize::Percent(70),
                    ContainerBuilder::new().with_widget(left),
                    ContainerBuilder::new().with_widget(right),
                )
                .build()?;
            celldash::run(terminal, &mut container, &cancel, &RunOptions::new())
        })
    };
    thread::sleep(Duration::from_millis(50));
    cancel.cancel();
    handle.join().expect("engine thread panicked").unwrap();

    assert_eq!(left.canvas_sizes()[0], Size::new(70, 10));
    assert_eq!(right.canvas_sizes()[0], Size::new(30, 10));
    for row in terminal.screen().lines() {
        assert_eq!(&row[..70], "l".repeat(70));
        assert_eq!(&row[70..], "r".repeat(30));
    }
}

#[test]
fn queue_pull_cancels_then_delivers() {
    let queue = EventQueue::new();

    // No events and an already-fired token: cancelled well within 500 ms.
    let cancel = CancelToken::new();
    cancel.cancel();
    let start = Instant::now();
    assert!(matches!(queue.pull(&cancel), Err(Error::Cancelled)));
    assert!(start.elapsed() < Duration::from_millis(500));

    // An event and a live token: delivered.
    let event = Event::Keyboard(KeyboardEvent::new(Key::Char('e')));
    queue.push(event.clone());
    assert_eq!(queue.pull(&CancelToken::new()).unwrap(), event);
}

#[test]
fn styles_survive_the_full_pipeline() {
    let style = CellStyle::new()
        .with_fg(celldash::Color::System(celldash::SystemColor::Green))
        .with_bold(true);
    let widget = Arc::new(StyledWidget { style });
    let terminal = Arc::new(FakeTerminal::new(Size::new(3, 1)));
    let cancel = CancelToken::new();

    let handle = {
        let terminal = Arc::clone(&terminal);
        let cancel = cancel.clone();
        thread::spawn(move || {
            let mut container = ContainerBuilder::new().with_widget(widget).build()?;
            celldash::run(terminal, &mut container, &cancel, &RunOptions::new())
        })
    };
    thread::sleep(Duration::from_millis(50));
    cancel.cancel();
    handle.join().expect("engine thread panicked").unwrap();

    let cell = terminal.cell(Point::new(0, 0)).unwrap();
    assert_eq!(cell.rune, 's');
    assert_eq!(cell.style, style);
}

struct StyledWidget {
    style: CellStyle,
}

impl celldash::Widget for StyledWidget {
    fn options(&self) -> Options {
        Options::new()
    }

    fn draw(&self, canvas: &mut CellCanvas) -> celldash::Result<()> {
        canvas.set_area_cells(canvas.area(), 's', self.style)
    }
}
