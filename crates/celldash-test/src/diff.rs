//! Golden-image diffs for cell grids.

use crate::fake_terminal::FakeTerminal;
use celldash_core::CellCanvas;
use celldash_core::TRAILER_RUNE;

/// Compare two newline-separated grids.
///
/// Returns `None` when they match, otherwise a human-readable report with a
/// `^` marker under every differing column.
#[must_use]
pub fn golden_diff(want: &str, got: &str) -> Option<String> {
    if want == got {
        return None;
    }

    let want_lines: Vec<&str> = want.lines().collect();
    let got_lines: Vec<&str> = got.lines().collect();
    let rows = want_lines.len().max(got_lines.len());

    let mut report = String::from("grids differ:\n");
    for row in 0..rows {
        let want_line = want_lines.get(row).copied().unwrap_or("");
        let got_line = got_lines.get(row).copied().unwrap_or("");
        report.push_str(&format!("row {row:>3} want: |{want_line}|\n"));
        report.push_str(&format!("        got:  |{got_line}|\n"));
        if want_line != got_line {
            let mut markers = String::new();
            let want_runes: Vec<char> = want_line.chars().collect();
            let got_runes: Vec<char> = got_line.chars().collect();
            for col in 0..want_runes.len().max(got_runes.len()) {
                if want_runes.get(col) == got_runes.get(col) {
                    markers.push(' ');
                } else {
                    markers.push('^');
                }
            }
            report.push_str(&format!("              |{markers}|\n"));
        }
    }
    Some(report)
}

/// Render a canvas the same way [`FakeTerminal::screen`] does.
#[must_use]
pub fn canvas_string(canvas: &CellCanvas) -> String {
    let area = canvas.area();
    let mut out = String::new();
    for y in area.y..area.bottom() {
        if y > area.y {
            out.push('\n');
        }
        for x in area.x..area.right() {
            let cell = canvas
                .cell(celldash_core::Point::new(x, y))
                .expect("point iterated from the canvas area");
            if cell.rune != TRAILER_RUNE {
                out.push(cell.rune);
            }
        }
    }
    out
}

/// Assert that the terminal's screen matches the expected grid, panicking
/// with a diff report otherwise.
///
/// # Panics
///
/// Panics when the grids differ.
pub fn assert_screen(terminal: &FakeTerminal, want: &str) {
    if let Some(report) = golden_diff(want, &terminal.screen()) {
        panic!("{report}");
    }
}

/// Assert that a canvas matches the expected grid.
///
/// # Panics
///
/// Panics when the grids differ.
pub fn assert_canvas(canvas: &CellCanvas, want: &str) {
    if let Some(report) = golden_diff(want, &canvas_string(canvas)) {
        panic!("{report}");
    }
}
