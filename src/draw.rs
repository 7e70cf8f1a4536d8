use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::{Hide, MoveDown, MoveToColumn, MoveUp, Show},
    queue,
    style::Print,
    tty::IsTty,
};

use crate::{
    grid::{Grid, ALIVE, DEAD},
    proc::Observer,
};

const BORDER: char = '=';
const MARGIN: &str = "  ";

/// Prints each generation as a bordered text frame.
///
/// When animating, the cursor is moved back to the top of the frame after
/// every draw so the next generation paints over the previous one.
pub struct Renderer<W: Write> {
    out: W,
    animate: bool,
    started: bool,
    lines: u16,
}

impl Renderer<Stdout> {
    /// Renders to stdout, animating only when stdout is a terminal.
    pub fn stdout() -> Self {
        Renderer::new(io::stdout(), stdout_is_terminal())
    }
}

impl<W: Write> Renderer<W> {
    #[inline]
    pub fn new(out: W, animate: bool) -> Self {
        Renderer {
            out,
            animate,
            started: false,
            lines: 0,
        }
    }

    #[inline]
    pub fn animate(&self) -> bool {
        self.animate
    }

    pub fn draw(&mut self, grid: &Grid) -> io::Result<()> {
        if self.animate && !self.started {
            queue!(self.out, Hide)?;
        }
        self.started = true;

        let frame = frame(grid);
        let lines = frame.matches('\n').count();
        self.lines = u16::try_from(lines).unwrap_or(u16::MAX);

        queue!(self.out, Print(frame))?;
        if self.animate {
            queue!(self.out, MoveUp(self.lines))?;
        }
        self.out.flush()
    }

    /// Leaves the cursor below the last frame and makes it visible again.
    pub fn finish(&mut self) -> io::Result<()> {
        if self.animate && self.started {
            queue!(self.out, MoveDown(self.lines), MoveToColumn(0), Show)?;
            self.started = false;
        }
        self.out.flush()
    }
}

impl<W: Write> Drop for Renderer<W> {
    fn drop(&mut self) {
        let _ = self.finish();
    }
}

impl<W: Write> Observer for Renderer<W> {
    fn on_generation(&mut self, grid: &Grid) -> io::Result<()> {
        self.draw(grid)
    }
}

/// Builds the text of one frame: header with the generation number, the
/// cells row by row, and a closing border.
pub fn frame(grid: &Grid) -> String {
    let width = (grid.width() as f64 * 1.1).round() as usize;
    let border = format!("\n{}\n", BORDER.to_string().repeat(width));

    let mut s = String::with_capacity((grid.width() + 4) * (grid.height() + 6));
    s.push_str(&border);
    s.push_str(&format!("    Generation: {}", grid.generation()));
    s.push_str(&border);

    let mut last_row = None;
    grid.for_each_cell(|row, column| {
        if last_row != Some(row) {
            s.push('\n');
            s.push_str(MARGIN);
            last_row = Some(row);
        }
        s.push(if grid.cell(row, column) { ALIVE } else { DEAD });
    });

    s.push_str(&border);
    s
}

#[inline]
pub fn stdout_is_terminal() -> bool {
    io::stdout().is_tty()
}
