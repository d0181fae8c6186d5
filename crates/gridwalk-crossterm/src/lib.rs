//! Crossterm terminal front-end for gridwalk.
//!
//! Provides a [`Terminal`] that draws a [`SearchContext`] with two terminal
//! columns per grid cell and turns key presses and clicks into [`Input`]s.

use std::collections::HashSet;
use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEventKind},
    execute, queue,
    style::{Color as CtColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use gridwalk_core::{CellKind, Point};
use gridwalk_paths::{SearchContext, Strategy};

/// Terminal columns used by one grid cell.
pub const CELL_COLUMNS: u16 = 2;

/// Colour of the frontier overlay.
pub const FRONTIER_COLOR: CtColor = CtColor::Rgb {
    r: 255,
    g: 215,
    b: 0,
};

/// A host action decoded from terminal input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Launch(Strategy),
    Reset,
    ToggleWall(Point),
    Quit,
}

/// Background colour for a cell kind.
pub fn kind_color(kind: CellKind) -> CtColor {
    let (r, g, b) = match kind {
        CellKind::Path => (0, 255, 255),
        CellKind::Start => (255, 0, 0),
        CellKind::End => (0, 255, 0),
        CellKind::Wall => (0, 0, 0),
        CellKind::Visited => (0, 0, 255),
        CellKind::Empty => (255, 255, 255),
    };
    CtColor::Rgb { r, g, b }
}

/// Maps a key to an [`Input`].
pub fn key_input(code: KeyCode) -> Option<Input> {
    match code {
        KeyCode::Char('b') => Some(Input::Launch(Strategy::Bfs)),
        KeyCode::Char('d') => Some(Input::Launch(Strategy::Dfs)),
        KeyCode::Char('g') => Some(Input::Launch(Strategy::BestFirst)),
        KeyCode::Char('a') => Some(Input::Launch(Strategy::AStar)),
        KeyCode::Char('r') => Some(Input::Reset),
        KeyCode::Char('q') | KeyCode::Esc => Some(Input::Quit),
        _ => None,
    }
}

/// Grid coordinate under a terminal position.
pub fn screen_to_cell(column: u16, row: u16) -> Point {
    Point::new((column / CELL_COLUMNS) as i32, row as i32)
}

/// One-line key reference shown under the grid.
pub const HELP: &str = "b bfs  d dfs  g best-first  a A*  r reset  click wall  q quit";

/// A terminal session drawing search contexts.
pub struct Terminal {
    mouse_enabled: bool,
    active: bool,
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            mouse_enabled: true,
            active: false,
        }
    }

    /// Configure whether clicks are captured (builder).
    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse_enabled = enabled;
        self
    }

    /// Enter raw mode and the alternate screen.
    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        if self.mouse_enabled {
            execute!(stdout, event::EnableMouseCapture)?;
        }
        self.active = true;
        Ok(())
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn close(&mut self) {
        if !self.active {
            return;
        }
        let mut stdout = io::stdout();
        if self.mouse_enabled {
            let _ = execute!(stdout, event::DisableMouseCapture);
        }
        let _ = execute!(stdout, ResetColor, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        self.active = false;
    }

    /// Draw every cell, the frontier overlay and a status line.
    pub fn draw(&mut self, ctx: &SearchContext, status: &str) -> io::Result<()> {
        let mut stdout = io::stdout();
        let frontier: HashSet<Point> = ctx.frontier_points().into_iter().collect();
        let grid = ctx.grid();
        let blank = " ".repeat(CELL_COLUMNS as usize);

        for y in 0..grid.rows() {
            queue!(stdout, cursor::MoveTo(0, y as u16))?;
            for x in 0..grid.cols() {
                let p = Point::new(x, y);
                let Some(cell) = grid.at(p) else { continue };
                let kind = cell.display_kind();
                let color = match kind {
                    CellKind::Visited | CellKind::Empty if frontier.contains(&p) => FRONTIER_COLOR,
                    _ => kind_color(kind),
                };
                queue!(stdout, SetBackgroundColor(color), Print(&blank))?;
            }
            queue!(stdout, ResetColor)?;
        }

        let line = grid.rows() as u16;
        queue!(
            stdout,
            cursor::MoveTo(0, line),
            terminal::Clear(ClearType::CurrentLine),
            SetForegroundColor(CtColor::Reset),
            Print(status),
            cursor::MoveTo(0, line + 1),
            terminal::Clear(ClearType::CurrentLine),
            Print(HELP),
        )?;
        stdout.flush()
    }

    /// Wait up to `timeout` for one input event.
    pub fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<Input>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        let input = match event::read()? {
            Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) => key_input(code),
            Event::Mouse(me) => match me.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    Some(Input::ToggleWall(screen_to_cell(me.column, me.row)))
                }
                _ => None,
            },
            _ => None,
        };
        if let Some(i) = input {
            log::debug!("terminal: input {i:?}");
        }
        Ok(input)
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        self.close();
    }
}
